use std::fs;

use kanatype::romaji::{default_toml, parse_romaji_toml};
use kanatype::{settings, Lexicon};

use super::die;

/// Install custom romaji and settings tables before anything reads them.
pub fn install_overrides(romaji: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = romaji {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Lexicon::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
}

pub fn romaji_export() {
    print!("{}", default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(parse_romaji_toml(&content), "Error: {}");
    let digraphs = map.keys().filter(|k| k.chars().count() == 2).count();
    println!("OK: {} units ({} digraphs)", map.len(), digraphs);
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: session.base_seconds={}, session.points_per_char={}, session.bonus_streak_interval={}",
        s.session.base_seconds, s.session.points_per_char, s.session.bonus_streak_interval
    );
}
