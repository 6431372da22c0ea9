use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kanatype::settings::settings;
use kanatype_cli::commands::{catalog_ops, config_ops, play_ops};

#[derive(Parser)]
#[command(name = "kanatype", about = "Kana romaji typing drills and data tools")]
struct Cli {
    /// Write JSON trace logs to this directory (needs the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    /// Custom romaji table TOML
    #[arg(long, global = true)]
    romaji: Option<String>,

    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play in line mode on stdin
    Play {
        /// Word catalog JSON (defaults to the built-in sample)
        #[arg(long)]
        catalog: Option<String>,
        /// Time budget in seconds (defaults to session.base_seconds)
        #[arg(long)]
        seconds: Option<f64>,
    },
    /// Feed a key sequence and print the session after every key
    Replay {
        /// Keys to type, one character per frame
        keys: String,
        /// Word catalog JSON (defaults to the built-in sample)
        #[arg(long)]
        catalog: Option<String>,
        /// Milliseconds elapsed before each key
        #[arg(long, default_value = "100")]
        frame_ms: f64,
        /// Time budget in seconds (defaults to session.base_seconds)
        #[arg(long)]
        seconds: Option<f64>,
        /// Output snapshots as JSON lines
        #[arg(long)]
        json: bool,
    },
    /// Show the units and accepted spellings of a kana word
    Candidates {
        /// Kana word
        kana: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Validate a word catalog against the romaji lexicon
    Check {
        /// Word catalog JSON (defaults to the built-in sample)
        catalog: Option<String>,
    },
    /// Print the built-in romaji table
    RomajiExport,
    /// Validate a romaji table TOML file
    RomajiValidate {
        /// TOML file
        file: String,
    },
    /// Print the built-in settings
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let trace_guard = cli.trace_dir.as_deref().and_then(kanatype::init_tracing);
    if cli.trace_dir.is_some() && trace_guard.is_none() {
        eprintln!("Warning: tracing unavailable (build with --features trace)");
    }
    config_ops::install_overrides(cli.romaji.as_deref(), cli.settings.as_deref());

    let base_seconds = |s: Option<f64>| s.unwrap_or(settings().session.base_seconds);

    match cli.command {
        Command::Play { catalog, seconds } => {
            play_ops::play(catalog.as_deref(), base_seconds(seconds))
        }
        Command::Replay {
            keys,
            catalog,
            frame_ms,
            seconds,
            json,
        } => play_ops::replay(
            catalog.as_deref(),
            &keys,
            frame_ms,
            base_seconds(seconds),
            json,
        ),
        Command::Candidates { kana, json } => catalog_ops::candidates(&kana, json),
        Command::Check { catalog } => catalog_ops::check(catalog.as_deref()),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
