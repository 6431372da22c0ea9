//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji lexicon.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::word::Word;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub session: SessionSettings,
    pub fallback_word: Word,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub base_seconds: f64,
    pub min_seconds: f64,
    pub points_per_char: u32,
    pub bonus_streak_interval: u32,
    pub max_bonus_seconds: u32,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! invalid {
        ($field:expr, $reason:expr) => {
            return Err(SettingsError::InvalidValue {
                field: $field.to_string(),
                reason: $reason.to_string(),
            })
        };
    }
    macro_rules! check_positive_secs {
        ($field:ident) => {
            // NaN fails this comparison too
            if !(s.session.$field > 0.0) {
                invalid!(concat!("session.", stringify!($field)), "must be positive");
            }
        };
    }
    macro_rules! check_positive_u32 {
        ($field:ident) => {
            if s.session.$field == 0 {
                invalid!(concat!("session.", stringify!($field)), "must be positive");
            }
        };
    }

    check_positive_secs!(base_seconds);
    check_positive_secs!(min_seconds);
    check_positive_u32!(points_per_char);
    check_positive_u32!(bonus_streak_interval);

    if s.fallback_word.phonetic.is_empty() {
        invalid!("fallback_word.phonetic", "must not be empty");
    }

    Ok(())
}
