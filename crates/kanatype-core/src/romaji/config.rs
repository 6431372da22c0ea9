use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_typeable_spelling;

use super::table::is_reserved_unit;

#[derive(Deserialize)]
struct RomajiConfig {
    units: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[units] table is empty")]
    Empty,
    #[error("unit must be one or two characters: {0:?}")]
    BadUnit(String),
    #[error("unit is handled by the candidate generator and cannot be remapped: {0}")]
    ReservedUnit(String),
    #[error("no spellings for unit: {0}")]
    NoSpellings(String),
    #[error("spelling for unit {unit} must be lowercase printable ASCII: {spelling:?}")]
    BadSpelling { unit: String, spelling: String },
    #[error("romaji lexicon already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<unit, spellings>`.
///
/// Spelling order is preserved; the first spelling of each unit is the
/// preferred one.
pub fn parse_romaji_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.units.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (unit, spellings) in &config.units {
        let len = unit.chars().count();
        if len == 0 || len > 2 {
            return Err(RomajiConfigError::BadUnit(unit.clone()));
        }
        if is_reserved_unit(unit) {
            return Err(RomajiConfigError::ReservedUnit(unit.clone()));
        }
        if spellings.is_empty() {
            return Err(RomajiConfigError::NoSpellings(unit.clone()));
        }
        if let Some(bad) = spellings.iter().find(|s| !is_typeable_spelling(s)) {
            return Err(RomajiConfigError::BadSpelling {
                unit: unit.clone(),
                spelling: bad.clone(),
            });
        }
    }

    Ok(config.units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[units]
"あ" = ["a"]
"し" = ["shi", "si"]
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["あ"], vec!["a"]);
        assert_eq!(map["し"], vec!["shi", "si"]);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 100, "expected 100+ units, got {}", map.len());
        assert_eq!(map["ち"], vec!["chi", "ti"]);
        assert_eq!(map["を"], vec!["wo", "o"]);
    }

    #[test]
    fn error_empty_units() {
        let err = parse_romaji_toml("[units]\n").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_long_unit() {
        let toml = r#"
[units]
"きゃあ" = ["kyaa"]
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::BadUnit(_)));
    }

    #[test]
    fn error_reserved_unit() {
        let toml = r#"
[units]
"ん" = ["n"]
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::ReservedUnit(_)));
    }

    #[test]
    fn error_no_spellings() {
        let toml = r#"
[units]
"あ" = []
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::NoSpellings(_)));
    }

    #[test]
    fn error_bad_spelling() {
        let toml = r#"
[units]
"あ" = ["A"]
"#;
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::BadSpelling { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
