use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable mapping from kana unit to its accepted romaji spellings.
#[derive(Debug, Clone)]
pub struct Lexicon {
    units: HashMap<String, Vec<String>>,
}

impl Lexicon {
    /// Set a custom TOML table before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_romaji_toml(toml_str).expect("romaji TOML must be valid");
            Lexicon::from_table(map)
        })
    }

    pub fn from_table(table: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            units: table.into_iter().collect(),
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiConfigError> {
        parse_romaji_toml(toml_str).map(Self::from_table)
    }

    /// Spellings of `unit` in preference order. Units missing from the table
    /// spell as themselves.
    pub fn romanizations_of(&self, unit: &str) -> Cow<'_, [String]> {
        match self.units.get(unit) {
            Some(spellings) => Cow::Borrowed(spellings.as_slice()),
            None => Cow::Owned(vec![unit.to_string()]),
        }
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains_key(unit)
    }

    /// A digraph is any two-character unit in the table.
    pub fn is_digraph(&self, unit: &str) -> bool {
        unit.chars().count() == 2 && self.units.contains_key(unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All units with their spellings, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.units
            .iter()
            .map(|(unit, spellings)| (unit.as_str(), spellings.as_slice()))
    }
}
