pub(crate) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Unit doubling the following consonant (small tsu).
pub const GEMINATION: &str = "っ";
/// Unit appending the length mark.
pub const LENGTHENING: &str = "ー";
/// Syllabic nasal.
pub const NASAL: &str = "ん";

/// Literal spelling of [`LENGTHENING`].
pub const LENGTH_MARK: &str = "-";

/// Nasal spellings when the next onset could be read as part of the nasal.
pub const NASAL_AMBIGUOUS: [&str; 2] = ["nn", "n'"];
/// Nasal spellings when the next onset cannot merge with it.
pub const NASAL_FREE: [&str; 2] = ["nn", "n"];

pub(crate) fn is_reserved_unit(unit: &str) -> bool {
    unit == GEMINATION || unit == LENGTHENING || unit == NASAL
}
