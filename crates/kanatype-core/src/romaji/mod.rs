//! Kana-to-romaji spelling model.
//!
//! A [`Lexicon`] maps kana units to their accepted romaji spellings, the
//! tokenizer splits a word into units (digraphs first), and the candidate
//! generator expands the units into every complete spelling, resolving
//! sokuon (っ), chōon (ー) and hatsuon (ん) from the following unit.

mod candidates;
mod config;
mod lexicon;
mod table;
mod tokenizer;

pub use candidates::{candidates_for, generate_candidates};
pub use config::{parse_romaji_toml, RomajiConfigError};
pub use lexicon::Lexicon;
pub use table::{GEMINATION, LENGTHENING, LENGTH_MARK, NASAL};
pub use tokenizer::{tokenize, PhoneticUnit, UnitKind};

/// Returns the embedded default romaji table.
pub fn default_toml() -> &'static str {
    table::DEFAULT_TOML
}
