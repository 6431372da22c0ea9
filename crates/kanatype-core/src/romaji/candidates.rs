use std::collections::HashSet;

use tracing::{debug, debug_span};

use crate::unicode::{is_consonant, is_vowel};

use super::lexicon::Lexicon;
use super::table::{LENGTH_MARK, NASAL_AMBIGUOUS, NASAL_FREE};
use super::tokenizer::{tokenize, PhoneticUnit, UnitKind};

/// Every complete romaji spelling of `phonetic`, in generation order.
pub fn candidates_for(lexicon: &Lexicon, phonetic: &str) -> Vec<String> {
    let units = tokenize(lexicon, phonetic);
    generate_candidates(lexicon, &units)
}

/// Expand a unit sequence into its distinct spellings.
///
/// The first spelling is built from the first listed spelling of every unit,
/// which makes it the preferred display spelling.
pub fn generate_candidates(lexicon: &Lexicon, units: &[PhoneticUnit]) -> Vec<String> {
    let _span = debug_span!("generate_candidates", unit_count = units.len()).entered();

    let mut cands = vec![String::new()];

    for (i, unit) in units.iter().enumerate() {
        let next = units.get(i + 1);
        match unit.kind() {
            UnitKind::Gemination => {
                let heads = consonant_heads(lexicon, next);
                if heads.is_empty() {
                    debug!(position = i, "gemination without consonant follower");
                    continue;
                }
                cands = cross(&cands, heads.iter().map(String::as_str));
            }
            UnitKind::Lengthening => {
                for c in &mut cands {
                    c.push_str(LENGTH_MARK);
                }
            }
            UnitKind::Nasal => {
                let opts = if nasal_is_ambiguous(lexicon, next) {
                    NASAL_AMBIGUOUS
                } else {
                    NASAL_FREE
                };
                cands = cross(&cands, opts.iter().copied());
            }
            UnitKind::Ordinary => {
                let roms = lexicon.romanizations_of(unit.text());
                cands = cross(&cands, roms.iter().map(String::as_str));
            }
        }
    }

    debug!(candidate_count = cands.len());
    cands
}

/// `prefix × suffix` in order, dropping repeats.
fn cross<'a>(prefixes: &[String], suffixes: impl Iterator<Item = &'a str> + Clone) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    for p in prefixes {
        for s in suffixes.clone() {
            let joined = format!("{p}{s}");
            if seen.insert(joined.clone()) {
                out.push(joined);
            }
        }
    }
    out
}

/// Distinct consonant first letters of the next unit's spellings.
fn consonant_heads(lexicon: &Lexicon, next: Option<&PhoneticUnit>) -> Vec<String> {
    let Some(next) = next else {
        return Vec::new();
    };
    let mut heads: Vec<String> = Vec::new();
    for rom in lexicon.romanizations_of(next.text()).iter() {
        if let Some(h) = rom.chars().next().filter(|&h| is_consonant(h)) {
            let h = h.to_ascii_lowercase().to_string();
            if !heads.contains(&h) {
                heads.push(h);
            }
        }
    }
    heads
}

/// A following vowel, `y` or `n` onset could be read as part of a bare `n`.
fn nasal_is_ambiguous(lexicon: &Lexicon, next: Option<&PhoneticUnit>) -> bool {
    let Some(next) = next else {
        return false;
    };
    lexicon
        .romanizations_of(next.text())
        .iter()
        .filter_map(|rom| rom.chars().next())
        .map(|h| h.to_ascii_lowercase())
        .any(|h| is_vowel(h) || h == 'y' || h == 'n')
}
