//! Incremental keystroke matching against every spelling of one word.
//!
//! A [`RomajiMatcher`] keeps the spellings still consistent with the accepted
//! input and narrows them one character at a time. All remaining candidates
//! agree on their first `cursor` characters.

use crate::romaji::{candidates_for, Lexicon};
use crate::unicode::is_consonant;

/// Result of one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeOutcome {
    pub accepted: bool,
    pub advanced: bool,
}

impl TypeOutcome {
    /// Matched the next expected letter.
    pub const ADVANCED: Self = Self {
        accepted: true,
        advanced: true,
    };
    /// Extra `n` swallowed without moving the cursor.
    pub const ABSORBED: Self = Self {
        accepted: true,
        advanced: false,
    };
    pub const REJECTED: Self = Self {
        accepted: false,
        advanced: false,
    };
}

#[derive(Debug, Clone)]
pub struct RomajiMatcher {
    candidates: Vec<String>,
    cursor: usize,
}

impl RomajiMatcher {
    /// Matcher for `phonetic` using the global lexicon.
    pub fn new(phonetic: &str) -> Self {
        Self::with_lexicon(Lexicon::global(), phonetic)
    }

    pub fn with_lexicon(lexicon: &Lexicon, phonetic: &str) -> Self {
        Self::from_candidates(candidates_for(lexicon, phonetic))
    }

    pub fn from_candidates(candidates: Vec<String>) -> Self {
        Self {
            candidates,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Preferred spelling among the remaining candidates.
    pub fn top(&self) -> &str {
        self.candidates.first().map(String::as_str).unwrap_or("")
    }

    /// Accepted part of [`top`](Self::top).
    pub fn typed(&self) -> &str {
        let top = self.top();
        &top[..byte_offset(top, self.cursor)]
    }

    /// Part of [`top`](Self::top) still to be typed.
    pub fn remaining(&self) -> &str {
        let top = self.top();
        &top[byte_offset(top, self.cursor)..]
    }

    pub fn is_completed(&self) -> bool {
        self.candidates
            .iter()
            .any(|c| c.chars().count() == self.cursor)
    }

    /// Feed one keystroke. Only the first character of `raw` is used.
    pub fn type_char(&mut self, raw: &str) -> TypeOutcome {
        let Some(ch) = raw.chars().next().and_then(|c| c.to_lowercase().next()) else {
            return TypeOutcome::REJECTED;
        };
        let idx = self.cursor;

        let next: Vec<String> = self
            .candidates
            .iter()
            .filter(|c| char_at(c, idx) == Some(ch))
            .cloned()
            .collect();
        if !next.is_empty() {
            self.candidates = next;
            self.cursor += 1;
            return TypeOutcome::ADVANCED;
        }

        if ch == 'n' && idx > 0 && self.absorbs_extra_n() {
            self.candidates.retain(|c| char_at(c, idx) != Some('n'));
            return TypeOutcome::ABSORBED;
        }

        TypeOutcome::REJECTED
    }

    /// The previous letter was part of a nasal and the next expected letter
    /// is a consonant that cannot merge with it.
    fn absorbs_extra_n(&self) -> bool {
        let idx = self.cursor;
        let prev_was_n = self
            .candidates
            .iter()
            .any(|c| char_at(c, idx - 1) == Some('n'));
        if !prev_was_n {
            return false;
        }
        self.candidates.iter().any(|c| {
            char_at(c, idx).is_some_and(|e| is_consonant(e) && e != 'y' && e != 'n')
        })
    }
}

fn char_at(s: &str, idx: usize) -> Option<char> {
    s.chars().nth(idx)
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_all(m: &mut RomajiMatcher, keys: &str) -> Vec<TypeOutcome> {
        keys.chars().map(|c| m.type_char(&c.to_string())).collect()
    }

    #[test]
    fn test_shi_narrowing() {
        let mut m = RomajiMatcher::new("し");
        assert_eq!(m.type_char("s"), TypeOutcome::ADVANCED);
        assert_eq!(m.candidates(), ["shi", "si"]);
        assert_eq!(m.cursor(), 1);

        assert_eq!(m.type_char("h"), TypeOutcome::ADVANCED);
        assert_eq!(m.candidates(), ["shi"]);
        assert_eq!(m.cursor(), 2);
        assert!(!m.is_completed());

        assert_eq!(m.type_char("i"), TypeOutcome::ADVANCED);
        assert_eq!(m.cursor(), 3);
        assert!(m.is_completed());
    }

    #[test]
    fn test_alternate_spelling_switches_top() {
        let mut m = RomajiMatcher::new("し");
        assert_eq!(m.top(), "shi");
        type_all(&mut m, "si");
        assert_eq!(m.top(), "si");
        assert!(m.is_completed());
    }

    #[test]
    fn test_every_lexicon_spelling_completes() {
        let lex = Lexicon::global();
        for (unit, spellings) in lex.iter() {
            for spelling in spellings {
                let mut m = RomajiMatcher::with_lexicon(lex, unit);
                for (i, c) in spelling.chars().enumerate() {
                    assert!(
                        !m.is_completed(),
                        "{unit}/{spelling} completed early at {i}"
                    );
                    let out = m.type_char(&c.to_string());
                    assert!(out.accepted, "{unit}/{spelling} rejected {c:?} at {i}");
                }
                assert!(m.is_completed(), "{unit}/{spelling} not completed");
                assert_eq!(m.cursor(), spelling.chars().count());
            }
        }
    }

    #[test]
    fn test_uppercase_is_normalized() {
        let mut m = RomajiMatcher::new("か");
        assert_eq!(m.type_char("K"), TypeOutcome::ADVANCED);
        assert_eq!(m.type_char("A"), TypeOutcome::ADVANCED);
        assert!(m.is_completed());
    }

    #[test]
    fn test_only_first_char_used() {
        let mut m = RomajiMatcher::new("か");
        assert_eq!(m.type_char("kz"), TypeOutcome::ADVANCED);
        assert_eq!(m.cursor(), 1);
    }

    #[test]
    fn test_empty_input_rejected_without_change() {
        let mut m = RomajiMatcher::new("し");
        m.type_char("s");
        let before = m.clone();
        assert_eq!(m.type_char(""), TypeOutcome::REJECTED);
        assert_eq!(m.candidates(), before.candidates());
        assert_eq!(m.cursor(), before.cursor());
    }

    #[test]
    fn test_mistake_leaves_state() {
        let mut m = RomajiMatcher::new("すし");
        m.type_char("s");
        assert_eq!(m.type_char("x"), TypeOutcome::REJECTED);
        assert_eq!(m.cursor(), 1);
        assert_eq!(m.candidates(), ["sushi", "susi"]);
    }

    #[test]
    fn test_gemination_word() {
        let mut m = RomajiMatcher::new("った");
        assert_eq!(m.candidates(), ["tta"]);
        assert!(type_all(&mut m, "tta").iter().all(|o| *o == TypeOutcome::ADVANCED));
        assert!(m.is_completed());
    }

    #[test]
    fn test_ambiguous_nasal_rejects_bare_n() {
        let mut m = RomajiMatcher::new("きんえん");
        type_all(&mut m, "kin");
        assert_eq!(m.type_char("e"), TypeOutcome::REJECTED);
        assert_eq!(m.type_char("'"), TypeOutcome::ADVANCED);
        type_all(&mut m, "en");
        assert!(m.is_completed());
    }

    #[test]
    fn test_extra_n_absorbed_before_consonant() {
        let mut m = RomajiMatcher::new("さんぽ");
        type_all(&mut m, "sann");
        assert_eq!(m.candidates(), ["sannpo"]);
        assert_eq!(m.cursor(), 4);

        assert_eq!(m.type_char("n"), TypeOutcome::ABSORBED);
        assert_eq!(m.cursor(), 4);
        assert_eq!(m.candidates(), ["sannpo"]);

        type_all(&mut m, "po");
        assert!(m.is_completed());
    }

    #[test]
    fn test_extra_n_not_absorbed_before_vowel() {
        let mut m = RomajiMatcher::new("かな");
        type_all(&mut m, "kan");
        assert_eq!(m.type_char("n"), TypeOutcome::REJECTED);
    }

    #[test]
    fn test_extra_n_not_absorbed_at_start() {
        let mut m = RomajiMatcher::new("ぽ");
        assert_eq!(m.type_char("n"), TypeOutcome::REJECTED);
    }

    #[test]
    fn test_final_nasal_completes_on_single_n() {
        let mut m = RomajiMatcher::new("ほん");
        type_all(&mut m, "hon");
        assert!(m.is_completed());
        assert_eq!(m.candidates(), ["honn", "hon"]);
    }

    #[test]
    fn test_typed_and_remaining() {
        let mut m = RomajiMatcher::new("すし");
        type_all(&mut m, "sus");
        assert_eq!(m.typed(), "sus");
        assert_eq!(m.remaining(), "hi");
    }

    #[test]
    fn test_top_of_empty_set() {
        let m = RomajiMatcher::from_candidates(Vec::new());
        assert_eq!(m.top(), "");
        assert_eq!(m.remaining(), "");
        assert!(!m.is_completed());
    }
}
