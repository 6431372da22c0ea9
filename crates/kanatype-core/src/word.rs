//! Word records and catalog-level data checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::romaji::{candidates_for, tokenize, Lexicon, UnitKind};
use crate::unicode::is_typeable_spelling;

/// One playable word: the kana to type and the spelling shown as reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    #[serde(alias = "kana")]
    pub phonetic: String,
    #[serde(alias = "repRomaji", default)]
    pub reference_spelling: String,
}

impl Word {
    pub fn new(phonetic: impl Into<String>, reference_spelling: impl Into<String>) -> Self {
        Self {
            phonetic: phonetic.into(),
            reference_spelling: reference_spelling.into(),
        }
    }
}

/// Problems a catalog author should know about. Reported, never repaired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordIssue {
    EmptyPhonetic,
    EmptyReference,
    /// っ at unit `position` has no consonant-initial follower and is dropped
    /// from every spelling.
    DanglingGemination { position: usize },
    /// Unit missing from the lexicon whose literal spelling cannot be typed.
    UnknownUnit { unit: String },
    /// Reference spelling is not one of the accepted spellings.
    ReferenceNotAccepted { reference: String },
}

impl fmt::Display for WordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhonetic => write!(f, "empty phonetic text"),
            Self::EmptyReference => write!(f, "empty reference spelling"),
            Self::DanglingGemination { position } => {
                write!(f, "gemination at unit {position} has no consonant to double")
            }
            Self::UnknownUnit { unit } => write!(f, "untypeable unit {unit:?}"),
            Self::ReferenceNotAccepted { reference } => {
                write!(f, "reference spelling {reference:?} is not accepted")
            }
        }
    }
}

pub fn validate_word(lexicon: &Lexicon, word: &Word) -> Vec<WordIssue> {
    let mut issues = Vec::new();

    if word.phonetic.is_empty() {
        issues.push(WordIssue::EmptyPhonetic);
    }
    if word.reference_spelling.is_empty() {
        issues.push(WordIssue::EmptyReference);
    }
    if word.phonetic.is_empty() {
        return issues;
    }

    let units = tokenize(lexicon, &word.phonetic);
    for (i, unit) in units.iter().enumerate() {
        match unit.kind() {
            UnitKind::Gemination => {
                let has_consonant = units.get(i + 1).is_some_and(|next| {
                    lexicon
                        .romanizations_of(next.text())
                        .iter()
                        .any(|r| r.chars().next().is_some_and(crate::unicode::is_consonant))
                });
                if !has_consonant {
                    issues.push(WordIssue::DanglingGemination { position: i });
                }
            }
            UnitKind::Ordinary => {
                if !lexicon.contains(unit.text()) && !is_typeable_spelling(unit.text()) {
                    issues.push(WordIssue::UnknownUnit {
                        unit: unit.text().to_string(),
                    });
                }
            }
            UnitKind::Lengthening | UnitKind::Nasal => {}
        }
    }

    if !word.reference_spelling.is_empty() {
        let reference = word.reference_spelling.to_lowercase();
        if !candidates_for(lexicon, &word.phonetic).contains(&reference) {
            issues.push(WordIssue::ReferenceNotAccepted {
                reference: word.reference_spelling.clone(),
            });
        }
    }

    issues
}
