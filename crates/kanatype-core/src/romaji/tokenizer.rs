use super::lexicon::Lexicon;
use super::table::{GEMINATION, LENGTHENING, NASAL};

/// How the candidate generator treats a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// っ: doubles the next consonant.
    Gemination,
    /// ー: appends the length mark.
    Lengthening,
    /// ん: spelling depends on the next onset.
    Nasal,
    Ordinary,
}

/// One syllabic segment of a kana word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticUnit {
    text: String,
    kind: UnitKind,
}

impl PhoneticUnit {
    fn new(text: String) -> Self {
        let kind = match text.as_str() {
            GEMINATION => UnitKind::Gemination,
            LENGTHENING => UnitKind::Lengthening,
            NASAL => UnitKind::Nasal,
            _ => UnitKind::Ordinary,
        };
        Self { text, kind }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }
}

/// Split `phonetic` into units, preferring a known digraph at each position.
pub fn tokenize(lexicon: &Lexicon, phonetic: &str) -> Vec<PhoneticUnit> {
    let chars: Vec<char> = phonetic.chars().collect();
    let mut units = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if lexicon.is_digraph(&pair) {
                units.push(PhoneticUnit::new(pair));
                i += 2;
                continue;
            }
        }
        units.push(PhoneticUnit::new(chars[i].to_string()));
        i += 1;
    }

    units
}
