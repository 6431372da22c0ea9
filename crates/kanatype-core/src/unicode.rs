//! Character classification for romaji keystrokes and spellings.

/// Keystrokes the engine accepts: printable ASCII, space through tilde.
pub fn is_printable_ascii(c: char) -> bool {
    ('\u{20}'..='\u{7E}').contains(&c)
}

pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Romaji consonant letters. `y` and `n` count as consonants here; callers
/// that need them excluded check for them separately.
pub fn is_consonant(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'b' | 'c'
            | 'd'
            | 'f'
            | 'g'
            | 'h'
            | 'j'
            | 'k'
            | 'l'
            | 'm'
            | 'n'
            | 'p'
            | 'q'
            | 'r'
            | 's'
            | 't'
            | 'v'
            | 'w'
            | 'x'
            | 'y'
            | 'z'
    )
}

/// A spelling is typeable when every character is a printable ASCII
/// character that survives lowercasing unchanged.
pub fn is_typeable_spelling(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| is_printable_ascii(c) && !c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_ascii_bounds() {
        assert!(is_printable_ascii(' '));
        assert!(is_printable_ascii('~'));
        assert!(is_printable_ascii('a'));
        assert!(!is_printable_ascii('\u{1F}'));
        assert!(!is_printable_ascii('\u{7F}'));
        assert!(!is_printable_ascii('\n'));
        assert!(!is_printable_ascii('あ'));
    }

    #[test]
    fn test_consonants_and_vowels() {
        for c in "aiueo".chars() {
            assert!(is_vowel(c));
            assert!(!is_consonant(c));
        }
        assert!(is_consonant('k'));
        assert!(is_consonant('Y'));
        assert!(is_consonant('n'));
        assert!(!is_consonant('-'));
        assert!(!is_consonant('\''));
        assert!(!is_consonant('っ'));
    }

    #[test]
    fn test_typeable_spelling() {
        assert!(is_typeable_spelling("shi"));
        assert!(is_typeable_spelling("n'"));
        assert!(!is_typeable_spelling(""));
        assert!(!is_typeable_spelling("Shi"));
        assert!(!is_typeable_spelling("し"));
    }}
