
use kanatype_core::word::Word;

use super::SessionSnapshot;
use super::TypingSession;

pub(super) fn make_words(list: &[(&str, &str)]) -> Vec<Word> {
    list.iter().map(|(kana, romaji)| Word::new(*kana, *romaji)).collect()
}

pub(super) fn make_session(list: &[(&str, &str)]) -> TypingSession {
    TypingSession::new(90.0, make_words(list))
}

// Helper: simulate typing a string one character at a time
pub(super) fn type_string(session: &mut TypingSession, s: &str) -> Vec<SessionSnapshot> {
    s.chars()
        .map(|ch| session.type_char(&ch.to_string()))
        .collect()
}
