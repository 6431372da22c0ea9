//! Timed typing session over a cyclic word list.
//!
//! `TypingSession` owns the word list, one live [`RomajiMatcher`] for the
//! current word, the countdown clock and the score/streak counters. The owner
//! calls [`TypingSession::update`] once per frame and then
//! [`TypingSession::type_char`] for each buffered key in arrival order; every
//! call returns a fresh [`SessionSnapshot`]. Callers that want notifications
//! (word completed, bonus time, mistake) diff consecutive snapshots.

mod key_handlers;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use tracing::{debug, warn};

use kanatype_core::matcher::RomajiMatcher;
use kanatype_core::romaji::{candidates_for, Lexicon};
use kanatype_core::unicode::is_typeable_spelling;
use kanatype_core::word::Word;

pub use types::{SessionConfig, SessionSnapshot};

use types::{cyclic_next, Clock, Tally};

pub struct TypingSession {
    lexicon: &'static Lexicon,
    config: SessionConfig,
    words: Vec<Word>,
    word_index: usize,
    matcher: RomajiMatcher,
    clock: Clock,
    tally: Tally,
}

impl TypingSession {
    /// Session with the default settings and a `base_seconds` time budget.
    pub fn new(base_seconds: f64, words: Vec<Word>) -> Self {
        Self::with_config(SessionConfig::from_settings().with_base_seconds(base_seconds), words)
    }

    pub fn with_config(config: SessionConfig, words: Vec<Word>) -> Self {
        Self::with_lexicon(Lexicon::global(), config, words)
    }

    pub fn with_lexicon(
        lexicon: &'static Lexicon,
        config: SessionConfig,
        words: Vec<Word>,
    ) -> Self {
        let words = usable_words(lexicon, words, &config.fallback_word);
        let matcher = RomajiMatcher::with_lexicon(lexicon, &words[0].phonetic);
        let clock = Clock::new(config.budget_ms());
        debug!(
            word_count = words.len(),
            budget_ms = clock.time_left_ms,
            "session start"
        );
        Self {
            lexicon,
            config,
            words,
            word_index: 0,
            matcher,
            clock,
            tally: Tally::default(),
        }
    }

    /// Advance the clock by `elapsed_ms`. Negative and NaN deltas count as zero.
    pub fn update(&mut self, elapsed_ms: f64) -> SessionSnapshot {
        if !self.clock.finished {
            let dt = if elapsed_ms > 0.0 { elapsed_ms } else { 0.0 };
            self.clock.elapsed_ms += dt;
            self.clock.time_left_ms = (self.clock.time_left_ms - dt).max(0.0);
            if self.clock.time_left_ms == 0.0 {
                self.clock.finished = true;
                debug!(score = self.tally.score, "session finished");
            }
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let word = self.current_word();
        SessionSnapshot {
            time_left_ms: self.clock.time_left_ms,
            elapsed_ms: self.clock.elapsed_ms,
            score: self.tally.score,
            streak: self.tally.streak,
            finished: self.clock.finished,
            phonetic: word.phonetic.clone(),
            reference_spelling: word.reference_spelling.clone(),
            active_spelling: self.matcher.top().to_string(),
            typed_spelling: self.matcher.typed().to_string(),
            remaining_spelling: self.matcher.remaining().to_string(),
            cursor: self.matcher.cursor(),
            typed_count: self.tally.typed,
            correct_count: self.tally.correct,
            mistakes: self.tally.mistakes,
            words_completed: self.tally.words_completed,
            wpm: self.tally.wpm(self.clock.elapsed_ms),
            accuracy: self.tally.accuracy(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.clock.finished
    }

    pub fn current_word(&self) -> &Word {
        &self.words[self.word_index]
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Accepted spellings still open for the current word.
    pub fn candidates(&self) -> &[String] {
        self.matcher.candidates()
    }

    fn advance_word(&mut self) {
        self.word_index = cyclic_next(self.word_index, self.words.len());
        let word = &self.words[self.word_index];
        self.matcher = RomajiMatcher::with_lexicon(self.lexicon, &word.phonetic);
        debug!(
            index = self.word_index,
            phonetic = %word.phonetic,
            "next word"
        );
    }
}

/// Drop entries that no keystroke sequence can complete: empty phonetic text,
/// or no candidate made of typeable characters (a lone `っ`, kanji). Falls
/// back to a single default word when nothing is left.
fn usable_words(lexicon: &Lexicon, words: Vec<Word>, fallback: &Word) -> Vec<Word> {
    let words: Vec<Word> = words
        .into_iter()
        .filter(|w| {
            let typeable = !w.phonetic.is_empty()
                && candidates_for(lexicon, &w.phonetic)
                    .iter()
                    .any(|c| is_typeable_spelling(c));
            if !typeable {
                warn!(phonetic = %w.phonetic, "dropped untypeable word");
            }
            typeable
        })
        .collect();
    if words.is_empty() {
        warn!(phonetic = %fallback.phonetic, "empty word list, using fallback word");
        return vec![fallback.clone()];
    }
    words
}
