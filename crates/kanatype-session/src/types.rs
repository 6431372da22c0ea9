use serde::Serialize;

use kanatype_core::settings::settings;
use kanatype_core::word::Word;

/// Lower bound for elapsed minutes in the WPM formula.
pub(super) const MIN_MINUTES: f64 = 1e-6;

/// Session parameters, taken from the global settings by default.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub base_seconds: f64,
    pub min_seconds: f64,
    pub points_per_char: u32,
    pub bonus_streak_interval: u32,
    pub max_bonus_seconds: u32,
    pub fallback_word: Word,
}

impl SessionConfig {
    pub fn from_settings() -> Self {
        let s = settings();
        Self {
            base_seconds: s.session.base_seconds,
            min_seconds: s.session.min_seconds,
            points_per_char: s.session.points_per_char,
            bonus_streak_interval: s.session.bonus_streak_interval,
            max_bonus_seconds: s.session.max_bonus_seconds,
            fallback_word: s.fallback_word.clone(),
        }
    }

    pub fn with_base_seconds(mut self, base_seconds: f64) -> Self {
        self.base_seconds = base_seconds;
        self
    }

    /// Time budget in ms; non-positive or NaN budgets fall back to the minimum.
    pub(super) fn budget_ms(&self) -> f64 {
        let min = if self.min_seconds > 0.0 {
            self.min_seconds
        } else {
            1.0
        };
        if self.base_seconds > 0.0 {
            self.base_seconds * 1000.0
        } else {
            min * 1000.0
        }
    }

    /// Bonus seconds granted when a word completes at `streak`, if any.
    pub(super) fn bonus_seconds(&self, streak: u32) -> Option<u32> {
        if streak == 0 || self.bonus_streak_interval == 0 {
            return None;
        }
        if streak % self.bonus_streak_interval != 0 {
            return None;
        }
        Some((streak / self.bonus_streak_interval).min(self.max_bonus_seconds))
    }
}

/// Immutable view of the session after a call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub time_left_ms: f64,
    pub elapsed_ms: f64,
    pub score: u32,
    pub streak: u32,
    pub finished: bool,

    pub phonetic: String,
    pub reference_spelling: String,
    /// Spelling the matcher currently follows.
    pub active_spelling: String,
    /// `active_spelling` split at the cursor.
    pub typed_spelling: String,
    pub remaining_spelling: String,
    pub cursor: usize,

    pub typed_count: u32,
    pub correct_count: u32,
    pub mistakes: u32,
    pub words_completed: u32,
    pub wpm: f64,
    pub accuracy: f64,
}

// --- Sub-structures for grouping related state ---

pub(super) struct Clock {
    pub(super) time_left_ms: f64,
    pub(super) elapsed_ms: f64,
    pub(super) finished: bool,
}

impl Clock {
    pub(super) fn new(budget_ms: f64) -> Self {
        Self {
            time_left_ms: budget_ms,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    pub(super) fn is_running(&self) -> bool {
        !self.finished && self.time_left_ms > 0.0
    }
}

#[derive(Default)]
pub(super) struct Tally {
    pub(super) score: u32,
    pub(super) streak: u32,
    pub(super) typed: u32,
    pub(super) correct: u32,
    pub(super) mistakes: u32,
    pub(super) words_completed: u32,
}

impl Tally {
    pub(super) fn wpm(&self, elapsed_ms: f64) -> f64 {
        let minutes = (elapsed_ms / 60_000.0).max(MIN_MINUTES);
        (self.correct as f64 / 5.0) / minutes
    }

    pub(super) fn accuracy(&self) -> f64 {
        if self.typed > 0 {
            self.correct as f64 / self.typed as f64
        } else {
            1.0
        }
    }
}

/// First character of `raw`, lowercased, if it is a keystroke the session counts.
pub(super) fn normalize_key(raw: &str) -> Option<char> {
    let c = raw.chars().next()?.to_lowercase().next()?;
    kanatype_core::unicode::is_printable_ascii(c).then_some(c)
}

pub(super) fn cyclic_next(current: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current + 1) % count
}
