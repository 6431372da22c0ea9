use tracing::{debug, debug_span};

use super::types::{normalize_key, SessionSnapshot};
use super::TypingSession;

impl TypingSession {
    /// Feed one keystroke. Keys arriving after time is up, empty input and
    /// characters outside printable ASCII leave the session untouched.
    pub fn type_char(&mut self, raw: &str) -> SessionSnapshot {
        if !self.clock.is_running() {
            return self.snapshot();
        }
        let Some(key) = normalize_key(raw) else {
            return self.snapshot();
        };
        let _span = debug_span!("type_char", key = %key).entered();

        self.tally.typed += 1;
        let outcome = self.matcher.type_char(&key.to_string());

        if outcome.accepted {
            if outcome.advanced {
                self.tally.correct += 1;
                self.tally.score += self.config.points_per_char;
            }
            if self.matcher.is_completed() {
                self.complete_word();
            }
        } else {
            self.tally.mistakes += 1;
            self.tally.streak = 0;
        }

        self.snapshot()
    }

    fn complete_word(&mut self) {
        self.tally.streak += 1;
        self.tally.words_completed += 1;
        if let Some(bonus) = self.config.bonus_seconds(self.tally.streak) {
            self.clock.time_left_ms += f64::from(bonus) * 1000.0;
            debug!(streak = self.tally.streak, bonus_seconds = bonus, "streak bonus");
        }
        self.advance_word();
    }
}
