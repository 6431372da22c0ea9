//! Romaji typing engine for kana word drills.
//!
//! Re-exports the spelling model and matcher from `kanatype_core` and the
//! timed session from `kanatype_session`, and adds word-catalog loading and
//! trace setup for host applications.

pub mod catalog;
mod trace_init;

pub use kanatype_core::matcher::{RomajiMatcher, TypeOutcome};
pub use kanatype_core::romaji::{self, Lexicon};
pub use kanatype_core::settings;
pub use kanatype_core::word::{validate_word, Word, WordIssue};
pub use kanatype_session::{SessionConfig, SessionSnapshot, TypingSession};

pub use catalog::{default_catalog, load_catalog, parse_catalog, CatalogError};
pub use trace_init::{init_tracing, TraceGuard, TRACE_FILTER_ENV};

/// Session over the embedded sample catalog.
pub fn demo_session(base_seconds: f64) -> TypingSession {
    TypingSession::new(base_seconds, default_catalog())
}
