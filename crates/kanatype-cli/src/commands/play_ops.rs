use std::io::{self, BufRead, Write};
use std::time::Instant;

use kanatype::{SessionSnapshot, TypingSession};

use super::{die, read_words};

/// Line-mode game loop on stdin: each line is fed as keystrokes, with the
/// wall-clock time since the previous line charged to the session clock.
pub fn play(catalog: Option<&str>, base_seconds: f64) {
    let mut session = TypingSession::new(base_seconds, read_words(catalog));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut last = Instant::now();

    let mut snap = session.snapshot();
    while !snap.finished {
        println!("{}", format_progress(&snap));
        print!("> ");
        let _ = io::stdout().flush();

        let Some(line) = lines.next() else {
            break;
        };
        let line = die!(line, "Error reading stdin: {}");

        let now = Instant::now();
        snap = session.update(now.duration_since(last).as_secs_f64() * 1000.0);
        last = now;
        for ch in line.chars() {
            snap = session.type_char(&ch.to_string());
        }
    }

    println!("{}", format_summary(&session.snapshot()));
}

/// Feed `keys` one per frame of `frame_ms` and print each snapshot.
pub fn replay(catalog: Option<&str>, keys: &str, frame_ms: f64, base_seconds: f64, json: bool) {
    let mut session = TypingSession::new(base_seconds, read_words(catalog));
    let snaps = replay_snapshots(&mut session, keys, frame_ms);
    for snap in &snaps {
        if json {
            println!("{}", die!(serde_json::to_string(snap), "Error: {}"));
        } else {
            println!("{}", format_progress(snap));
        }
    }
    println!("{}", format_summary(&session.snapshot()));
}

pub fn replay_snapshots(
    session: &mut TypingSession,
    keys: &str,
    frame_ms: f64,
) -> Vec<SessionSnapshot> {
    keys.chars()
        .map(|ch| {
            session.update(frame_ms);
            session.type_char(&ch.to_string())
        })
        .collect()
}

pub fn format_progress(snap: &SessionSnapshot) -> String {
    format!(
        "[{:>5.1}s] {}  {}|{}  score {} streak {}",
        snap.time_left_ms / 1000.0,
        snap.phonetic,
        snap.typed_spelling,
        snap.remaining_spelling,
        snap.score,
        snap.streak
    )
}

pub fn format_summary(snap: &SessionSnapshot) -> String {
    format!(
        "score {}  words {}  typed {}  correct {}  mistakes {}  wpm {:.1}  accuracy {:.1}%",
        snap.score,
        snap.words_completed,
        snap.typed_count,
        snap.correct_count,
        snap.mistakes,
        snap.wpm,
        snap.accuracy * 100.0
    )
}

#[cfg(test)]
mod tests {
    use kanatype::Word;

    use super::*;

    fn sushi_session() -> TypingSession {
        TypingSession::new(90.0, vec![Word::new("すし", "sushi"), Word::new("ねこ", "neko")])
    }

    #[test]
    fn test_replay_snapshots_one_per_key() {
        let mut session = sushi_session();
        let snaps = replay_snapshots(&mut session, "sushine", 100.0);
        assert_eq!(snaps.len(), 7);
        let last = snaps.last().unwrap();
        assert_eq!(last.words_completed, 1);
        assert_eq!(last.cursor, 2);
        assert_eq!(last.elapsed_ms, 700.0);
    }

    #[test]
    fn test_format_progress_splits_at_cursor() {
        let mut session = sushi_session();
        let snap = replay_snapshots(&mut session, "su", 0.0).pop().unwrap();
        assert_eq!(
            format_progress(&snap),
            "[ 90.0s] すし  su|shi  score 20 streak 0"
        );
    }

    #[test]
    fn test_format_summary() {
        let mut session = sushi_session();
        session.update(60_000.0);
        replay_snapshots(&mut session, "sushix", 0.0);
        let out = format_summary(&session.snapshot());
        assert_eq!(
            out,
            "score 50  words 1  typed 6  correct 5  mistakes 1  wpm 1.0  accuracy 83.3%"
        );
    }
}
