use std::fmt::Write as _;
use std::process;

use unicode_width::UnicodeWidthStr;

use kanatype::romaji::{generate_candidates, tokenize, UnitKind};
use kanatype::{validate_word, Lexicon, Word};

use super::read_words;

/// Show how a kana word is split and every spelling it accepts.
pub fn candidates(kana: &str, json: bool) {
    let lexicon = Lexicon::global();
    if json {
        let units = tokenize(lexicon, kana);
        let out = serde_json::json!({
            "phonetic": kana,
            "units": units.iter().map(|u| u.text()).collect::<Vec<_>>(),
            "candidates": generate_candidates(lexicon, &units),
        });
        println!("{out}");
    } else {
        print!("{}", format_candidates(lexicon, kana));
    }
}

pub fn format_candidates(lexicon: &Lexicon, kana: &str) -> String {
    let units = tokenize(lexicon, kana);
    let width = units.iter().map(|u| u.text().width()).max().unwrap_or(0);

    let mut out = String::new();
    for u in &units {
        let pad = " ".repeat(width - u.text().width());
        let spellings = match u.kind() {
            UnitKind::Gemination => "(doubles next consonant)".to_string(),
            UnitKind::Lengthening => "(length mark)".to_string(),
            UnitKind::Nasal => "(nasal)".to_string(),
            UnitKind::Ordinary => lexicon.romanizations_of(u.text()).join(" / "),
        };
        let _ = writeln!(out, "  {}{pad}  {spellings}", u.text());
    }
    let cands = generate_candidates(lexicon, &units);
    let _ = writeln!(out, "{} candidate(s):", cands.len());
    for c in &cands {
        let _ = writeln!(out, "  {c}");
    }
    out
}

/// Report data problems for every word of a catalog. Exits 1 when any are found.
pub fn check(file: Option<&str>) {
    let words = read_words(file);
    let (report, problems) = check_report(Lexicon::global(), &words);
    print!("{report}");
    if problems > 0 {
        process::exit(1);
    }
}

/// Returns the report text and the number of words with issues.
pub fn check_report(lexicon: &Lexicon, words: &[Word]) -> (String, usize) {
    let mut out = String::new();
    let mut problems = 0;
    for (i, w) in words.iter().enumerate() {
        let issues = validate_word(lexicon, w);
        if issues.is_empty() {
            continue;
        }
        problems += 1;
        for issue in issues {
            let _ = writeln!(out, "#{i} {}: {issue}", w.phonetic);
        }
    }
    let _ = writeln!(
        out,
        "{} word(s) checked, {} with issues",
        words.len(),
        problems
    );
    (out, problems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_candidates() {
        let out = format_candidates(Lexicon::global(), "しゃしん");
        assert!(out.contains("しゃ  sha / sya"));
        assert!(out.contains("(nasal)"));
        assert!(out.contains("8 candidate(s):"));
        assert!(out.contains("  shashinn\n"));
    }

    #[test]
    fn test_check_report_counts_problem_words() {
        let words = vec![
            Word::new("すし", "sushi"),
            Word::new("すし", "sashimi"),
            Word::new("あっ", "a"),
        ];
        let (report, problems) = check_report(Lexicon::global(), &words);
        assert_eq!(problems, 2);
        assert!(report.contains("#1 すし: reference spelling \"sashimi\" is not accepted"));
        assert!(report.contains("#2 あっ: gemination at unit 1"));
        assert!(report.ends_with("3 word(s) checked, 2 with issues\n"));
    }

    #[test]
    fn test_check_report_clean() {
        let (report, problems) = check_report(Lexicon::global(), &[Word::new("ねこ", "neko")]);
        assert_eq!(problems, 0);
        assert_eq!(report, "1 word(s) checked, 0 with issues\n");
    }
}
