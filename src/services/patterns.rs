//! Capture classification patterns.
//!
//! Static, ordered pattern data for the capture classifier. Order is part of
//! the contract: the first matching entry wins, so these are plain vectors
//! rather than maps.
// Allow expect() on static regex patterns - these are guaranteed to compile
#![allow(clippy::expect_used)]

use regex::Regex;
use std::sync::LazyLock;

use crate::models::CaptureType;

/// A classification pattern tied to the capture type it signals.
#[derive(Debug)]
pub struct CapturePattern {
    /// The type this pattern indicates.
    pub capture_type: CaptureType,
    /// The case-insensitive regex.
    pub pattern: Regex,
}

impl CapturePattern {
    fn new(capture_type: CaptureType, pattern: &str) -> Self {
        Self {
            capture_type,
            pattern: Regex::new(&format!("(?i){pattern}"))
                .expect("static regex: capture pattern"),
        }
    }
}

/// A relative due-date keyword and its offset from today, in days.
#[derive(Debug)]
pub struct DueDatePattern {
    /// The case-insensitive keyword regex.
    pub pattern: Regex,
    /// Days to add to the evaluation date.
    pub offset_days: u64,
}

/// Explicit-intent prefixes, in precedence order.
///
/// Types are tried idea, todo, note, reminder, bookmark, quote, brain dump.
/// Within a type, longer phrasings come before the bare words they contain.
// Deliberately not the historical order: `note to self`/`save link` precede their
// short forms, bare words are `\b`-bounded, and there is no bare `"` prefix.
pub static PREFIX_PATTERNS: LazyLock<Vec<CapturePattern>> = LazyLock::new(|| {
    use CaptureType::{Bookmark, BrainDump, Idea, Note, Quote, Reminder, Todo};

    vec![
        CapturePattern::new(Idea, r"idea\s*:"),
        CapturePattern::new(Idea, r"thought\s*:"),
        CapturePattern::new(Idea, r"brainstorm\s*:"),
        CapturePattern::new(Idea, r"\bideas?\b"),
        CapturePattern::new(Todo, r"todo\s*:"),
        CapturePattern::new(Todo, r"task\s*:"),
        CapturePattern::new(Todo, r"to[- ]?do\s*:"),
        CapturePattern::new(Note, r"note\s+to\s+self\s*:"),
        CapturePattern::new(Note, r"note\s*:"),
        CapturePattern::new(Note, r"capture\s*this\s*:"),
        CapturePattern::new(Note, r"remember\s+that\s*:"),
        CapturePattern::new(Note, r"\bnotes?\b"),
        CapturePattern::new(Reminder, r"remind\s+me\s+to\s+"),
        CapturePattern::new(Reminder, r"reminder\s*:"),
        CapturePattern::new(Reminder, r"don't\s+let\s+me\s+forget\s*"),
        CapturePattern::new(Bookmark, r"bookmark\s*:"),
        CapturePattern::new(Bookmark, r"save\s+link\s*:"),
        CapturePattern::new(Bookmark, r"link\s*:"),
        CapturePattern::new(Quote, r"quote\s*:"),
        CapturePattern::new(Quote, r"quotation\s*:"),
        CapturePattern::new(BrainDump, r"brain\s*dump\s*:"),
        CapturePattern::new(BrainDump, r"braindump\s*:"),
        CapturePattern::new(BrainDump, r"let\s+me\s+just\s+get\s+this\s+out"),
    ]
});

/// Natural phrasings used when no prefix matched. Order: todo, idea, note.
pub static PHRASE_PATTERNS: LazyLock<Vec<CapturePattern>> = LazyLock::new(|| {
    use CaptureType::{Idea, Note, Todo};

    vec![
        CapturePattern::new(Todo, r"\bi\s+need\s+to\s+"),
        CapturePattern::new(Todo, r"\bneed\s+to\s+"),
        CapturePattern::new(Todo, r"\badd\s+to\s+my\s+list"),
        CapturePattern::new(Idea, r"\bwhat\s+if\s+"),
        CapturePattern::new(Idea, r"\bi\s+just\s+realized"),
        CapturePattern::new(Note, r"\bfor\s+the\s+record"),
    ]
});

/// HTTP(S) URLs, for the bookmark heuristic.
pub static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("static regex: url"));

/// `[Project: name]` tags. Group 1 is the untrimmed name.
pub static PROJECT_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[Project:\s*([^\]]+)\]").expect("static regex: project tag")
});

/// Relative due-date keywords, checked in order.
pub static DUE_DATE_PATTERNS: LazyLock<Vec<DueDatePattern>> = LazyLock::new(|| {
    [
        (r"(?i)\btomorrow\b", 1),
        (r"(?i)\btoday\b", 0),
        (r"(?i)\bnext\s+week\b", 7),
    ]
    .into_iter()
    .map(|(pattern, offset_days)| DueDatePattern {
        pattern: Regex::new(pattern).expect("static regex: due date"),
        offset_days,
    })
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_types_follow_precedence_order() {
        let order = [
            CaptureType::Idea,
            CaptureType::Todo,
            CaptureType::Note,
            CaptureType::Reminder,
            CaptureType::Bookmark,
            CaptureType::Quote,
            CaptureType::BrainDump,
        ];
        let mut seen: Vec<CaptureType> = Vec::new();
        for entry in PREFIX_PATTERNS.iter() {
            if seen.last() != Some(&entry.capture_type) {
                seen.push(entry.capture_type);
            }
        }
        assert_eq!(seen, order);
    }

    #[test]
    fn test_phrase_types_follow_precedence_order() {
        let mut seen: Vec<CaptureType> = Vec::new();
        for entry in PHRASE_PATTERNS.iter() {
            if seen.last() != Some(&entry.capture_type) {
                seen.push(entry.capture_type);
            }
        }
        assert_eq!(
            seen,
            [CaptureType::Todo, CaptureType::Idea, CaptureType::Note]
        );
    }

    #[test]
    fn test_task_and_unknown_have_no_prefixes() {
        assert!(
            PREFIX_PATTERNS
                .iter()
                .all(|p| !matches!(p.capture_type, CaptureType::Task | CaptureType::Unknown))
        );
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let idea = &PREFIX_PATTERNS[0];
        assert!(idea.pattern.is_match("IDEA: shout"));
    }

    #[test]
    fn test_bare_words_respect_word_boundaries() {
        let bare_idea = PREFIX_PATTERNS
            .iter()
            .find(|p| p.pattern.as_str().contains(r"\bideas?\b"))
            .unwrap();
        assert!(bare_idea.pattern.is_match("an idea"));
        assert!(!bare_idea.pattern.is_match("the ideal setup"));
    }

    #[test]
    fn test_url_pattern_stops_at_whitespace() {
        let found = URL_PATTERN
            .find("see https://example.com/a?b=c now")
            .unwrap();
        assert_eq!(found.as_str(), "https://example.com/a?b=c");
    }

    #[test]
    fn test_due_date_keywords() {
        let offsets: Vec<u64> = DUE_DATE_PATTERNS.iter().map(|p| p.offset_days).collect();
        assert_eq!(offsets, [1, 0, 7]);
        assert!(DUE_DATE_PATTERNS[2].pattern.is_match("Next   Week"));
        assert!(!DUE_DATE_PATTERNS[1].pattern.is_match("todays"));
    }
}
