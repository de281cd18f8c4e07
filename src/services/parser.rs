//! Natural-language capture classifier.
//!
//! Turns a raw message into a [`Capture`] by walking a fixed precedence
//! cascade:
//!
//! 1. Prefix patterns (`idea:`, `remind me to`, ...)
//! 2. Phrase patterns (`i need to`, `what if`, ...)
//! 3. URL heuristic (bookmark)
//! 4. Quote heuristic (leading quote mark)
//! 5. Default (note)
//!
//! Project tags and relative due dates are then extracted from the
//! resulting content, whichever rule fired. Classification never fails.

use chrono::{Days, Local, NaiveDate};
use tracing::debug;

use super::patterns::{
    DUE_DATE_PATTERNS, PHRASE_PATTERNS, PREFIX_PATTERNS, PROJECT_TAG_PATTERN, URL_PATTERN,
};
use crate::models::{Capture, CaptureType};

const QUOTE_MARKS: [char; 2] = ['"', '\''];

/// Classifier for natural-language captures.
///
/// Stateless: the pattern tables are process-wide statics, so parsing the
/// same message on the same date always yields the same capture.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureParser;

impl CaptureParser {
    /// Creates a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parses a message, resolving due dates against today's local date.
    #[must_use]
    pub fn parse(&self, message: &str, source: &str) -> Capture {
        self.parse_at(message, source, Local::now().date_naive())
    }

    /// Parses a message, resolving due dates against `today`.
    #[must_use]
    pub fn parse_at(&self, message: &str, source: &str, today: NaiveDate) -> Capture {
        let mut capture = self.classify(message, source);
        capture.project = extract_project_tag(&capture.content);
        capture.due_date = extract_due_date(&capture.content, today);
        capture
    }

    /// Determines type, content and prefix without metadata extraction.
    #[must_use]
    pub fn classify(&self, message: &str, source: &str) -> Capture {
        let message = message.trim();

        for entry in PREFIX_PATTERNS.iter() {
            if let Some(matched) = entry.pattern.find(message) {
                let after = message[matched.end()..].trim();
                let content = if after.is_empty() {
                    // Nothing follows the prefix: skip the prefix length from the start.
                    message.get(matched.len()..).unwrap_or("").trim()
                } else {
                    after
                };
                debug!(
                    capture_type = %entry.capture_type,
                    prefix = matched.as_str(),
                    "matched prefix pattern"
                );
                return Capture::new(entry.capture_type, content)
                    .with_prefix(matched.as_str())
                    .with_source(source);
            }
        }

        for entry in PHRASE_PATTERNS.iter() {
            if let Some(matched) = entry.pattern.find(message) {
                debug!(capture_type = %entry.capture_type, "matched phrase pattern");
                return Capture::new(entry.capture_type, message[matched.start()..].trim())
                    .with_source(source);
            }
        }

        if URL_PATTERN.is_match(message) {
            debug!("matched url heuristic");
            return Capture::new(CaptureType::Bookmark, message).with_source(source);
        }

        if message.starts_with(QUOTE_MARKS) {
            debug!("matched quote heuristic");
            return Capture::new(CaptureType::Quote, strip_quote_marks(message))
                .with_source(source);
        }

        debug!("no pattern matched, defaulting to note");
        Capture::new(CaptureType::Note, message).with_source(source)
    }
}

/// Removes one leading and one trailing quote mark, if present.
fn strip_quote_marks(text: &str) -> &str {
    let text = text.strip_prefix(QUOTE_MARKS).unwrap_or(text);
    text.strip_suffix(QUOTE_MARKS).unwrap_or(text)
}

/// Extracts the project name from the first `[Project: name]` tag.
#[must_use]
pub fn extract_project_tag(content: &str) -> Option<String> {
    PROJECT_TAG_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|name| name.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Resolves the first relative due-date keyword in `content` against `today`.
#[must_use]
pub fn extract_due_date(content: &str, today: NaiveDate) -> Option<NaiveDate> {
    DUE_DATE_PATTERNS
        .iter()
        .find(|entry| entry.pattern.is_match(content))
        .and_then(|entry| today.checked_add_days(Days::new(entry.offset_days)))
}

/// Parses a capture with a default parser and today's date.
#[must_use]
pub fn parse_capture(message: &str, source: &str) -> Capture {
    CaptureParser::new().parse(message, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn parse(message: &str) -> Capture {
        CaptureParser::new().parse_at(message, "test", today())
    }

    #[test]
    fn test_idea_prefix_is_stripped() {
        let capture = parse("idea: what if we added dark mode");
        assert_eq!(capture.capture_type, CaptureType::Idea);
        assert_eq!(capture.content, "what if we added dark mode");
        assert_eq!(capture.prefix, "idea:");
        assert_eq!(capture.source, "test");
    }

    #[test]
    fn test_prefix_preserves_original_case() {
        let capture = parse("TODO:   ship the release");
        assert_eq!(capture.capture_type, CaptureType::Todo);
        assert_eq!(capture.prefix, "TODO:");
        assert_eq!(capture.content, "ship the release");
    }

    #[test]
    fn test_prefix_found_mid_message() {
        let capture = parse("quick reminder: renew the domain");
        assert_eq!(capture.capture_type, CaptureType::Reminder);
        assert_eq!(capture.content, "renew the domain");
    }

    #[test]
    fn test_reminder_keeps_context_and_due_date() {
        let capture = parse("remind me to call John tomorrow");
        assert_eq!(capture.capture_type, CaptureType::Reminder);
        assert_eq!(capture.content, "call John tomorrow");
        assert_eq!(capture.due_date, NaiveDate::from_ymd_opt(2026, 10, 17));
    }

    #[test]
    fn test_type_order_beats_position() {
        // Idea patterns are tried before todo patterns.
        let capture = parse("todo: write up the ideas doc");
        assert_eq!(capture.capture_type, CaptureType::Idea);
        assert_eq!(capture.prefix, "ideas");
    }

    #[test]
    fn test_note_to_self_beats_bare_note() {
        let capture = parse("note to self: check the server logs");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert_eq!(capture.prefix, "note to self:");
        assert_eq!(capture.content, "check the server logs");
    }

    #[test]
    fn test_phrase_keeps_phrase_in_content() {
        let capture = parse("ok so i need to finish the quarterly report");
        assert_eq!(capture.capture_type, CaptureType::Todo);
        assert_eq!(capture.content, "i need to finish the quarterly report");
        assert!(capture.prefix.is_empty());
    }

    #[test]
    fn test_phrase_order_todo_before_idea() {
        let capture = parse("what if I need to move the meeting");
        assert_eq!(capture.capture_type, CaptureType::Todo);
    }

    #[test]
    fn test_url_becomes_bookmark() {
        let capture = parse("check out https://example.com/article");
        assert_eq!(capture.capture_type, CaptureType::Bookmark);
        assert_eq!(capture.content, "check out https://example.com/article");
        assert!(capture.prefix.is_empty());
    }

    #[test]
    fn test_phrase_beats_url() {
        let capture = parse("need to read https://example.com/article");
        assert_eq!(capture.capture_type, CaptureType::Todo);
    }

    #[test]
    fn test_quote_marks_stripped_once() {
        let capture = parse("\"simplicity is the ultimate sophistication\"");
        assert_eq!(capture.capture_type, CaptureType::Quote);
        assert_eq!(capture.content, "simplicity is the ultimate sophistication");

        let capture = parse("'\"nested\"'");
        assert_eq!(capture.content, "\"nested\"");
    }

    #[test]
    fn test_quote_with_attribution_keeps_tail() {
        let capture = parse("\"Stay hungry\" - Steve Jobs");
        assert_eq!(capture.capture_type, CaptureType::Quote);
        assert_eq!(capture.content, "Stay hungry\" - Steve Jobs");
    }

    #[test]
    fn test_prefix_short_circuits_quote_heuristic() {
        let capture = parse("\"quote: be kind\"");
        assert_eq!(capture.capture_type, CaptureType::Quote);
        assert_eq!(capture.prefix, "quote:");
        assert_eq!(capture.content, "be kind\"");
    }

    #[test]
    fn test_default_is_trimmed_note() {
        let capture = parse("   the client prefers blue   ");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert_eq!(capture.content, "the client prefers blue");
        assert!(capture.prefix.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_empty_note() {
        let capture = parse(" \t\n ");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert!(capture.content.is_empty());
        assert!(capture.project.is_none());
        assert!(capture.due_date.is_none());
    }

    #[test]
    fn test_prefix_only_message_has_empty_content() {
        let capture = parse("idea:");
        assert_eq!(capture.capture_type, CaptureType::Idea);
        assert_eq!(capture.prefix, "idea:");
        assert!(capture.content.is_empty());
    }

    #[test]
    fn test_trailing_prefix_skips_prefix_length_from_start() {
        let capture = parse("read my notes");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert_eq!(capture.prefix, "notes");
        assert_eq!(capture.content, "my notes");
    }

    #[test]
    fn test_trailing_prefix_off_char_boundary_is_empty() {
        // Skipping 5 bytes lands inside the third "é".
        let capture = parse("ééé notes");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert_eq!(capture.prefix, "notes");
        assert!(capture.content.is_empty());
    }

    #[test]
    fn test_project_tag_extracted_from_content() {
        let capture = parse("todo: [Project: Edison] prepare presentation");
        assert_eq!(capture.capture_type, CaptureType::Todo);
        assert_eq!(capture.project.as_deref(), Some("Edison"));
        assert_eq!(capture.content, "[Project: Edison] prepare presentation");
    }

    #[test]
    fn test_project_tag_case_insensitive_and_trimmed() {
        assert_eq!(
            extract_project_tag("[project:   Atlas  ] ship the report").as_deref(),
            Some("Atlas")
        );
        assert_eq!(extract_project_tag("[Project: ] nothing"), None);
        assert_eq!(extract_project_tag("no tag here"), None);
    }

    #[test]
    fn test_due_date_keyword_order() {
        // "tomorrow" is checked before "today" regardless of position.
        assert_eq!(
            extract_due_date("today or tomorrow", today()),
            NaiveDate::from_ymd_opt(2026, 10, 17)
        );
        assert_eq!(extract_due_date("submit TODAY", today()), Some(today()));
        assert_eq!(
            extract_due_date("review next week", today()),
            NaiveDate::from_ymd_opt(2026, 10, 23)
        );
        assert_eq!(extract_due_date("someday", today()), None);
    }

    #[test]
    fn test_due_date_crosses_month_boundary() {
        let end_of_month = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        assert_eq!(
            extract_due_date("tomorrow", end_of_month),
            NaiveDate::from_ymd_opt(2026, 2, 1)
        );
    }

    #[test]
    fn test_due_date_extracted_for_any_type() {
        let capture = parse("\"see you tomorrow\"");
        assert_eq!(capture.capture_type, CaptureType::Quote);
        assert!(capture.due_date.is_some());
    }

    #[test]
    fn test_metadata_read_from_content_not_prefix() {
        // Text before the prefix is dropped before extraction.
        let capture = parse("today's note: hi ");
        assert_eq!(capture.capture_type, CaptureType::Note);
        assert_eq!(capture.content, "hi");
        assert_eq!(capture.due_date, None);
    }
}
