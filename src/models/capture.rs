//! Capture types and the classified capture record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source label used when the caller does not name a channel.
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Capture categories recognized by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureType {
    /// Something to explore later.
    Idea,
    /// An actionable item.
    Todo,
    /// A plain note for today's journal.
    #[default]
    Note,
    /// A time-bound nudge.
    Reminder,
    /// A link worth keeping.
    Bookmark,
    /// A quotation.
    Quote,
    /// An explicitly-typed task. Never produced by the classifier.
    Task,
    /// Unstructured thoughts dumped in one go.
    #[serde(alias = "braindump", alias = "brain-dump")]
    BrainDump,
    /// Sentinel for captures no sink accepts.
    Unknown,
}

impl CaptureType {
    /// Returns all capture types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Idea,
            Self::Todo,
            Self::Note,
            Self::Reminder,
            Self::Bookmark,
            Self::Quote,
            Self::Task,
            Self::BrainDump,
            Self::Unknown,
        ]
    }

    /// Returns the capture type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Todo => "todo",
            Self::Note => "note",
            Self::Reminder => "reminder",
            Self::Bookmark => "bookmark",
            Self::Quote => "quote",
            Self::Task => "task",
            Self::BrainDump => "brain_dump",
            Self::Unknown => "unknown",
        }
    }

    /// Parses a capture type from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "idea" => Some(Self::Idea),
            "todo" => Some(Self::Todo),
            "note" => Some(Self::Note),
            "reminder" => Some(Self::Reminder),
            "bookmark" => Some(Self::Bookmark),
            "quote" => Some(Self::Quote),
            "task" => Some(Self::Task),
            "brain_dump" | "braindump" | "brain-dump" => Some(Self::BrainDump),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CaptureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified unit of captured text.
///
/// Built once per message by [`CaptureParser`](crate::services::CaptureParser)
/// and passed by reference through routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// The detected capture type.
    pub capture_type: CaptureType,
    /// Text to persist.
    pub content: String,
    /// The literal prefix that triggered classification, or empty.
    pub prefix: String,
    /// Project from a `[Project: name]` tag.
    pub project: Option<String>,
    /// Due date derived from relative keywords.
    pub due_date: Option<NaiveDate>,
    /// Channel that produced the message.
    pub source: String,
}

impl Capture {
    /// Creates a capture with no prefix or metadata.
    #[must_use]
    pub fn new(capture_type: CaptureType, content: impl Into<String>) -> Self {
        Self {
            capture_type,
            content: content.into(),
            prefix: String::new(),
            project: None,
            due_date: None,
            source: UNKNOWN_SOURCE.to_string(),
        }
    }

    /// Sets the matched prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the project tag.
    #[must_use]
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the source channel.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Returns true if the source is a real channel rather than the sentinel.
    #[must_use]
    pub fn has_known_source(&self) -> bool {
        !self.source.is_empty() && self.source != UNKNOWN_SOURCE
    }
}
