//! Capture routing.
//!
//! Each capture type maps to exactly one sink:
//!
//! | Type | Sink |
//! |------|------|
//! | idea, bookmark, quote | ideas journal |
//! | note, brain dump | daily journal |
//! | todo, task, reminder | task store |
//!
//! Sink failures never escape as errors; they come back as a failed
//! [`RouteResult`] naming the intended destination.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use tracing::{info, instrument, warn};

use crate::config::{DEFAULT_TITLE_MAX_CHARS, NatcapConfig};
use crate::models::{Capture, CaptureType, NO_DESTINATION, NewTask, RouteResult, TaskCategory};
use crate::services::patterns::URL_PATTERN;
use crate::storage::{MarkdownJournal, SinkError, SinkResult, SqliteTaskStore, TaskStore};

/// Heading length for ideas.
const IDEA_HEADING_CHARS: usize = 100;
/// Heading length for bookmarks and quotes.
const SHORT_HEADING_CHARS: usize = 80;

/// Routes classified captures to their sinks.
pub struct CaptureRouter {
    memory_dir: PathBuf,
    ideas: MarkdownJournal,
    task_store: Box<dyn TaskStore>,
    title_max_chars: usize,
}

impl CaptureRouter {
    /// Creates a router over explicit sinks.
    #[must_use]
    pub fn new(
        memory_dir: impl Into<PathBuf>,
        ideas_file: impl Into<PathBuf>,
        task_store: Box<dyn TaskStore>,
    ) -> Self {
        Self {
            memory_dir: memory_dir.into(),
            ideas: MarkdownJournal::ideas(ideas_file),
            task_store,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }

    /// Creates a router from configuration, backed by the `SQLite` task store.
    #[must_use]
    pub fn from_config(config: &NatcapConfig) -> Self {
        Self::new(
            &config.memory_dir,
            &config.ideas_file,
            Box::new(SqliteTaskStore::new(&config.task_db)),
        )
        .with_title_max_chars(config.title_max_chars)
    }

    /// Sets the maximum task title length.
    #[must_use]
    pub const fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    /// Returns the daily journal directory.
    #[must_use]
    pub fn memory_dir(&self) -> &Path {
        &self.memory_dir
    }

    /// Returns the ideas journal path.
    #[must_use]
    pub fn ideas_file(&self) -> &Path {
        self.ideas.path()
    }

    /// Routes a capture using the current local time.
    #[must_use]
    #[instrument(skip(self, capture), fields(capture_type = %capture.capture_type))]
    pub fn route(&self, capture: &Capture) -> RouteResult {
        self.route_at(capture, Local::now())
    }

    /// Routes a capture, stamping entries with `now`.
    #[must_use]
    pub fn route_at(&self, capture: &Capture, now: DateTime<Local>) -> RouteResult {
        match capture.capture_type {
            CaptureType::Idea => self.append_idea(format_idea(capture, now)),
            CaptureType::Bookmark => self.append_idea(format_bookmark(capture, now)),
            CaptureType::Quote => self.append_idea(format_quote(capture, now)),
            CaptureType::Note => self.append_daily(&format_daily_entry(capture, now, "Note"), now),
            CaptureType::BrainDump => {
                self.append_daily(&format_daily_entry(capture, now, "Brain Dump"), now)
            },
            CaptureType::Todo | CaptureType::Task => self.insert_task(capture, TaskCategory::Task),
            CaptureType::Reminder => self.insert_task(capture, TaskCategory::Reminder),
            CaptureType::Unknown => RouteResult::failed(
                NO_DESTINATION,
                format!("Unknown capture type: {}", capture.capture_type),
            ),
        }
    }

    fn append_idea(&self, block: String) -> RouteResult {
        let destination = self.ideas.path().display().to_string();
        report(destination, self.ideas.append(&block))
    }

    fn append_daily(&self, block: &str, now: DateTime<Local>) -> RouteResult {
        let journal = MarkdownJournal::daily(&self.memory_dir, now.date_naive());
        let destination = journal.path().display().to_string();
        report(destination, journal.append(block))
    }

    fn insert_task(&self, capture: &Capture, category: TaskCategory) -> RouteResult {
        let destination = self.task_store.location();
        let written = capture
            .due_date
            .map(local_midnight_timestamp)
            .transpose()
            .and_then(|due| {
                let task = NewTask::from_content(&capture.content, category, self.title_max_chars)
                    .with_due_date(due);
                self.task_store.insert_task(&task)
            });
        report(destination, written)
    }
}

fn report(destination: String, written: SinkResult<()>) -> RouteResult {
    match written {
        Ok(()) => {
            info!(destination = %destination, "capture routed");
            RouteResult::delivered(destination)
        },
        Err(e) => {
            warn!(destination = %destination, error = %e, "capture routing failed");
            RouteResult::failed(destination, e.to_string())
        },
    }
}

/// Seconds since the epoch of local midnight on `date`.
fn local_midnight_timestamp(date: NaiveDate) -> SinkResult<i64> {
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.and_local_timezone(Local).earliest())
        .map(|dt| dt.timestamp())
        .ok_or_else(|| SinkError::InvalidDueDate(date.to_string()))
}

/// First `max` characters of `text`, with `...` when cut.
fn truncate_heading(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut heading: String = text.chars().take(max).collect();
        heading.push_str("...");
        heading
    } else {
        text.to_string()
    }
}

fn source_line(capture: &Capture) -> String {
    if capture.has_known_source() {
        format!("**Source:** {}\n", capture.source)
    } else {
        String::new()
    }
}

fn captured_line(now: DateTime<Local>) -> String {
    format!("**Captured:** {}\n", now.format("%Y-%m-%d %H:%M:%S"))
}

fn format_idea(capture: &Capture, now: DateTime<Local>) -> String {
    let mut entry = format!(
        "\n## {}\n\n### {}\n",
        now.format("%Y-%m-%d"),
        truncate_heading(&capture.content, IDEA_HEADING_CHARS)
    );
    entry.push_str(&captured_line(now));
    entry.push_str(&source_line(capture));
    if let Some(project) = &capture.project {
        entry.push_str(&format!("**Project:** {project}\n"));
    }
    entry.push_str(&format!("\n**Content:**\n\n{}\n\n---\n", capture.content));
    entry
}

fn format_bookmark(capture: &Capture, now: DateTime<Local>) -> String {
    let url = URL_PATTERN
        .find(&capture.content)
        .map_or_else(|| capture.content.trim(), |m| m.as_str());
    let mut entry = format!(
        "\n## {} - Bookmark\n\n### {}\n**Link:** {url}\n",
        now.format("%Y-%m-%d"),
        truncate_heading(url, SHORT_HEADING_CHARS)
    );
    entry.push_str(&captured_line(now));
    entry.push_str(&source_line(capture));
    entry.push_str("\n---\n");
    entry
}

fn format_quote(capture: &Capture, now: DateTime<Local>) -> String {
    let mut entry = format!(
        "\n## {} - Quote\n\n### {}\n**Quote:** {}\n",
        now.format("%Y-%m-%d"),
        truncate_heading(&capture.content, SHORT_HEADING_CHARS),
        capture.content
    );
    entry.push_str(&captured_line(now));
    entry.push_str(&source_line(capture));
    entry.push_str("\n---\n");
    entry
}

fn format_daily_entry(capture: &Capture, now: DateTime<Local>, kind: &str) -> String {
    let mut entry = format!("\n## {} - {kind}\n\n", now.format("%H:%M"));
    if capture.has_known_source() {
        entry.push_str(&format!("**Source:** {}\n\n", capture.source));
    }
    entry.push_str(&format!("{}\n\n", capture.content));
    entry
}
