//! Task rows written to the task store.

use std::fmt;

/// Category column of a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskCategory {
    /// Todos and explicit tasks.
    Task,
    /// Reminders.
    Reminder,
}

impl TaskCategory {
    /// Returns the category as stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Reminder => "reminder",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status column of a task row. Captures always start pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    /// Not started.
    #[default]
    Pending,
}

impl TaskStatus {
    /// Returns the status as stored.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

/// A task row ready for a blind insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Short title (truncated content).
    pub title: String,
    /// Full captured content.
    pub description: String,
    /// Task category.
    pub category: TaskCategory,
    /// Initial status.
    pub status: TaskStatus,
    /// Due date as Unix epoch seconds.
    pub due_date: Option<i64>,
}

impl NewTask {
    /// Builds a pending task from captured content.
    ///
    /// The title keeps the first `title_max_chars` characters of `content`.
    #[must_use]
    pub fn from_content(content: &str, category: TaskCategory, title_max_chars: usize) -> Self {
        Self {
            title: content.chars().take(title_max_chars).collect(),
            description: content.to_string(),
            category,
            status: TaskStatus::Pending,
            due_date: None,
        }
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<i64>) -> Self {
        self.due_date = due_date;
        self
    }
}
