//! Append-only markdown journals.
//!
//! A journal is a single human-readable file. Blocks are appended at the
//! end; a journal that does not exist yet (or is empty) is started with its
//! header first. Missing parent directories are created.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::SinkResult;

/// Header of the running ideas file.
pub const IDEAS_HEADER: &str = "# Ideas & Things to Explore\n\n\
> Capture interesting things to revisit, analyze, or build.\n\n\
---\n\n";

/// An append-only markdown file with a fixed header.
#[derive(Debug, Clone)]
pub struct MarkdownJournal {
    path: PathBuf,
    header: String,
}

impl MarkdownJournal {
    /// Creates a journal at `path` started with `header`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, header: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            header: header.into(),
        }
    }

    /// The running ideas journal.
    #[must_use]
    pub fn ideas(path: impl Into<PathBuf>) -> Self {
        Self::new(path, IDEAS_HEADER)
    }

    /// The daily journal for `date`: `<memory_dir>/<YYYY-MM-DD>.md`.
    #[must_use]
    pub fn daily(memory_dir: &Path, date: NaiveDate) -> Self {
        let stamp = date.format("%Y-%m-%d").to_string();
        Self::new(
            memory_dir.join(format!("{stamp}.md")),
            format!("# Daily Notes - {stamp}\n\n---\n\n"),
        )
    }

    /// Returns the journal path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends a block, writing the header first if the journal is new.
    ///
    /// A failure part-way through is not rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`](super::SinkError::Io) if the directory or
    /// file cannot be created or written.
    pub fn append(&self, block: &str) -> SinkResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        if file.metadata()?.len() == 0 {
            file.write_all(self.header.as_bytes())?;
        }
        file.write_all(block.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SinkError;
    use tempfile::TempDir;

    #[test]
    fn test_append_creates_file_with_header() {
        let dir = TempDir::new().unwrap();
        let journal = MarkdownJournal::ideas(dir.path().join("memory").join("ideas.md"));

        journal.append("\n## entry\n").unwrap();

        let text = fs::read_to_string(journal.path()).unwrap();
        assert!(text.starts_with("# Ideas & Things to Explore\n"));
        assert!(text.ends_with("\n## entry\n"));
    }

    #[test]
    fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let journal = MarkdownJournal::ideas(dir.path().join("ideas.md"));

        journal.append("one\n").unwrap();
        journal.append("two\n").unwrap();

        let text = fs::read_to_string(journal.path()).unwrap();
        assert_eq!(text.matches("# Ideas & Things to Explore").count(), 1);
        assert!(text.ends_with("one\ntwo\n"));
    }

    #[test]
    fn test_existing_content_is_preserved() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ideas.md");
        fs::write(&path, "my own header\n").unwrap();

        MarkdownJournal::ideas(&path).append("more\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "my own header\nmore\n");
    }

    #[test]
    fn test_daily_journal_path_and_header() {
        let dir = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let journal = MarkdownJournal::daily(dir.path(), date);

        assert_eq!(journal.path(), dir.path().join("2026-10-16.md"));
        journal.append("x\n").unwrap();
        let text = fs::read_to_string(journal.path()).unwrap();
        assert!(text.starts_with("# Daily Notes - 2026-10-16\n\n---\n\n"));
    }

    #[test]
    fn test_append_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("memory");
        fs::write(&blocker, "not a directory").unwrap();

        let journal = MarkdownJournal::ideas(blocker.join("ideas.md"));
        let err = journal.append("x\n").unwrap_err();
        assert!(matches!(err, SinkError::Io(_)));
    }
}
