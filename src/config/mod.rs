//! Configuration management.
//!
//! All sink locations are injected through [`NatcapConfig`]. Relative paths
//! in the config file resolve against the workspace (the ideas file against
//! the memory directory), and a leading `~/` expands to the home directory.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default memory directory, relative to the workspace.
pub const DEFAULT_MEMORY_DIR: &str = "memory";
/// Default ideas journal, relative to the memory directory.
pub const DEFAULT_IDEAS_FILE: &str = "ideas.md";
/// Default task database, relative to the workspace.
pub const DEFAULT_TASK_DB: &str = "memory/para.sqlite";
/// Default maximum task title length, in characters.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 100;

/// Main configuration for natcap.
#[derive(Debug, Clone)]
pub struct NatcapConfig {
    /// Root directory for all capture data.
    pub workspace: PathBuf,
    /// Directory holding the ideas journal and daily journals.
    pub memory_dir: PathBuf,
    /// The running ideas journal.
    pub ideas_file: PathBuf,
    /// The `SQLite` task database.
    pub task_db: PathBuf,
    /// Maximum characters kept in a task title.
    pub title_max_chars: usize,
    /// Create the task table before routing if it is missing.
    pub auto_init_schema: bool,
    /// Logging settings.
    pub logging: LoggingSettings,
}

/// Logging section of the config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `natcap=debug`.
    pub level: Option<String>,
    /// Output format: `pretty` or `json`.
    pub format: Option<String>,
    /// Append logs to this file instead of stderr.
    pub file: Option<PathBuf>,
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Workspace root.
    pub workspace: Option<String>,
    /// Memory directory.
    pub memory_dir: Option<String>,
    /// Ideas journal.
    pub ideas_file: Option<String>,
    /// Task database.
    pub task_db: Option<String>,
    /// Maximum task title length.
    pub title_max_chars: Option<usize>,
    /// Auto-create the task table.
    pub auto_init_schema: Option<bool>,
    /// Logging section.
    pub logging: Option<LoggingSettings>,
}

impl Default for NatcapConfig {
    fn default() -> Self {
        Self::for_workspace(default_workspace())
    }
}

impl NatcapConfig {
    /// Creates a configuration with default locations under `workspace`.
    #[must_use]
    pub fn for_workspace(workspace: impl Into<PathBuf>) -> Self {
        let workspace = workspace.into();
        let memory_dir = workspace.join(DEFAULT_MEMORY_DIR);
        Self {
            ideas_file: memory_dir.join(DEFAULT_IDEAS_FILE),
            task_db: workspace.join(DEFAULT_TASK_DB),
            memory_dir,
            workspace,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
            auto_init_schema: true,
            logging: LoggingSettings::default(),
        }
    }

    /// Loads configuration from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> crate::Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::Error::OperationFailed {
                operation: "read_config_file".to_string(),
                cause: format!("{}: {e}", path.display()),
            })?;

        Self::from_toml_str(&contents).map_err(|e| crate::Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error if the text is not a valid config file.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(Self::from_config_file(file))
    }

    /// Loads configuration from the default location.
    ///
    /// Checks the following paths in order:
    /// 1. Platform-specific config dir (`~/.config/natcap/` on Linux,
    ///    `~/Library/Application Support/natcap/` on macOS)
    /// 2. XDG-style `~/.config/natcap/` for macOS users who prefer it
    ///
    /// Returns default configuration if no config file is found. A config
    /// file that exists but fails to load is reported and skipped.
    #[must_use]
    pub fn load_default() -> Self {
        let Some(base_dirs) = directories::BaseDirs::new() else {
            return Self::default();
        };

        let candidates = [
            base_dirs.config_dir().join("natcap").join("config.toml"),
            base_dirs
                .home_dir()
                .join(".config")
                .join("natcap")
                .join("config.toml"),
        ];

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable config file"),
            }
        }

        Self::default()
    }

    /// Converts a `ConfigFile` to `NatcapConfig`.
    fn from_config_file(file: ConfigFile) -> Self {
        let workspace = file
            .workspace
            .map_or_else(default_workspace, |w| expand_home(&w));
        let mut config = Self::for_workspace(workspace);

        if let Some(memory_dir) = file.memory_dir {
            config.memory_dir = resolve(&config.workspace, &memory_dir);
        }
        config.ideas_file = resolve(
            &config.memory_dir,
            file.ideas_file.as_deref().unwrap_or(DEFAULT_IDEAS_FILE),
        );
        if let Some(task_db) = file.task_db {
            config.task_db = resolve(&config.workspace, &task_db);
        }
        if let Some(max) = file.title_max_chars.filter(|m| *m > 0) {
            config.title_max_chars = max;
        }
        if let Some(v) = file.auto_init_schema {
            config.auto_init_schema = v;
        }
        if let Some(mut logging) = file.logging {
            logging.file = logging.file.map(|f| resolve(&config.workspace, &f.to_string_lossy()));
            config.logging = logging;
        }

        config
    }

    /// Sets the memory directory, moving the ideas file along with it.
    #[must_use]
    pub fn with_memory_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(name) = self.ideas_file.file_name() {
            self.ideas_file = path.join(name);
        }
        self.memory_dir = path;
        self
    }

    /// Sets the ideas journal path.
    #[must_use]
    pub fn with_ideas_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ideas_file = path.into();
        self
    }

    /// Sets the task database path.
    #[must_use]
    pub fn with_task_db(mut self, path: impl Into<PathBuf>) -> Self {
        self.task_db = path.into();
        self
    }
}

/// Returns the default workspace: `<platform data dir>/natcap`.
#[must_use]
pub fn default_workspace() -> PathBuf {
    directories::BaseDirs::new().map_or_else(
        || PathBuf::from(".natcap"),
        |dirs| dirs.data_dir().join("natcap"),
    )
}

/// Expands a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(dirs) = directories::BaseDirs::new() {
            return dirs.home_dir().join(rest);
        }
    }
    PathBuf::from(path)
}

/// Resolves `path` against `base` unless it is absolute.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
