//! Runtime configuration for embedding front ends.
//!
//! Resolution order: built-in defaults, then `TRACKUP_*` environment
//! variables. Front ends apply their own overrides (CLI flags) on top.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "TRACKUP_DB_PATH";
pub const ENV_LOG_DIR: &str = "TRACKUP_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "TRACKUP_LOG_LEVEL";

const DEFAULT_DB_FILE_NAME: &str = "trackup.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "trackup-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file holding the address book.
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// One of `trace|debug|info|warn|error`; validated by `init_logging`.
    pub log_level: String,
    /// When false, the session keeps data in memory only.
    pub persist: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        let temp_dir = std::env::temp_dir();
        Self {
            db_path: temp_dir.join(DEFAULT_DB_FILE_NAME),
            log_dir: temp_dir.join(DEFAULT_LOG_DIR_NAME),
            log_level: default_log_level().to_string(),
            persist: true,
        }
    }
}

impl CoreConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; blank values are ignored.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(db_path) = non_blank(ENV_DB_PATH) {
            config.db_path = PathBuf::from(db_path);
        }
        if let Some(log_dir) = non_blank(ENV_LOG_DIR) {
            config.log_dir = PathBuf::from(log_dir);
        }
        if let Some(log_level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = log_level;
        }
        config
    }
}
