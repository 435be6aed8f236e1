//! App core for chromehist.
//!
//! Holds the environment-derived configuration for the server. The process
//! environment is read exactly once, here; everything downstream receives
//! plain values so it stays testable without environment juggling.

use std::path::PathBuf;

/// Environment variable overriding the history file location.
pub const HISTORY_PATH_ENV: &str = "CHROME_HISTORY_PATH";

/// Per-process configuration handed to the RPC handler.
#[derive(Debug, Clone, Default)]
pub struct App {
    /// Override for the history file path, honored with `~/` expansion.
    pub history_path_override: Option<String>,
    /// Current user's home directory, if known.
    pub home_dir: Option<PathBuf>,
}

impl App {
    /// Builds the configuration from `CHROME_HISTORY_PATH` and the user's
    /// home directory.
    pub fn from_env() -> Self {
        Self {
            history_path_override: std::env::var(HISTORY_PATH_ENV).ok(),
            home_dir: dirs::home_dir(),
        }
    }
}
