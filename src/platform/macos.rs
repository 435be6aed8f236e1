// chromehist platform paths for macOS
// History: ~/Library/Application Support/Google/Chrome/Default/History

use std::path::{Path, PathBuf};

/// Returns the default Chrome history path on macOS.
pub fn default_history_path(home_dir: Option<&Path>) -> PathBuf {
    let home = home_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join("Library")
        .join("Application Support")
        .join("Google")
        .join("Chrome")
        .join("Default")
        .join("History")
}
