// chromehist platform paths for Windows
// History: %LOCALAPPDATA%/Google/Chrome/User Data/Default/History

use std::env;
use std::path::{Path, PathBuf};

/// Returns the default Chrome history path on Windows.
/// Uses `%LOCALAPPDATA%` if set, otherwise `<home>/AppData/Local`.
pub fn default_history_path(home_dir: Option<&Path>) -> PathBuf {
    let local_appdata = match env::var("LOCALAPPDATA") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => home_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("C:\\Users\\Default"))
            .join("AppData")
            .join("Local"),
    };
    local_appdata
        .join("Google")
        .join("Chrome")
        .join("User Data")
        .join("Default")
        .join("History")
}
