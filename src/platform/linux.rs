// chromehist platform paths for Linux
// History: ~/.config/google-chrome/Default/History

use std::path::{Path, PathBuf};

/// Returns the default Chrome history path on Linux.
/// Chrome stores its profile under `~/.config/google-chrome` regardless of
/// `XDG_CONFIG_HOME`, so only the home directory is consulted.
pub fn default_history_path(home_dir: Option<&Path>) -> PathBuf {
    let home = home_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    home.join(".config")
        .join("google-chrome")
        .join("Default")
        .join("History")
}
