// chromehist platform abstraction
// Provides the per-OS default location of Chrome's History database.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::{Path, PathBuf};

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the default path of Chrome's `History` database for the default
/// profile, relative to the given home directory.
///
/// - **Linux**: `~/.config/google-chrome/Default/History`
/// - **macOS**: `~/Library/Application Support/Google/Chrome/Default/History`
/// - **Windows**: `%LOCALAPPDATA%/Google/Chrome/User Data/Default/History`
///
/// No existence check is performed; the caller decides what a missing file
/// means.
pub fn default_history_path(home_dir: Option<&Path>) -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::default_history_path(home_dir)
    }
    #[cfg(target_os = "macos")]
    {
        macos::default_history_path(home_dir)
    }
    #[cfg(target_os = "windows")]
    {
        windows::default_history_path(home_dir)
    }
}
