//! History path resolution for chromehist.
//!
//! Decides which file the `history` tool reads: an explicit override
//! (normally from `CHROME_HISTORY_PATH`) with `~/` expansion, or the
//! platform default under the Chrome profile directory.
//!
//! The override and home directory are injected as plain values rather than
//! read from the process environment here, so the function stays pure and
//! unit-testable. Existence is checked by the caller.

use std::path::{Path, PathBuf};

use crate::platform;

/// Resolves the path of the Chrome `History` database.
///
/// A present, non-blank `override_path` wins; a leading `~/` is expanded
/// against `home_dir`. Otherwise the platform default is returned.
pub fn resolve_history_path(override_path: Option<&str>, home_dir: Option<&Path>) -> PathBuf {
    if let Some(raw) = override_path {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return expand_home(trimmed, home_dir);
        }
    }
    platform::default_history_path(home_dir)
}

/// Expands a leading `~/` to the home directory. Paths without the shorthand
/// (and paths when no home directory is known) are returned verbatim.
fn expand_home(path: &str, home_dir: Option<&Path>) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = home_dir {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
