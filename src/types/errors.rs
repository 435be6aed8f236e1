use std::fmt;

// === HistoryError ===

/// Errors raised while snapshotting or querying the Chrome history store.
#[derive(Debug)]
pub enum HistoryError {
    /// Creating or populating the temporary snapshot failed.
    Snapshot(String),
    /// Opening the snapshot or executing the query failed.
    Database(String),
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::Snapshot(msg) => write!(f, "History snapshot error: {}", msg),
            HistoryError::Database(msg) => write!(f, "History database error: {}", msg),
        }
    }
}

impl std::error::Error for HistoryError {}
