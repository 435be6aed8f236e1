//! chromehist database layer.
//!
//! Builds the parameterized history query and executes it against a
//! read-only snapshot of the Chrome `History` SQLite file.

pub mod connection;
pub mod query_builder;

pub use connection::query_snapshot;
pub use query_builder::{build_query, SqlStatement};
