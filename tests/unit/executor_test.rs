//! Unit tests for read-only query execution against a snapshot file.
//!
//! Each test builds a throwaway SQLite file with the Chrome `urls`/`visits`
//! layout and runs the built statement against it.

use std::fs;
use std::path::Path;

use chromehist::database::{build_query, query_snapshot};
use chromehist::types::history::HistoryFilter;
use rusqlite::{params, Connection};
use tempfile::tempdir;

/// Creates a history store at `path`. Each row is
/// `(url, title, visit_count, visit_time, hidden)` and gets one visit.
fn create_history_store(path: &Path, rows: &[(&str, Option<&str>, i64, i64, i64)]) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE urls (\
             id INTEGER PRIMARY KEY,\
             url TEXT NOT NULL,\
             title TEXT,\
             visit_count INTEGER NOT NULL DEFAULT 0,\
             hidden INTEGER NOT NULL DEFAULT 0\
         );\
         CREATE TABLE visits (\
             id INTEGER PRIMARY KEY,\
             url INTEGER NOT NULL,\
             visit_time INTEGER NOT NULL\
         );",
    )
    .unwrap();
    for (i, (url, title, visit_count, visit_time, hidden)) in rows.iter().enumerate() {
        let id = (i + 1) as i64;
        conn.execute(
            "INSERT INTO urls (id, url, title, visit_count, hidden) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, url, title, visit_count, hidden],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO visits (url, visit_time) VALUES (?1, ?2)",
            params![id, visit_time],
        )
        .unwrap();
    }
}

#[test]
fn test_rows_come_back_sorted_by_visit_time_descending() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    create_history_store(
        &store,
        &[
            ("http://old.example.com", Some("Old"), 1, 100, 0),
            ("http://new.example.com", Some("New"), 1, 300, 0),
            ("http://mid.example.com", Some("Mid"), 1, 200, 0),
        ],
    );

    let records = query_snapshot(&store, &build_query(&HistoryFilter::default())).unwrap();

    let times: Vec<i64> = records.iter().map(|r| r.visit_time).collect();
    assert_eq!(times, vec![300, 200, 100]);
    assert_eq!(records[0].url, "http://new.example.com");
}

#[test]
fn test_hidden_entries_are_excluded() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    create_history_store(
        &store,
        &[
            ("http://visible.example.com", Some("Visible"), 1, 100, 0),
            ("http://hidden.example.com", Some("Hidden"), 9, 200, 1),
        ],
    );

    let records = query_snapshot(&store, &build_query(&HistoryFilter::default())).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, "http://visible.example.com");
}

#[test]
fn test_null_title_is_materialized_as_none() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    create_history_store(&store, &[("http://untitled.example.com", None, 1, 100, 0)]);

    let records = query_snapshot(&store, &build_query(&HistoryFilter::default())).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, None);
    assert_eq!(records[0].visit_count, 1);
}

#[test]
fn test_limit_and_offset_page_through_sorted_rows() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    let rows: Vec<(String, i64)> = (0..10)
        .map(|i| (format!("http://site{}.example.com", i), (i as i64 + 1) * 10))
        .collect();
    let row_refs: Vec<(&str, Option<&str>, i64, i64, i64)> = rows
        .iter()
        .map(|(url, time)| (url.as_str(), Some("Page"), 1, *time, 0))
        .collect();
    create_history_store(&store, &row_refs);

    let filter = HistoryFilter {
        limit: 3,
        offset: 2,
        ..HistoryFilter::default()
    };
    let records = query_snapshot(&store, &build_query(&filter)).unwrap();

    // Full order is 100, 90, ..., 10; offset 2 / limit 3 picks 80, 70, 60.
    let times: Vec<i64> = records.iter().map(|r| r.visit_time).collect();
    assert_eq!(times, vec![80, 70, 60]);
}

#[test]
fn test_date_bounds_restrict_visit_times() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    let jan_1 = chromehist::database::query_builder::to_webkit_time(
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc(),
    );
    create_history_store(
        &store,
        &[
            ("http://before.example.com", Some("Before"), 1, jan_1 - 1, 0),
            ("http://at.example.com", Some("At"), 1, jan_1, 0),
            ("http://after.example.com", Some("After"), 1, jan_1 + 1, 0),
        ],
    );

    let filter = HistoryFilter {
        start_date: Some("2024-01-01".to_string()),
        ..HistoryFilter::default()
    };
    let records = query_snapshot(&store, &build_query(&filter)).unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.visit_time >= jan_1));
}

#[test]
fn test_malformed_store_surfaces_database_error() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    fs::write(&store, b"definitely not a sqlite database").unwrap();

    let result = query_snapshot(&store, &build_query(&HistoryFilter::default()));

    let err = result.err().expect("corrupted store should fail");
    assert!(
        err.to_string().starts_with("History database error:"),
        "unexpected error text: {}",
        err
    );
}

#[test]
fn test_store_with_expected_schema_but_no_rows_returns_empty() {
    let dir = tempdir().unwrap();
    let store = dir.path().join("History");
    create_history_store(&store, &[]);

    let records = query_snapshot(&store, &build_query(&HistoryFilter::default())).unwrap();
    assert!(records.is_empty());
}
