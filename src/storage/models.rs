// storage/models.rs
// History row types

use serde::Serialize;

/// One persisted scan, as listed by [`HistoryStore::list_recent`](super::HistoryStore::list_recent).
///
/// Maps to the `scans` table. `date` is local wall-clock time at insert,
/// formatted `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanRecord {
    /// Autoincrement key assigned by SQLite
    pub id: i64,
    /// Normalized URL that was scanned
    pub url: String,
    /// Whole-number score, 0 to 100
    pub score: i64,
    /// Whether the scanned URL used https
    pub secure: bool,
    /// Insert time, local clock
    pub date: String,
}
