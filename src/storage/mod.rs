//! Scan history persistence.
//!
//! A single SQLite table of completed scans, opened per operation.

mod models;
mod store;

pub use models::ScanRecord;
pub use store::HistoryStore;
