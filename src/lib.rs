//! cyberguardian library: HTTP security header scanning
//!
//! Scans a site with a single GET, checks the response for six well-known
//! security headers, scores the result, and keeps a local SQLite history.
//! Results can be printed to a terminal, rendered as a PDF, or browsed in the
//! web dashboard.
//!
//! # Example
//!
//! ```no_run
//! use cyberguardian::{init_client, scan_and_record, Config, HistoryStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//! let store = HistoryStore::new(&config.db_path);
//! store.init().await?;
//!
//! let result = scan_and_record(&client, &store, "example.com").await?;
//! match result.report() {
//!     Some(report) => println!("{}: {}%", report.url, report.score_percent),
//!     None => println!("scan failed: {}", result.error().unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod config;
pub mod dashboard;
mod error_handling;
pub mod initialization;
pub mod report;
pub mod scanner;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{DatabaseError, InitializationError, ReportError, TransportErrorKind};
pub use initialization::init_client;
pub use scanner::{analyze_site, HeaderFinding, HeaderReport, ScanFailure, ScanResult, SiteReport};
pub use storage::{HistoryStore, ScanRecord};

/// Scans `input` and records the result in `store` if the scan completed.
///
/// Failed scans are returned as-is and leave the history untouched. Only store
/// failures surface as `Err`.
pub async fn scan_and_record(
    client: &reqwest::Client,
    store: &HistoryStore,
    input: &str,
) -> Result<ScanResult, DatabaseError> {
    let result = analyze_site(client, input).await;
    if let ScanResult::Completed(report) = &result {
        store.add_report(report).await?;
    }
    Ok(result)
}
