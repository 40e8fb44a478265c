//! Security header scanning.
//!
//! - [`check_security_headers`] maps response headers to per-header findings
//! - [`analyze_site`] performs the single GET and builds the [`ScanResult`]
//!
//! A scan either fully succeeds, with all six tracked headers evaluated, or
//! fails with a transport error message.

mod analyzer;
mod headers;
mod types;

pub use analyzer::{analyze_site, normalize_url};
pub use headers::{check_security_headers, score_percent};
pub use types::{HeaderFinding, HeaderReport, ScanFailure, ScanResult, SiteReport};
