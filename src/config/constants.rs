//! Configuration constants.
//!
//! Defaults for the store location, network timeout, dashboard and score grading.

/// Default SQLite history file, relative to the working directory.
pub const DB_FILE_NAME: &str = "cyberguardian_history.db";

/// Fixed per-request timeout for a scan, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Number of history rows returned when no limit is given.
pub const DEFAULT_HISTORY_LIMIT: u32 = 20;

/// Port the web dashboard listens on by default.
pub const DEFAULT_DASHBOARD_PORT: u16 = 8501;

/// Default User-Agent string for scan requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("cyberguardian/", env!("CARGO_PKG_VERSION"));

/// Timestamp layout of the `date` column (local clock, second precision).
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Score grading
/// Scores at or above this value are graded as good.
pub const GOOD_SCORE_THRESHOLD: f64 = 75.0;
/// Scores at or above this value (and below the good threshold) are graded as fair.
pub const FAIR_SCORE_THRESHOLD: f64 = 40.0;
