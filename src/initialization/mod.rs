//! Application initialization.
//!
//! Sets up the logger and the HTTP client shared by the CLI and the dashboard.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
