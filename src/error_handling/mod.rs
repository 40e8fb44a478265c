//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, storage and reporting
//! - Categorization of transport failures for logging
//! - Formatting of error chains into the single message a failed scan carries

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_transport_error, describe_error_chain};
pub use types::{DatabaseError, InitializationError, ReportError, TransportErrorKind};
