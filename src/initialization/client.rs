//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for scans.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the config
/// - The fixed per-request timeout from the config
/// - reqwest's default redirect policy
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()
}
