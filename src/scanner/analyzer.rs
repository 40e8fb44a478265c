//! Site analysis: one GET, header checks, score.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use reqwest::header::HeaderMap;

use crate::error_handling::{categorize_transport_error, describe_error_chain};

use super::headers::{check_security_headers, score_percent};
use super::types::{ScanFailure, ScanResult, SiteReport};

/// Adds `https://` to inputs that do not start with `http`.
///
/// The check is a plain prefix test, so `http://` and `https://` URLs are kept
/// as given.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http") {
        input.to_string()
    } else {
        format!("https://{input}")
    }
}

/// Flattens a reqwest header map into name -> value.
///
/// Repeated headers are joined with `", "`. Non-UTF-8 values are decoded lossily.
pub(crate) fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Scans one site.
///
/// Normalizes `input`, issues a single GET with `client` (whose timeout bounds
/// the call), and scores the response headers. `secure` reflects the
/// normalized URL only; redirects are followed by the client but never
/// re-inspected.
///
/// Transport failures are returned as [`ScanResult::Failed`], never as an error
/// or panic. There is no retry.
///
/// # Example
///
/// ```no_run
/// use cyberguardian::{analyze_site, init_client, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = init_client(&Config::default())?;
/// let result = analyze_site(&client, "example.com").await;
/// if let Some(report) = result.report() {
///     println!("{} scored {}%", report.url, report.score_percent);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn analyze_site(client: &reqwest::Client, input: &str) -> ScanResult {
    let url = normalize_url(input);
    debug!("Requesting {url}");

    let response = match client.get(&url).send().await {
        Ok(response) => response,
        Err(e) => {
            let kind = categorize_transport_error(&e);
            let error = describe_error_chain(&e);
            warn!("Scan of {url} failed ({kind}): {error}");
            return ScanFailure { error }.into();
        }
    };

    let status_code = response.status().as_u16();
    let headers = collect_headers(response.headers());
    let security_headers = check_security_headers(&headers);
    let score = score_percent(security_headers.present_count(), security_headers.len());
    let secure = url.starts_with("https");

    info!(
        "Scanned {url}: HTTP {status_code}, {}/{} security headers, score {score}%",
        security_headers.present_count(),
        security_headers.len()
    );

    SiteReport {
        url,
        status_code,
        secure,
        headers,
        security_headers,
        score_percent: score,
    }
    .into()
}
