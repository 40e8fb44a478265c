//! Scan result data structures.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Outcome of checking one tracked header against a response.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HeaderFinding {
    /// Canonical header name from the security header table
    #[serde(skip)]
    pub name: &'static str,
    /// Whether the response carried the header at all
    pub present: bool,
    /// Raw header value, unparsed
    pub value: Option<String>,
    /// What the header protects against
    pub description: &'static str,
}

/// Findings for every tracked security header, in table order.
///
/// Serializes as a JSON object keyed by header name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderReport {
    findings: Vec<HeaderFinding>,
}

impl HeaderReport {
    pub(crate) fn new(findings: Vec<HeaderFinding>) -> Self {
        Self { findings }
    }

    /// Looks up a finding by header name (ASCII case-insensitive).
    pub fn get(&self, name: &str) -> Option<&HeaderFinding> {
        self.findings
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Iterates findings in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, HeaderFinding> {
        self.findings.iter()
    }

    /// Number of tracked headers found in the response.
    pub fn present_count(&self) -> usize {
        self.findings.iter().filter(|f| f.present).count()
    }

    /// Findings for headers the response did not carry, in table order.
    pub fn missing(&self) -> impl Iterator<Item = &HeaderFinding> {
        self.findings.iter().filter(|f| !f.present)
    }

    /// Number of tracked headers.
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    /// True when no headers are tracked.
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderReport {
    type Item = &'a HeaderFinding;
    type IntoIter = std::slice::Iter<'a, HeaderFinding>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for HeaderReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.findings.len()))?;
        for finding in &self.findings {
            map.serialize_entry(finding.name, finding)?;
        }
        map.end()
    }
}

/// Report for a scan that completed the HTTP exchange.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteReport {
    /// URL actually requested (scheme added when the input had none)
    pub url: String,
    /// HTTP status of the final response
    pub status_code: u16,
    /// True iff the requested URL uses https
    pub secure: bool,
    /// Every response header, lowercase name to value
    pub headers: BTreeMap<String, String>,
    /// Per-header findings for the tracked security headers
    pub security_headers: HeaderReport,
    /// Share of tracked headers present, 0.0 to 100.0, one decimal
    pub score_percent: f64,
}

/// Report for a scan whose request never completed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScanFailure {
    /// Transport error description
    pub error: String,
}

/// Result of one scan: either a full report or a transport error, never both.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(untagged)]
pub enum ScanResult {
    /// The request completed and every tracked header was evaluated.
    Completed(SiteReport),
    /// The request failed before a response arrived.
    Failed(ScanFailure),
}

impl ScanResult {
    /// The report, if the scan completed.
    pub fn report(&self) -> Option<&SiteReport> {
        match self {
            ScanResult::Completed(report) => Some(report),
            ScanResult::Failed(_) => None,
        }
    }

    /// The error message, if the scan failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ScanResult::Completed(_) => None,
            ScanResult::Failed(failure) => Some(&failure.error),
        }
    }

    /// True when the scan produced a report.
    pub fn is_completed(&self) -> bool {
        matches!(self, ScanResult::Completed(_))
    }
}

impl From<SiteReport> for ScanResult {
    fn from(report: SiteReport) -> Self {
        ScanResult::Completed(report)
    }
}

impl From<ScanFailure> for ScanResult {
    fn from(failure: ScanFailure) -> Self {
        ScanResult::Failed(failure)
    }
}
