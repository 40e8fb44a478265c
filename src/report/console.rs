//! Colored terminal output.

use std::fmt::Write;

use colored::*;

use crate::scanner::{ScanResult, SiteReport};
use crate::storage::ScanRecord;

use super::format_score;

/// Banner printed before prompting for a URL.
pub fn banner() -> String {
    format!("{}", "=== CyberGuardian 🛡️ ===".cyan())
}

/// Renders a scan result as colored lines.
///
/// A failed scan renders a single error line.
pub fn render_scan(result: &ScanResult) -> String {
    match result {
        ScanResult::Completed(report) => render_report(report),
        ScanResult::Failed(failure) => {
            format!("{}", format!("Error: {}", failure.error).red())
        }
    }
}

fn render_report(report: &SiteReport) -> String {
    let mut out = String::new();
    // writeln! into a String cannot fail
    let _ = writeln!(out, "\n{}", "Scan results:".cyan());
    let _ = writeln!(out, "Site: {}", report.url.yellow());
    let _ = writeln!(out, "HTTP status: {}", report.status_code);
    let _ = writeln!(
        out,
        "Secure connection: {}",
        if report.secure {
            "✅ HTTPS"
        } else {
            "❌ Not secure"
        }
    );

    let _ = writeln!(out, "\n{}", "[🧩 Security header analysis]".magenta());
    for finding in &report.security_headers {
        if finding.present {
            let _ = writeln!(
                out,
                "{} → {}",
                format!("✅ {}", finding.name).green(),
                finding.description
            );
        } else {
            let _ = writeln!(
                out,
                "{} → {} (missing)",
                format!("❌ {}", finding.name).red(),
                finding.description
            );
        }
    }

    let _ = write!(
        out,
        "\nGlobal score: {}",
        format!("{}%", format_score(report.score_percent)).cyan()
    );
    out
}

/// Renders history rows as an aligned table, most recent first.
pub fn render_history(records: &[ScanRecord]) -> String {
    if records.is_empty() {
        return "No scans recorded yet.".to_string();
    }

    let url_width = records
        .iter()
        .map(|r| r.url.chars().count())
        .max()
        .unwrap_or(0)
        .max("Site".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:<url_width$}  {:>5}  {:<5}  {}",
            "Site", "Score", "HTTPS", "Date"
        )
        .bold()
    );
    for record in records {
        let https = if record.secure { "Yes" } else { "No" };
        let _ = writeln!(
            out,
            "{:<url_width$}  {:>4}%  {:<5}  {}",
            record.url, record.score, https, record.date
        );
    }
    out.trim_end().to_string()
}
