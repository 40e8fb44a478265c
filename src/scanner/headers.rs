//! Security header presence checks and scoring.

use std::collections::BTreeMap;

use crate::config::SECURITY_HEADERS;

use super::types::{HeaderFinding, HeaderReport};

/// Checks a response header map for every tracked security header.
///
/// Always returns one finding per entry of [`SECURITY_HEADERS`], in table order,
/// whatever else the map contains. Names match case-insensitively; values are
/// copied verbatim and never validated.
pub fn check_security_headers(headers: &BTreeMap<String, String>) -> HeaderReport {
    let findings = SECURITY_HEADERS
        .iter()
        .map(|header| {
            let value = headers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(header.name))
                .map(|(_, value)| value.clone());
            HeaderFinding {
                name: header.name,
                present: value.is_some(),
                value,
                description: header.description,
            }
        })
        .collect();
    HeaderReport::new(findings)
}

/// Percentage of `present` out of `total`, rounded to one decimal.
///
/// Returns 0.0 when `total` is zero.
pub fn score_percent(present: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = present as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_headers_all_missing() {
        let report = check_security_headers(&BTreeMap::new());
        assert_eq!(report.len(), 6);
        assert_eq!(report.present_count(), 0);
        assert!(report.iter().all(|f| f.value.is_none()));
    }

    #[test]
    fn test_exactly_six_keys_with_extra_headers() {
        let report = check_security_headers(&headers(&[
            ("server", "nginx"),
            ("content-type", "text/html"),
            ("x-frame-options", "DENY"),
            ("set-cookie", "a=b"),
        ]));
        assert_eq!(report.len(), 6);
        assert_eq!(report.present_count(), 1);
        assert!(report.get("server").is_none());
    }

    #[test]
    fn test_descriptions_match_table() {
        let report = check_security_headers(&BTreeMap::new());
        for (finding, header) in report.iter().zip(SECURITY_HEADERS) {
            assert_eq!(finding.name, header.name);
            assert_eq!(finding.description, header.description);
        }
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let report = check_security_headers(&headers(&[
            ("STRICT-TRANSPORT-SECURITY", "max-age=63072000"),
            ("x-content-type-options", "nosniff"),
            ("Referrer-Policy", "no-referrer"),
        ]));
        assert_eq!(report.present_count(), 3);
        let hsts = report
            .get("strict-transport-security")
            .expect("HSTS finding");
        assert!(hsts.present);
        assert_eq!(hsts.value.as_deref(), Some("max-age=63072000"));
    }

    #[test]
    fn test_values_not_validated() {
        // Presence alone counts, even for nonsense values
        let report = check_security_headers(&headers(&[("x-frame-options", "")]));
        let xfo = report.get("X-Frame-Options").expect("XFO finding");
        assert!(xfo.present);
        assert_eq!(xfo.value.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_in_table_order() {
        let report = check_security_headers(&headers(&[
            ("x-frame-options", "DENY"),
            ("permissions-policy", "camera=()"),
        ]));
        let missing: Vec<&str> = report.missing().map(|f| f.name).collect();
        assert_eq!(
            missing,
            vec![
                "Strict-Transport-Security",
                "X-Content-Type-Options",
                "Content-Security-Policy",
                "Referrer-Policy",
            ]
        );
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let report = check_security_headers(&headers(&[("x-frame-options", "DENY")]));
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.starts_with("{\"Strict-Transport-Security\":{\"present\":false"));
        assert!(json.contains(
            "\"X-Frame-Options\":{\"present\":true,\"value\":\"DENY\",\"description\":\"Clickjacking protection\"}"
        ));
        let hsts = json.find("Strict-Transport-Security").unwrap();
        let pp = json.find("Permissions-Policy").unwrap();
        assert!(hsts < pp);
    }

    #[test]
    fn test_score_percent() {
        assert_eq!(score_percent(0, 6), 0.0);
        assert_eq!(score_percent(1, 6), 16.7);
        assert_eq!(score_percent(2, 6), 33.3);
        assert_eq!(score_percent(3, 6), 50.0);
        assert_eq!(score_percent(4, 6), 66.7);
        assert_eq!(score_percent(5, 6), 83.3);
        assert_eq!(score_percent(6, 6), 100.0);
    }

    #[test]
    fn test_score_percent_zero_total() {
        assert_eq!(score_percent(0, 0), 0.0);
    }
}
