// Analyzer tests against a local mock site.

mod helpers;

use std::time::{Duration, Instant};

use cyberguardian::scanner::normalize_url;
use cyberguardian::{analyze_site, init_client, scan_and_record, Config, ScanResult};
use helpers::{
    create_test_store, refused_url, start_site, start_slow_site, test_client,
    ALL_SECURITY_HEADERS, TEST_DEADLINE,
};

#[tokio::test]
async fn test_site_without_security_headers_scores_zero() {
    let server = start_site(200, &[("Server", "mock")], 1).await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("scan should complete");

    assert_eq!(report.status_code, 200);
    assert_eq!(report.score_percent, 0.0);
    assert_eq!(report.security_headers.len(), 6);
    assert_eq!(report.security_headers.present_count(), 0);
    assert_eq!(report.security_headers.missing().count(), 6);
    assert!(report
        .security_headers
        .iter()
        .all(|finding| finding.value.is_none()));
}

#[tokio::test]
async fn test_site_with_half_the_headers_scores_fifty() {
    let server = start_site(
        200,
        &[
            ("Strict-Transport-Security", "max-age=31536000"),
            ("X-Frame-Options", "SAMEORIGIN"),
            ("X-Content-Type-Options", "nosniff"),
        ],
        1,
    )
    .await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("scan should complete");

    assert_eq!(report.score_percent, 50.0);
    let hsts = report
        .security_headers
        .get("Strict-Transport-Security")
        .expect("HSTS entry is always present in the report");
    assert!(hsts.present);
    assert_eq!(hsts.value.as_deref(), Some("max-age=31536000"));
    let csp = report
        .security_headers
        .get("Content-Security-Policy")
        .expect("CSP entry is always present in the report");
    assert!(!csp.present);
    assert_eq!(csp.value, None);
}

#[tokio::test]
async fn test_site_with_all_headers_scores_hundred() {
    let server = start_site(200, ALL_SECURITY_HEADERS, 1).await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("scan should complete");

    assert_eq!(report.score_percent, 100.0);
    assert_eq!(report.security_headers.present_count(), 6);
    assert_eq!(
        report
            .security_headers
            .get("permissions-policy")
            .and_then(|f| f.value.as_deref()),
        Some("camera=()")
    );
}

#[tokio::test]
async fn test_header_names_match_case_insensitively() {
    let server = start_site(200, &[("x-frame-options", "DENY")], 1).await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("scan should complete");

    let finding = report
        .security_headers
        .get("X-Frame-Options")
        .expect("entry exists");
    assert!(finding.present);
    assert_eq!(finding.value.as_deref(), Some("DENY"));
    assert_eq!(report.score_percent, 16.7);
}

#[tokio::test]
async fn test_non_success_status_is_still_scored() {
    let server = start_site(404, &[("X-Content-Type-Options", "nosniff")], 1).await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("HTTP errors are not scan failures");

    assert_eq!(report.status_code, 404);
    assert_eq!(report.security_headers.present_count(), 1);
}

#[tokio::test]
async fn test_repeated_scans_are_identical() {
    let server = start_site(200, &[("Referrer-Policy", "no-referrer")], 2).await;
    let client = test_client();

    let first = analyze_site(&client, &server.uri()).await;
    let second = analyze_site(&client, &server.uri()).await;

    let first = first.report().expect("first scan completes");
    let second = second.report().expect("second scan completes");
    assert_eq!(first.score_percent, second.score_percent);
    assert_eq!(first.security_headers, second.security_headers);
}

#[tokio::test]
async fn test_plain_http_url_is_not_secure() {
    let server = start_site(200, &[], 1).await;
    let client = test_client();

    let result = analyze_site(&client, &server.uri()).await;
    let report = result.report().expect("scan should complete");

    assert!(report.url.starts_with("http://"));
    assert!(!report.secure);
}

#[tokio::test]
async fn test_unreachable_host_returns_error() {
    let client = test_client();

    let result = analyze_site(&client, &refused_url()).await;

    assert!(!result.is_completed());
    let error = result.error().expect("failed scan carries an error");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn test_failed_scan_json_has_only_error() {
    let client = test_client();

    let result = analyze_site(&client, &refused_url()).await;
    let json = serde_json::to_value(&result).expect("serialize scan result");

    let object = json.as_object().expect("result serializes as an object");
    assert_eq!(object.len(), 1);
    assert!(object.get("error").and_then(|e| e.as_str()).is_some());
}

#[tokio::test]
async fn test_slow_site_times_out_and_is_not_recorded() {
    let server = start_slow_site(Duration::from_secs(3)).await;
    let config = Config {
        timeout_seconds: 1,
        ..Default::default()
    };
    let client = init_client(&config).expect("Failed to build HTTP client");
    let (_temp_dir, store) = create_test_store().await;

    let started = Instant::now();
    let result = tokio::time::timeout(
        TEST_DEADLINE,
        scan_and_record(&client, &store, &server.uri()),
    )
    .await
    .expect("scan must be bounded by the client timeout")
    .expect("timeouts are not store errors");

    assert!(started.elapsed() < Duration::from_secs(3));
    assert!(!result.is_completed());
    let error = result.error().expect("timed out scan carries an error");
    assert!(!error.is_empty());
    assert!(store.list_recent(20).await.expect("list history").is_empty());
}

#[tokio::test]
async fn test_scan_and_record_stores_completed_scan() {
    let server = start_site(200, ALL_SECURITY_HEADERS, 1).await;
    let client = test_client();
    let (_temp_dir, store) = create_test_store().await;

    let result = scan_and_record(&client, &store, &server.uri())
        .await
        .expect("store should accept the record");
    assert!(matches!(result, ScanResult::Completed(_)));

    let records = store.list_recent(20).await.expect("list history");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, server.uri());
    assert_eq!(records[0].score, 100);
    assert!(!records[0].secure);
}

#[tokio::test]
async fn test_scan_and_record_skips_failed_scan() {
    let client = test_client();
    let (_temp_dir, store) = create_test_store().await;

    let result = scan_and_record(&client, &store, &refused_url())
        .await
        .expect("failed scans are not store errors");
    assert!(result.error().is_some());

    let records = store.list_recent(20).await.expect("list history");
    assert!(records.is_empty());
}

#[test]
fn test_normalize_url_prefixes_bare_hosts() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("https://example.com"), "https://example.com");
}
