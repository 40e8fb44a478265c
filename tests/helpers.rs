// Shared test helpers for mock servers and temporary history stores.

use std::time::Duration;

use cyberguardian::{init_client, Config, HistoryStore};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Every tracked security header with a plausible value.
#[allow(dead_code)] // Used by other test files
pub const ALL_SECURITY_HEADERS: &[(&str, &str)] = &[
    ("Strict-Transport-Security", "max-age=63072000; includeSubDomains"),
    ("X-Frame-Options", "DENY"),
    ("X-Content-Type-Options", "nosniff"),
    ("Content-Security-Policy", "default-src 'self'"),
    ("Referrer-Policy", "no-referrer"),
    ("Permissions-Policy", "camera=()"),
];

/// Starts a mock server answering `GET /` with `status` and the given headers.
///
/// `expected_calls` is verified when the server is dropped.
#[allow(dead_code)] // Used by other test files
pub async fn start_site(status: u16, headers: &[(&str, &str)], expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    let mut template = ResponseTemplate::new(status).set_body_string("<html></html>");
    for (name, value) in headers {
        template = template.insert_header(*name, *value);
    }
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(template)
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

/// HTTP client with the library defaults and a short timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_client() -> reqwest::Client {
    let config = Config {
        timeout_seconds: 2,
        ..Default::default()
    };
    init_client(&config).expect("Failed to build HTTP client")
}

/// An initialized history store inside a fresh temporary directory.
///
/// Keep the `TempDir` alive for as long as the store is used.
#[allow(dead_code)] // Used by other test files
pub async fn create_test_store() -> (TempDir, HistoryStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let store = HistoryStore::new(temp_dir.path().join("history.db"));
    store.init().await.expect("Failed to initialize history store");
    (temp_dir, store)
}

/// A local URL nothing listens on.
#[allow(dead_code)] // Used by other test files
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Upper bound for tests that must not hang on the network.
#[allow(dead_code)] // Used by other test files
pub const TEST_DEADLINE: Duration = Duration::from_secs(10);

/// Starts a mock site that waits `delay` before answering `GET /`.
#[allow(dead_code)] // Used by other test files
pub async fn start_slow_site(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Frame-Options", "DENY")
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}
