//! Security header table.
//!
//! The six response headers a scan looks for, each with a short description of
//! the protection it enables. Order here is the order of every report.

/// A tracked security header and what it protects against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityHeader {
    /// Canonical header name
    pub name: &'static str,
    /// Human-readable rationale shown in reports
    pub description: &'static str,
}

/// Strict-Transport-Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";
/// Permissions-Policy header
pub const HEADER_PERMISSIONS_POLICY: &str = "Permissions-Policy";

/// List of security headers checked by every scan.
/// The score is the share of these found in a response.
pub const SECURITY_HEADERS: &[SecurityHeader] = &[
    SecurityHeader {
        name: HEADER_STRICT_TRANSPORT_SECURITY,
        description: "Forces HTTPS",
    },
    SecurityHeader {
        name: HEADER_X_FRAME_OPTIONS,
        description: "Clickjacking protection",
    },
    SecurityHeader {
        name: HEADER_X_CONTENT_TYPE_OPTIONS,
        description: "Prevents MIME sniffing",
    },
    SecurityHeader {
        name: HEADER_CONTENT_SECURITY_POLICY,
        description: "Blocks dangerous scripts",
    },
    SecurityHeader {
        name: HEADER_REFERRER_POLICY,
        description: "Controls referrer information",
    },
    SecurityHeader {
        name: HEADER_PERMISSIONS_POLICY,
        description: "Controls browser permission grants",
    },
];
