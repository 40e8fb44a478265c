//! Transport error categorization and message formatting.

use std::error::Error as StdError;

use super::types::TransportErrorKind;

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Timeouts are checked before connect errors because a connect timeout
/// reports both.
pub fn categorize_transport_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_builder() {
        TransportErrorKind::Builder
    } else if error.is_redirect() {
        TransportErrorKind::Redirect
    } else if error.is_timeout() {
        TransportErrorKind::Timeout
    } else if error.is_connect() {
        TransportErrorKind::Connect
    } else if error.is_request() {
        TransportErrorKind::Request
    } else if error.is_body() {
        TransportErrorKind::Body
    } else if error.is_decode() {
        TransportErrorKind::Decode
    } else {
        TransportErrorKind::Other
    }
}

/// Renders an error and its source chain as a single line.
///
/// reqwest's top-level message ("error sending request for url ...") hides the
/// actual cause (DNS failure, connection refused) in the source chain.
pub fn describe_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        msg: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.msg)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_describe_error_chain_joins_sources() {
        let err = Layer {
            msg: "error sending request",
            source: Some(Box::new(Layer {
                msg: "client error (Connect)",
                source: Some(Box::new(Layer {
                    msg: "Connection refused",
                    source: None,
                })),
            })),
        };
        assert_eq!(
            describe_error_chain(&err),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn test_describe_error_chain_skips_repeated_text() {
        let err = Layer {
            msg: "timed out",
            source: Some(Box::new(Layer {
                msg: "timed out",
                source: None,
            })),
        };
        assert_eq!(describe_error_chain(&err), "timed out");
    }

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let err = client
            .get("https://exa mple.com:notaport")
            .send()
            .await
            .expect_err("malformed URL must fail");
        assert_eq!(
            categorize_transport_error(&err),
            TransportErrorKind::Builder
        );
    }
}
