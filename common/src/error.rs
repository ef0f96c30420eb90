//! Error type shared by the transport and the request orchestrator.

use thiserror::Error;

/// Result alias for news widget operations.
pub type Result<T> = std::result::Result<T, NewsError>;

/// Everything that can go wrong between building a request and holding a
/// parsed article list.
///
/// The `Display` text is what ends up in the toast notification, so it is
/// phrased for the reader of the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewsError {
    /// The API answered with a status outside `200..=299`.
    #[error("Request failed with status {status}{}", reason_suffix(.message))]
    Http {
        status: u16,
        /// Reason reported in the API's error body, when it sent one.
        message: Option<String>,
    },

    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// A 2xx body that is not the JSON shape we expect.
    #[error("Unexpected response from the news service: {0}")]
    Decode(String),

    /// The endpoint could not be assembled from the configured base URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

fn reason_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

impl NewsError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            NewsError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for NewsError {
    fn from(err: url::ParseError) -> Self {
        NewsError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for NewsError {
    fn from(err: serde_json::Error) -> Self {
        NewsError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_text_contains_status() {
        let err = NewsError::Http {
            status: 426,
            message: None,
        };
        assert_eq!(err.to_string(), "Request failed with status 426");
        assert_eq!(err.status(), Some(426));
    }

    #[test]
    fn http_error_text_appends_reason() {
        let err = NewsError::Http {
            status: 401,
            message: Some("Your API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status 401: Your API key is invalid."
        );
    }

    #[test]
    fn network_error_has_no_status() {
        assert_eq!(NewsError::Network("offline".into()).status(), None);
    }
}
