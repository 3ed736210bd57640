//! Error types for the Google+ API client.
//!
//! # Design
//! Status failures (`NotFound`, `Http`) and `Transport` describe the exchange
//! with the server. `Deserialization` means the exchange succeeded but the
//! payload did not match the expected shape: malformed JSON, an unknown
//! enum token, or an unparseable timestamp. Callers can tell the two apart
//! through [`ApiError::is_deserialization`].

use thiserror::Error;

/// Errors returned by `PlusClient` parse methods and `PlusOperations`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 for the addressed resource.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one (and not 404).
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The transport could not complete the request.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The configured base URL cannot carry path segments.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// HTTP status carried by the status-based variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_deserialization(&self) -> bool {
        matches!(self, ApiError::Deserialization(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_reported_for_status_variants() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        let err = ApiError::Http {
            status: 401,
            body: "unauthorized".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.to_string(), "HTTP 401: unauthorized");
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }

    #[test]
    fn malformed_json_is_a_deserialization_failure() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::Deserialization(source);
        assert!(err.is_deserialization());
        assert!(err.status().is_none());
        assert!(!ApiError::NotFound.is_deserialization());
    }
}
