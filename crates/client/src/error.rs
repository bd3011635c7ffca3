//! Error types for the backend API client.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never reached the server (refused, DNS, reset).
    #[error("cannot reach backend at {base_url}: {message}")]
    Connectivity {
        /// Backend the request was aimed at.
        base_url: String,
        /// Transport error text.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{body}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A success response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(String),
}

impl ApiError {
    /// Text shown to the user when an action fails.
    ///
    /// For `Request` this is the server's body verbatim, falling back to the
    /// status code when the body is empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { status, body } if body.trim().is_empty() => {
                format!("HTTP {status}")
            }
            other => other.to_string(),
        }
    }

    /// Whether the failure happened before the server answered.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }
}
