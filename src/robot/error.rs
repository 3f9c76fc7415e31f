//! Error types for webhook delivery.

use thiserror::Error;

/// Error type for HTTP operations.
///
/// Describes what went wrong without dictating recovery strategy.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and failures while reading the response body.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error returned by a failed send.
///
/// Every failure is handed back to the caller; nothing is retried internally.
/// Use [`RobotError::is_retryable`] to drive a caller-side retry policy.
#[derive(Debug, Error)]
pub enum RobotError {
    /// The message could not be encoded as a JSON object.
    #[error("Failed to serialize message: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request could not be delivered or the reply could not be read.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The reply body was not a valid response envelope.
    #[error("Failed to decode robot response: {source}")]
    Decode {
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
        /// Raw body text, if it was valid UTF-8
        body: Option<String>,
    },

    /// The remote service answered with a nonzero `errcode`.
    #[error("Robot send failed: {message} (errcode {code})")]
    Rejected {
        /// Application-level error code reported by the service
        code: i64,
        /// Diagnostic text reported by the service
        message: String,
    },

    /// The signing key was rejected by the MAC implementation.
    #[error("Failed to sign request: invalid signing key")]
    Signing,
}

impl RobotError {
    /// Returns true if the failure is potentially transient.
    ///
    /// Only network-level failures qualify. Remote rejections are reported as
    /// not retryable because the meaning of each `errcode` is owned by the
    /// remote service.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(HttpError::Connection(_) | HttpError::Timeout) => true,
            Self::Transport(HttpError::InvalidUrl(_))
            | Self::Serialization(_)
            | Self::Decode { .. }
            | Self::Rejected { .. }
            | Self::Signing => false,
        }
    }

    /// Returns the remote `errcode` if this is a rejection.
    #[must_use]
    pub const fn remote_code(&self) -> Option<i64> {
        match self {
            Self::Rejected { code, .. } => Some(*code),
            _ => None,
        }
    }
}
