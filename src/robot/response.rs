//! Reply envelope returned by the robot endpoint.

use serde::{Deserialize, Deserializer};

use super::RobotError;

/// The `{"errcode": ..., "errmsg": ...}` envelope every reply carries.
///
/// `errcode == 0` means the message was accepted, whatever the HTTP status.
/// A missing or `null` `errmsg` reads as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseEnvelope {
    /// Application-level result code
    #[serde(rename = "errcode")]
    pub code: i64,
    /// Diagnostic text
    #[serde(rename = "errmsg", default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl ResponseEnvelope {
    /// Parses an envelope from a raw reply body.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Decode`] if the body is not a JSON object with
    /// an integer `errcode`.
    pub fn parse(body: &[u8]) -> Result<Self, RobotError> {
        serde_json::from_slice(body).map_err(|source| RobotError::Decode {
            source,
            body: std::str::from_utf8(body).ok().map(ToString::to_string),
        })
    }

    /// Returns true if the service accepted the message.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == 0
    }

    /// Converts a nonzero code into [`RobotError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Rejected`] carrying `errmsg` when `errcode != 0`.
    pub fn into_result(self) -> Result<(), RobotError> {
        if self.is_success() {
            return Ok(());
        }
        Err(RobotError::Rejected {
            code: self.code,
            message: self.message,
        })
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
