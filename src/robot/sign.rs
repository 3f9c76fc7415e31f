//! Time-bound HMAC request signing.
//!
//! When a robot has a secret, every request URL gets a
//! `&timestamp=<ms>&sign=<signature>` suffix. The signature is
//! `base64(HMAC-SHA256(key = secret, msg = "<ms>\n<secret>"))`, form-query
//! escaped. The receiving service rejects timestamps too far from its own
//! clock, so a captured URL stops working after a short window.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::RobotError;

type HmacSha256 = Hmac<Sha256>;

/// Computes the base64 signature for `timestamp_millis` under `secret`.
///
/// # Errors
///
/// Returns [`RobotError::Signing`] if the MAC rejects the key.
pub fn signature(secret: &str, timestamp_millis: u128) -> Result<String, RobotError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| RobotError::Signing)?;
    mac.update(format!("{timestamp_millis}\n{secret}").as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Builds the query suffix appended to the endpoint URL.
///
/// The suffix always starts with `&`; the endpoint is expected to carry its
/// own query string already (typically `?access_token=...`).
///
/// # Errors
///
/// Returns [`RobotError::Signing`] if the MAC rejects the key.
pub fn signed_suffix(secret: &str, timestamp_millis: u128) -> Result<String, RobotError> {
    let sign = signature(secret, timestamp_millis)?;
    let encoded: String = url::form_urlencoded::byte_serialize(sign.as_bytes()).collect();
    Ok(format!("&timestamp={timestamp_millis}&sign={encoded}"))
}
