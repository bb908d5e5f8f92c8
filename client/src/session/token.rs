//! Session token codec.
//!
//! A token is three dot-separated segments; the middle one is a base64 JSON
//! payload carrying `sub`, `email`, `role` and `exp` (epoch seconds). The
//! signature is never checked here, the API server does that on every request.
//!
//! ERROR HANDLING
//! ==============
//! Decoding returns `Result<_, TokenError>` and expiry checks fail closed, so a
//! bad token can only ever mean "no identity", never a panic.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::state::auth::{Role, User};

/// Why a token could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("expected 3 token segments, found {0}")]
    Segments(usize),
    #[error("payload is not valid base64: {0}")]
    Base64(String),
    #[error("payload is not valid JSON: {0}")]
    Json(String),
    #[error("payload is missing the `{0}` claim")]
    MissingClaim(&'static str),
    #[error("unknown role `{0}`")]
    UnknownRole(String),
}

/// Decoded and validated token payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    pub user: User,
    /// Expiry in epoch seconds.
    pub exp: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Subject {
    Text(String),
    Number(i64),
}

impl Subject {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<Subject>,
    email: Option<String>,
    role: Option<String>,
    exp: Option<f64>,
}

#[derive(Deserialize)]
struct RawExpiry {
    exp: Option<f64>,
}

fn payload_bytes(token: &str) -> Result<Vec<u8>, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(TokenError::Segments(segments.len()));
    };
    // Accept both alphabets and optional padding; issuers disagree.
    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| TokenError::Base64(e.to_string()))
}

/// Decode and validate every required claim.
///
/// # Errors
///
/// Returns a [`TokenError`] describing the first problem found.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    let bytes = payload_bytes(token)?;
    let raw: RawClaims = serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;

    let user_id = raw.sub.ok_or(TokenError::MissingClaim("sub"))?.into_string();
    let email = raw.email.ok_or(TokenError::MissingClaim("email"))?;
    let role_raw = raw.role.ok_or(TokenError::MissingClaim("role"))?;
    let role = Role::from_claim(&role_raw).ok_or(TokenError::UnknownRole(role_raw))?;
    let exp = raw.exp.ok_or(TokenError::MissingClaim("exp"))?;

    Ok(Claims { user: User { user_id, email, role }, exp })
}

/// Decode the user identity carried by `token`.
///
/// # Errors
///
/// Returns a [`TokenError`] if the token is malformed or incomplete.
pub fn decode(token: &str) -> Result<User, TokenError> {
    decode_claims(token).map(|claims| claims.user).inspect_err(|e| {
        log::debug!("token decode failed: {e}");
    })
}

/// Whether `token` is expired at `now` (epoch seconds).
///
/// Only the `exp` claim is consulted. Anything undecodable counts as expired.
pub fn is_expired_at(token: &str, now: f64) -> bool {
    let exp = payload_bytes(token).and_then(|bytes| {
        let raw: RawExpiry = serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;
        raw.exp.ok_or(TokenError::MissingClaim("exp"))
    });
    match exp {
        Ok(exp) => exp <= now,
        Err(e) => {
            log::debug!("token expiry check failed: {e}");
            true
        }
    }
}

/// Whether `token` is expired right now.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_secs())
}

/// Current wall-clock time in epoch seconds.
pub fn now_secs() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}
