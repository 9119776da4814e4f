//! Typed API failures and response classification.
//!
//! ERROR HANDLING
//! ==============
//! Every transport or protocol failure is folded into [`ApiError`] before it
//! leaves the `net` layer. Callers always receive a `Result`; nothing throws
//! past this boundary. `SessionExpired` is the one kind with a mandatory side
//! effect (session teardown), applied by the `Api` handle and the session
//! store rather than here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;
use thiserror::Error;

/// Classified outcome of a failed API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The login endpoint rejected the supplied credentials. The message is
    /// the server's own text, passed through verbatim.
    #[error("{message}")]
    InvalidCredentials { message: String },
    /// Any endpoint answered 401: the token is expired or invalid.
    #[error("Session expired")]
    SessionExpired,
    /// The request produced no response at all.
    #[error("Unable to connect")]
    NetworkUnavailable,
    /// A non-2xx, non-401, non-5xx response.
    #[error("{message}")]
    ServerRejected { status: u16, message: String },
    /// The server failed with a 5xx.
    #[error("{message}")]
    ServerError { status: u16, message: String },
}

impl ApiError {
    /// Status code of the response, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::ServerRejected { status, .. } | ApiError::ServerError { status, .. } => {
                Some(*status)
            }
            ApiError::SessionExpired => Some(401),
            _ => None,
        }
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The backend's canonical error shape is `{"detail": "..."}`; some endpoints
/// emit `{"error": "...", "details": ["...", ...]}` instead. Anything else
/// falls back to `HTTP <status>`.
pub(crate) fn extract_error_message(status: u16, body: &Value) -> String {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return detail.to_owned();
    }
    if let Some(error) = body.get("error").and_then(Value::as_str) {
        return error.to_owned();
    }
    if let Some(details) = body.get("details").and_then(Value::as_array) {
        let parts: Vec<&str> = details.iter().filter_map(Value::as_str).collect();
        if !parts.is_empty() {
            return parts.join("; ");
        }
    }
    format!("HTTP {status}")
}

/// Classify a non-2xx response from an authorized endpoint.
pub(crate) fn classify_response(status: u16, body: &Value) -> ApiError {
    if status == 401 {
        return ApiError::SessionExpired;
    }
    let message = extract_error_message(status, body);
    if status >= 500 {
        ApiError::ServerError { status, message }
    } else {
        ApiError::ServerRejected { status, message }
    }
}

/// Classify a non-2xx response from the credential exchange.
///
/// A 401 here means the password was wrong, not that a session expired, so
/// the generic 401 rule does not apply.
pub(crate) fn classify_login_failure(status: u16, body: &Value) -> ApiError {
    let message = extract_error_message(status, body);
    if status >= 500 {
        ApiError::ServerError { status, message }
    } else {
        ApiError::InvalidCredentials { message }
    }
}
