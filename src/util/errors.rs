//! User-facing wording for API failures.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render these strings in banners and toasts. Classification lives in
//! `net::error`; this module only decides presentation, and nothing here
//! retries anything; a manual retry action is always the caller's call.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use crate::net::error::ApiError;

/// Map a classified failure to the message shown to the user.
pub fn friendly_message(err: &ApiError) -> String {
    match err {
        ApiError::NetworkUnavailable => {
            "Unable to connect. Please check your internet connection.".to_owned()
        }
        ApiError::SessionExpired => "Your session has expired. Please log in again.".to_owned(),
        ApiError::InvalidCredentials { message } => message.clone(),
        ApiError::ServerRejected { message, .. } => {
            if message.starts_with("Schedule conflict:") {
                format!("{message}\nPlease choose a different time slot.")
            } else {
                message.clone()
            }
        }
        ApiError::ServerError { .. } => "Something went wrong. Please try again.".to_owned(),
    }
}
