//! REST request plumbing for the care-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds get
//! stubs that report the network as unavailable, which keeps the module
//! linkable for tests.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is folded into [`ApiError`] before it reaches a caller; a
//! 401 from any endpoint tears the session down through the [`Api`] handle.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::net::error::{self, ApiError};
use crate::net::types::{LoginResponse, MeResponse};
use crate::state::session::SessionStore;

/// HTTP method for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

const PROD_BASE: &str = "https://careview-backend.up.railway.app";

/// Production origin in release builds, the local dev proxy otherwise.
fn api_base() -> &'static str {
    if cfg!(debug_assertions) { "/api" } else { PROD_BASE }
}

/// Join a caller path onto the base URL, tolerating a leading slash.
pub(crate) fn endpoint_url(path: &str) -> String {
    format!("{}/{}", api_base(), path.trim_start_matches('/'))
}

/// `Authorization` header value for the current token. `None` when no token
/// is held so the header is omitted entirely, never sent empty.
pub(crate) fn auth_header_value(token: Option<&str>) -> Option<String> {
    match token {
        Some(token) if !token.is_empty() => Some(format!("Bearer {token}")),
        _ => None,
    }
}

/// Perform one HTTP call and classify the outcome.
///
/// A pure function of its inputs: the caller supplies the token, and no
/// session state is touched here.
pub(crate) async fn send_request(
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<&Value>,
) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = endpoint_url(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let builder = match auth_header_value(token) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        };
        let request = match body {
            Some(body) => builder.json(body).map_err(|_| ApiError::NetworkUnavailable)?,
            None => builder.build().map_err(|_| ApiError::NetworkUnavailable)?,
        };
        let response = request.send().await.map_err(|_| ApiError::NetworkUnavailable)?;
        let status = response.status();
        if response.ok() {
            let text = response.text().await.unwrap_or_default();
            if text.is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&text).map_err(|_| ApiError::ServerRejected {
                status,
                message: "Malformed response body".to_owned(),
            })
        } else {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            Err(error::classify_response(status, &body))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, token, body);
        Err(ApiError::NetworkUnavailable)
    }
}

/// Exchange credentials for a bearer token via `POST /login`.
///
/// Never attaches an `Authorization` header, and a rejection here is a bad
/// login rather than an expired session.
///
/// # Errors
///
/// `InvalidCredentials` with the server's message verbatim on a non-2xx
/// rejection, `ServerError` on a 5xx, `NetworkUnavailable` when no response
/// arrived.
pub(crate) async fn exchange_credentials(
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let payload = serde_json::json!({ "email": email, "password": password });
        let request = Request::post(&endpoint_url("login"))
            .json(&payload)
            .map_err(|_| ApiError::NetworkUnavailable)?;
        let response = request.send().await.map_err(|_| ApiError::NetworkUnavailable)?;
        let status = response.status();
        if !response.ok() {
            let body = response.json::<Value>().await.unwrap_or(Value::Null);
            return Err(error::classify_login_failure(status, &body));
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|_| ApiError::ServerRejected {
                status,
                message: "Malformed login response".to_owned(),
            })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::NetworkUnavailable)
    }
}

/// Fetch the signed-in account and role via `GET /me`.
///
/// # Errors
///
/// `SessionExpired` on a 401, otherwise the usual classification; a body
/// that does not parse as a profile is reported as `ServerRejected`.
pub(crate) async fn fetch_profile(token: &str) -> Result<MeResponse, ApiError> {
    let value = send_request(Method::Get, "me", Some(token), None).await?;
    serde_json::from_value(value).map_err(|_| ApiError::ServerRejected {
        status: 200,
        message: "Malformed profile response".to_owned(),
    })
}

/// Authorized request handle shared with pages via context.
///
/// Reads the current token from the session store for every call and applies
/// the one mandatory side effect of the error taxonomy: a 401 from any
/// endpoint logs the session out before the error is returned. The route
/// guard observes the cleared session and redirects; no navigation happens
/// here.
#[derive(Clone, Copy)]
pub struct Api {
    session: SessionStore,
}

impl Api {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// `GET` returning a deserialized payload.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`]; a payload that does not match `T` is
    /// `ServerRejected`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.call(Method::Get, path, None).await?)
    }

    /// `POST` with a JSON body, returning a deserialized payload.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`].
    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|_| ApiError::NetworkUnavailable)?;
        decode(self.call(Method::Post, path, Some(body)).await?)
    }

    /// `PUT` with a JSON body, returning a deserialized payload.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`].
    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|_| ApiError::NetworkUnavailable)?;
        decode(self.call(Method::Put, path, Some(body)).await?)
    }

    /// `DELETE`, returning the raw payload (often empty).
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.call(Method::Delete, path, None).await
    }

    /// Perform one call with the current token attached.
    ///
    /// # Errors
    ///
    /// Classified [`ApiError`]; `SessionExpired` has already torn the
    /// session down by the time the caller sees it.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let token = self.session.token();
        let result = send_request(method, path, token.as_deref(), body.as_ref()).await;
        if let Err(err) = &result {
            leptos::logging::warn!("api {method:?} {path} failed: {err}");
            if *err == ApiError::SessionExpired {
                self.session.logout();
            }
        }
        result
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::ServerRejected {
        status: 200,
        message: "Malformed response body".to_owned(),
    })
}
