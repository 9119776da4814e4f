//! Session state: the single source of truth for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and provided via context. Pages and the route guard
//! read the reactive session; only the operations here mutate it or the
//! persisted credential. All mutation happens on the single UI thread, so the
//! invariant to preserve is strictly ordered writes, not mutual exclusion:
//! the `epoch` counter rejects completions from a superseded session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::UserAccount;
use crate::state::role::Role;
use crate::util::credentials;

/// Authentication state for the current browser user.
///
/// `authenticated` is true only while a token and role are present and the
/// last profile fetch succeeded. `loading` is true only during an in-flight
/// login or bootstrap fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserAccount>,
    pub role: Option<Role>,
    pub authenticated: bool,
    pub loading: bool,
    /// Bumped whenever the session is replaced or torn down, so responses
    /// belonging to a superseded session cannot apply.
    pub epoch: u64,
}

impl Session {
    /// Install a freshly issued token, discarding any previous identity.
    pub(crate) fn install_token(&mut self, token: String) {
        self.token = Some(token);
        self.user = None;
        self.role = None;
        self.authenticated = false;
        self.epoch += 1;
    }

    /// Install the fetched profile and mark the session authenticated.
    pub(crate) fn install_profile(&mut self, user: UserAccount, role: Role) {
        self.user = Some(user);
        self.role = Some(role);
        self.authenticated = true;
    }

    /// Restore a persisted credential ahead of the bootstrap profile fetch.
    /// The stored role is a hint only; `authenticated` stays false until the
    /// profile endpoint confirms the token.
    pub(crate) fn hydrate_from(&mut self, saved: credentials::PersistedCredential) {
        self.token = Some(saved.token);
        self.role = saved.role;
        self.authenticated = false;
        self.loading = true;
        self.epoch += 1;
    }

    /// Reset to the signed-out state.
    pub(crate) fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.role = None;
        self.authenticated = false;
        self.loading = false;
        self.epoch += 1;
    }
}

/// Login and session failures surfaced to the login page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The server rejected the credentials; the message is its own text.
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("Session expired")]
    SessionExpired,
    #[error("Unable to connect")]
    NetworkUnavailable,
    #[error("{0}")]
    ServerError(String),
    /// The credential exchange succeeded but the profile could not be read;
    /// the session has been torn down.
    #[error("Could not load your profile")]
    ProfileUnavailable,
}

impl AuthError {
    fn from_login_failure(err: ApiError) -> Self {
        match err {
            ApiError::InvalidCredentials { message } => AuthError::InvalidCredentials(message),
            ApiError::NetworkUnavailable => AuthError::NetworkUnavailable,
            ApiError::SessionExpired => AuthError::SessionExpired,
            ApiError::ServerError { message, .. } | ApiError::ServerRejected { message, .. } => {
                AuthError::ServerError(message)
            }
        }
    }

    fn from_profile_failure(err: ApiError) -> Self {
        match err {
            ApiError::SessionExpired => AuthError::SessionExpired,
            ApiError::NetworkUnavailable => AuthError::NetworkUnavailable,
            _ => AuthError::ProfileUnavailable,
        }
    }
}

/// Shared handle over the reactive session.
///
/// `Copy`, so components take it by value from context. The handle is the
/// only writer of both the in-memory session and the persisted credential.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(Session::default()),
        }
    }

    /// Reactive read of the whole session.
    pub fn get(&self) -> Session {
        self.state.get()
    }

    /// Current token without registering a reactive dependency.
    pub fn token(&self) -> Option<String> {
        self.state.get_untracked().token
    }

    /// Exchange credentials for a token, then load the profile.
    ///
    /// The profile fetch is strictly sequenced after a successful exchange;
    /// they are never in flight together. `loading` clears on every exit.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] with the server's message verbatim
    /// when the exchange is rejected (persisted state untouched), otherwise
    /// whatever the profile fetch surfaced.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.state.update(|s| s.loading = true);
        let result = self.exchange_and_hydrate(email, password).await;
        self.state.update(|s| s.loading = false);
        result
    }

    async fn exchange_and_hydrate(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let login = api::exchange_credentials(email, password)
            .await
            .map_err(AuthError::from_login_failure)?;
        credentials::store_token(&login.access_token);
        self.state.update(|s| s.install_token(login.access_token));
        self.refresh_profile().await
    }

    /// Fetch `GET /me` and install user, role, and `authenticated`.
    ///
    /// A no-op `Ok` when no token is held. Any failure tears the session
    /// down (an unreadable profile means the session cannot be trusted),
    /// unless a newer session has already replaced the one this fetch
    /// belongs to.
    ///
    /// # Errors
    ///
    /// [`AuthError::SessionExpired`] on a 401, [`AuthError::NetworkUnavailable`]
    /// when no response arrived, [`AuthError::ProfileUnavailable`] for
    /// anything else (including an unknown role string).
    pub async fn refresh_profile(&self) -> Result<(), AuthError> {
        let snapshot = self.state.get_untracked();
        let Some(token) = snapshot.token else {
            return Ok(());
        };
        let epoch = snapshot.epoch;
        match api::fetch_profile(&token).await {
            Ok(me) => {
                let Ok(role) = me.role.parse::<Role>() else {
                    leptos::logging::warn!("profile returned unknown role: {}", me.role);
                    self.teardown_if_current(epoch);
                    return Err(AuthError::ProfileUnavailable);
                };
                if self.state.get_untracked().epoch != epoch {
                    // Superseded by a logout or a newer login while in
                    // flight; drop the result.
                    return Ok(());
                }
                credentials::store_role(role);
                self.state.update(|s| s.install_profile(me.user, role));
                Ok(())
            }
            Err(err) => {
                self.teardown_if_current(epoch);
                Err(AuthError::from_profile_failure(err))
            }
        }
    }

    /// Clear the in-memory session and erase the persisted credential.
    ///
    /// Synchronous, idempotent, and purely local: no network call is made.
    pub fn logout(&self) {
        credentials::clear();
        self.state.update(Session::clear);
    }

    /// Attempt to restore a session from the persisted credential.
    ///
    /// Called once at application start. Leaves the empty session untouched
    /// when nothing is persisted; otherwise installs the saved token and
    /// spawns the confirming profile fetch.
    pub fn bootstrap(&self) {
        let Some(saved) = credentials::load() else {
            return;
        };
        self.state.update(|s| s.hydrate_from(saved));
        #[cfg(feature = "hydrate")]
        {
            let store = *self;
            leptos::task::spawn_local(async move {
                let _ = store.refresh_profile().await;
                store.state.update(|s| s.loading = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        self.state.update(|s| s.loading = false);
    }

    fn teardown_if_current(&self, epoch: u64) {
        if self.state.get_untracked().epoch == epoch {
            self.logout();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
