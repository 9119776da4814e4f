//! Persisted credential storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two fixed localStorage keys hold the bearer token and role across page
//! reloads. The session store is the only caller; pages never touch these
//! keys directly. The user profile itself is never persisted; bootstrap
//! re-fetches it every time.

use crate::state::role::Role;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "careview_token";
#[cfg(feature = "hydrate")]
const ROLE_KEY: &str = "careview_role";

/// Durable subset of the session surviving page reloads.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PersistedCredential {
    pub token: String,
    /// Role as last persisted. Loaded as a hint only; `authenticated` is
    /// never derived from it.
    pub role: Option<Role>,
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load the persisted credential, if any.
pub(crate) fn load() -> Option<PersistedCredential> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        let role = storage
            .get_item(ROLE_KEY)
            .ok()
            .flatten()
            .and_then(|raw| raw.parse().ok());
        Some(PersistedCredential { token, role })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the bearer token.
pub(crate) fn store_token(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Persist the role alongside the existing token.
pub(crate) fn store_role(role: Role) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(ROLE_KEY, role.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = role;
    }
}

/// Erase both persisted keys. Safe to call when nothing is stored.
pub(crate) fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(ROLE_KEY);
        }
    }
}
