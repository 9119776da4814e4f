//! User roles and the static route-access policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend assigns every account exactly one role. Routes declare which
//! roles may view them; the guard in `components::protected_route` checks
//! the signed-in role against those sets.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

/// Category of signed-in user, fixed by the backend at account creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
    Carer,
    Family,
}

impl Role {
    /// Lowercase wire string, matching the `role` field of the profile
    /// endpoint and the persisted credential.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Carer => "carer",
            Role::Family => "family",
        }
    }

    /// Landing route after login for this role.
    pub fn dashboard_path(self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role string from the profile endpoint that no known role matches.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "carer" => Ok(Role::Carer),
            "family" => Ok(Role::Family),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Role sets wired into the route table in `app`.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const MANAGER_ONLY: &[Role] = &[Role::Manager];
pub const CARER_ONLY: &[Role] = &[Role::Carer];
pub const FAMILY_ONLY: &[Role] = &[Role::Family];

/// True when `allowed` is unrestricted or contains `role`.
pub fn role_permitted(role: Role, allowed: &[Role]) -> bool {
    allowed.is_empty() || allowed.contains(&role)
}

/// Human-readable listing of a route's allowed roles, e.g. `"manager or admin"`.
pub fn required_roles_label(allowed: &[Role]) -> String {
    allowed
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}
