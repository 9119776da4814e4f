//! Wire DTOs for the care-management REST API.
//!
//! DESIGN
//! ======
//! Only the payloads the auth core and the shipped pages actually read are
//! typed here. Everything else the backend returns stays an opaque
//! `serde_json::Value` passed through the `Api` handle.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Successful credential exchange from `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for all subsequent authorized calls.
    pub access_token: String,
}

/// Profile payload from `GET /me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    /// The signed-in account.
    pub user: UserAccount,
    /// Wire role string; parsed into [`crate::state::role::Role`] by the
    /// session store.
    pub role: String,
}

/// An authenticated account as returned by the profile endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    /// Display name.
    pub name: String,
    pub email: String,
}

/// Listing payload from `GET manager/clients`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ClientListResponse {
    pub clients: Vec<ClientRecord>,
}

/// A care-home client as shown in manager list views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub room: Option<String>,
    #[serde(default)]
    pub support_needs: Option<String>,
}

/// Body for `POST manager/create/client`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub age: i64,
    pub room: String,
    pub date_of_birth: String,
    pub support_needs: String,
}

/// Stats payload from `GET manager/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ManagerDashboard {
    #[serde(default)]
    pub basic_stats: BasicStats,
    #[serde(default)]
    pub this_week: WeekStats,
}

/// Headline counts for the manager dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BasicStats {
    #[serde(default)]
    pub clients: i64,
    #[serde(default)]
    pub carers: i64,
}

/// Visit performance for the current week.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WeekStats {
    /// Preformatted percentage string, e.g. `"87%"`.
    #[serde(default)]
    pub completion_rate: String,
    #[serde(default)]
    pub completed_visits: i64,
    #[serde(default)]
    pub total_visits: i64,
}
