//! Networking modules for the care-management REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs HTTP calls with the session token attached, `error`
//! classifies every failure into the shared taxonomy, and `types` defines the
//! wire schema the client reads.

pub mod api;
pub mod error;
pub mod types;
