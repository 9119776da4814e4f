//! Shared client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated identity and is the only writer of the
//! persisted credential; `role` defines the role vocabulary and the static
//! route-access sets.

pub mod role;
pub mod session;
