//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared page chrome and the route guard while reading
//! session state from Leptos context providers.

pub mod page_header;
pub mod protected_route;
