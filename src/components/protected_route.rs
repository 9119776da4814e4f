//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route in `app` wraps its page in [`ProtectedRoute`]. The
//! decision is recomputed from the session on every render, never persisted,
//! and evaluated in fixed order: loading, then authentication, then role.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::role::{Role, required_roles_label, role_permitted};
use crate::state::session::{Session, SessionStore};

/// Outcome of checking a navigation against the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session bootstrap still in flight; show a placeholder, decide nothing.
    Loading,
    /// Not signed in; replace-navigate to the login page.
    RedirectToLogin,
    /// Signed in, but this route does not admit the user's role.
    Forbidden {
        current: Role,
        required: &'static [Role],
    },
    /// Render the requested view.
    Authorized,
}

/// Evaluate access for a route admitting `allowed` roles.
///
/// An empty `allowed` slice means any authenticated role may view the route.
pub fn route_decision(session: &Session, allowed: &'static [Role]) -> RouteDecision {
    if session.loading {
        return RouteDecision::Loading;
    }
    if !session.authenticated {
        return RouteDecision::RedirectToLogin;
    }
    match session.role {
        Some(role) if role_permitted(role, allowed) => RouteDecision::Authorized,
        Some(role) => RouteDecision::Forbidden {
            current: role,
            required: allowed,
        },
        None => RouteDecision::RedirectToLogin,
    }
}

/// Gate `children` behind authentication and the route's allowed roles.
#[component]
pub fn ProtectedRoute(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let navigate = use_navigate();
    Effect::new(move || {
        if route_decision(&session.get(), allowed) == RouteDecision::RedirectToLogin {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    move || match route_decision(&session.get(), allowed) {
        RouteDecision::Loading => view! {
            <div class="loading-container">
                <div class="loading-content">
                    <div class="loading-spinner"></div>
                    <p class="loading-text">"Loading..."</p>
                </div>
            </div>
        }
        .into_any(),
        RouteDecision::RedirectToLogin => view! {
            <div class="loading-container">
                <p class="loading-text">"Redirecting to login..."</p>
            </div>
        }
        .into_any(),
        RouteDecision::Forbidden { current, required } => view! {
            <div class="denied-container">
                <div class="denied-content">
                    <h1 class="denied-title">"Access Denied"</h1>
                    <p class="denied-text">"You don't have permission to view this page."</p>
                    <p class="denied-role">"Your role: " {current.as_str()}</p>
                    <p class="denied-required">"Required: " {required_roles_label(required)}</p>
                </div>
            </div>
        }
        .into_any(),
        RouteDecision::Authorized => children().into_any(),
    }
}
