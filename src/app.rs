//! Application root: context wiring and the route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates the session store and API handle once, provides both via
//! context, runs the one-time session bootstrap, and declares every route
//! together with its role policy. Pages never construct these services
//! themselves.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::protected_route::ProtectedRoute;
use crate::net::api::Api;
use crate::pages::dashboard::{
    AdminDashboardPage, CarerDashboardPage, FamilyDashboardPage, ManagerDashboardPage,
};
use crate::pages::login::LoginPage;
use crate::pages::manager_clients::ManagerClientsPage;
use crate::pages::manager_create_client::ManagerCreateClientPage;
use crate::state::role::{ADMIN_ONLY, CARER_ONLY, FAMILY_ONLY, MANAGER_ONLY};
use crate::state::session::SessionStore;

/// Document shell rendered by an external SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: provides [`SessionStore`] and [`Api`], bootstraps the
/// session from any persisted credential, and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    provide_context(session);
    provide_context(Api::new(session));
    session.bootstrap();

    view! {
        <Title text="CareView" />
        <div class="App">
            <Router>
                <Routes fallback=|| view! { <Redirect path="/login" /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/manager/dashboard")
                        view=|| view! {
                            <ProtectedRoute allowed=MANAGER_ONLY>
                                <ManagerDashboardPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/manager/clients")
                        view=|| view! {
                            <ProtectedRoute allowed=MANAGER_ONLY>
                                <ManagerClientsPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/manager/create/client")
                        view=|| view! {
                            <ProtectedRoute allowed=MANAGER_ONLY>
                                <ManagerCreateClientPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/carer/dashboard")
                        view=|| view! {
                            <ProtectedRoute allowed=CARER_ONLY>
                                <CarerDashboardPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/family/dashboard")
                        view=|| view! {
                            <ProtectedRoute allowed=FAMILY_ONLY>
                                <FamilyDashboardPage />
                            </ProtectedRoute>
                        }
                    />
                    <Route
                        path=path!("/admin/dashboard")
                        view=|| view! {
                            <ProtectedRoute allowed=ADMIN_ONLY>
                                <AdminDashboardPage />
                            </ProtectedRoute>
                        }
                    />
                </Routes>
            </Router>
        </div>
    }
}
