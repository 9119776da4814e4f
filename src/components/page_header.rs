//! Shared header bar for authenticated pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Page header with title, subtitle, an optional back link, and the logout
/// button. Logging out only clears the session; the route guard observes the
/// change and redirects.
#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(into)] subtitle: String,
    #[prop(optional, strip_option)] back_href: Option<&'static str>,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let back = back_href.map(|href| {
        let navigate = navigate.clone();
        view! {
            <button
                class="btn btn-back"
                on:click=move |_| navigate(href, NavigateOptions::default())
            >
                "← Back"
            </button>
        }
    });

    view! {
        <div class="dashboard-header">
            <div class="dashboard-header-container">
                <div class="dashboard-header-content">
                    <div class="header-left">{back}</div>
                    <div class="header-title-section">
                        <h1 class="dashboard-title">{title}</h1>
                        <p class="dashboard-subtitle">{subtitle}</p>
                    </div>
                    <div class="header-right">
                        <button class="btn btn-danger" on:click=move |_| session.logout()>
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
