//! Role dashboards: the landing page for each signed-in role.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role lands on its own dashboard after login. The manager variant
//! pulls live stats from the backend; the other three are thin role-branded
//! launchpads. All four sit behind the route guard, so an authenticated
//! session is always present by the time they render.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::api::Api;
use crate::net::types::{ManagerDashboard, WeekStats};
use crate::state::session::{Session, SessionStore};

/// Greeting under the dashboard title, falling back to the role label when
/// the profile carries no name.
pub(crate) fn welcome_subtitle(session: &Session, fallback: &str) -> String {
    let name = session
        .user
        .as_ref()
        .map_or(fallback, |user| user.name.as_str());
    format!("Welcome back, {name}!")
}

/// Completion rate for the stats card; the backend omits the field outside
/// active weeks.
pub(crate) fn completion_rate_label(week: &WeekStats) -> String {
    if week.completion_rate.is_empty() {
        "0%".to_owned()
    } else {
        week.completion_rate.clone()
    }
}

#[component]
pub fn ManagerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let stats = RwSignal::new(ManagerDashboard::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::errors::friendly_message;

            match api.get::<ManagerDashboard>("manager/dashboard").await {
                Ok(data) => stats.set(data),
                Err(err) => error.set(Some(friendly_message(&err))),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = api;
            loading.set(false);
        }
    };

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load();
    });

    // Quick actions navigate through a signal; the nested view closures only
    // capture `Copy` values.
    let go_to = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(path) = go_to.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Manager Dashboard"
                subtitle=welcome_subtitle(&session.get_untracked(), "Manager")
            />
            <div class="dashboard-container">
                <div class="dashboard-inner">
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="loading-container">
                                <div class="loading-content">
                                    <div class="loading-spinner"></div>
                                    <p class="loading-text">"Loading dashboard..."</p>
                                </div>
                            </div>
                        }
                    >
                        <Show
                            when=move || error.get().is_none()
                            fallback=move || view! {
                                <div class="error-container">
                                    <div class="error-content">
                                        <p class="error-message">
                                            {move || error.get().unwrap_or_default()}
                                        </p>
                                        <button class="btn btn-primary" on:click=move |_| load()>
                                            "Retry"
                                        </button>
                                    </div>
                                </div>
                            }
                        >
                            <div class="stats-grid">
                                <div class="stat-card">
                                    <dl>
                                        <dt class="stat-label">"Total Clients"</dt>
                                        <dd class="stat-value">
                                            {move || stats.get().basic_stats.clients}
                                        </dd>
                                    </dl>
                                </div>
                                <div class="stat-card">
                                    <dl>
                                        <dt class="stat-label">"Active Carers"</dt>
                                        <dd class="stat-value">
                                            {move || stats.get().basic_stats.carers}
                                        </dd>
                                    </dl>
                                </div>
                            </div>

                            <div class="performance-card">
                                <h3 class="performance-title">"This Week's Performance"</h3>
                                <div class="performance-grid">
                                    <div class="performance-item">
                                        <div class="performance-value performance-value-primary">
                                            {move || completion_rate_label(&stats.get().this_week)}
                                        </div>
                                        <div class="performance-label">"Completion Rate"</div>
                                    </div>
                                    <div class="performance-item">
                                        <div class="performance-value performance-value-success">
                                            {move || stats.get().this_week.completed_visits}
                                        </div>
                                        <div class="performance-label">"Completed Visits"</div>
                                    </div>
                                    <div class="performance-item">
                                        <div class="performance-value performance-value-neutral">
                                            {move || stats.get().this_week.total_visits}
                                        </div>
                                        <div class="performance-label">"Total Visits"</div>
                                    </div>
                                </div>
                            </div>

                            <div class="quick-actions-section">
                                <h3 class="section-title">"Quick Actions"</h3>
                                <div class="quick-actions-grid">
                                    <button
                                        class="quick-action-card"
                                        on:click=move |_| go_to.set(Some("/manager/clients"))
                                    >
                                        <div class="quick-action-title">"Manage Clients"</div>
                                        <div class="quick-action-desc">
                                            "View and edit client information"
                                        </div>
                                    </button>
                                    <button
                                        class="quick-action-card"
                                        on:click=move |_| go_to.set(Some("/manager/create/client"))
                                    >
                                        <div class="quick-action-title">"Add New Client"</div>
                                        <div class="quick-action-desc">
                                            "Register a new care-home client"
                                        </div>
                                    </button>
                                </div>
                            </div>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn CarerDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Carer Dashboard"
                subtitle=welcome_subtitle(&session.get_untracked(), "Carer")
            />
            <div class="dashboard-container">
                <div class="dashboard-inner">
                    <div class="info-card">
                        <h3 class="section-title">"Your Day"</h3>
                        <p class="info-text">
                            "Your assigned clients, schedules, and visit logs are managed by your care team."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FamilyDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Family Dashboard"
                subtitle=welcome_subtitle(&session.get_untracked(), "Family member")
            />
            <div class="dashboard-container">
                <div class="dashboard-inner">
                    <div class="info-card">
                        <h3 class="section-title">"Your Loved Ones"</h3>
                        <p class="info-text">
                            "Visit updates for your family members are recorded by the care team after each visit."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Admin Dashboard"
                subtitle=welcome_subtitle(&session.get_untracked(), "Admin")
            />
            <div class="dashboard-container">
                <div class="dashboard-inner">
                    <div class="info-card">
                        <h3 class="section-title">"Administration"</h3>
                        <p class="info-text">
                            "Manager accounts and activity logs are administered from this console."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
