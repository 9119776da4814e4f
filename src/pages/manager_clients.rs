//! Manager client list: every client in the care home.
//!
//! SYSTEM CONTEXT
//! ==============
//! Manager-only route. Fetches the client roster once on mount and renders
//! one of four states: loading, error with a retry action, an empty roster,
//! or the client card grid.

#[cfg(test)]
#[path = "manager_clients_test.rs"]
mod manager_clients_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::api::Api;
use crate::net::types::ClientRecord;

/// Summary line under a client's name, e.g. `"Age 84 - Room 12B"`.
pub(crate) fn client_meta_line(client: &ClientRecord) -> String {
    let mut parts = Vec::new();
    if let Some(age) = client.age {
        parts.push(format!("Age {age}"));
    }
    if let Some(room) = &client.room {
        if !room.is_empty() {
            parts.push(format!("Room {room}"));
        }
    }
    parts.join(" - ")
}

#[component]
pub fn ManagerClientsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let clients = RwSignal::new(Vec::<ClientRecord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::ClientListResponse;
            use crate::util::errors::friendly_message;

            match api.get::<ClientListResponse>("manager/clients").await {
                Ok(data) => clients.set(data.clients),
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

    let go_create = {
        let navigate = navigate.clone();
        move |_| navigate("/manager/create/client", NavigateOptions::default())
    };

    let client_cards = move || {
        clients
            .get()
            .into_iter()
            .map(|client| {
                let meta = client_meta_line(&client);
                view! {
                    <div class="card-clickable">
                        <div class="card-clickable-content">
                            <h3 class="card-title">{client.name}</h3>
                            <p class="card-meta">{meta}</p>
                            <Show when={
                                let has_needs = client
                                    .support_needs
                                    .as_ref()
                                    .is_some_and(|needs| !needs.is_empty());
                                move || has_needs
                            }>
                                <p class="card-detail">
                                    {client.support_needs.clone().unwrap_or_default()}
                                </p>
                            </Show>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Client Management"
                subtitle="Manage all clients in the care home"
                back_href="/manager/dashboard"
            />
            <div class="dashboard-container">
                <div class="dashboard-inner">
                    <div class="list-actions">
                        <button class="btn btn-primary" on:click=go_create>
                            "Add New Client"
                        </button>
                    </div>
                    <Show
                        when=move || !loading.get()
                        fallback=|| view! {
                            <div class="loading-container">
                                <div class="loading-content">
                                    <div class="loading-spinner"></div>
                                    <p class="loading-text">"Loading clients..."</p>
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
                            <Show
                                when=move || !clients.get().is_empty()
                                fallback=|| view! {
                                    <div class="empty-state">
                                        <p class="empty-text">"No clients yet."</p>
                                    </div>
                                }
                            >
                                <div class="card-grid">{client_cards}</div>
                            </Show>
                        </Show>
                    </Show>
                </div>
            </div>
        </div>
    }
}
