//! Manager create-client form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Manager-only route. Builds the new-client payload from the form fields,
//! posts it through the `Api` handle, and returns to the client list once the
//! backend confirms the record.

#[cfg(test)]
#[path = "manager_create_client_test.rs"]
mod manager_create_client_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::net::api::Api;
use crate::net::types::NewClient;

/// Assemble the create-client payload from raw form values.
///
/// Support needs are optional; everything else is required, and the age must
/// be a whole number the backend will accept.
///
/// # Errors
///
/// A user-facing message naming the first problem found.
pub(crate) fn build_new_client(
    name: &str,
    age: &str,
    room: &str,
    date_of_birth: &str,
    support_needs: &str,
) -> Result<NewClient, &'static str> {
    let name = name.trim();
    let age = age.trim();
    let room = room.trim();
    let date_of_birth = date_of_birth.trim();
    if name.is_empty() || age.is_empty() || room.is_empty() || date_of_birth.is_empty() {
        return Err("Please fill in all required fields");
    }
    let Ok(age) = age.parse::<i64>() else {
        return Err("Age must be a number");
    };
    if !(18..=120).contains(&age) {
        return Err("Age must be between 18 and 120");
    }
    Ok(NewClient {
        name: name.to_owned(),
        age,
        room: room.to_owned(),
        date_of_birth: date_of_birth.to_owned(),
        support_needs: support_needs.trim().to_owned(),
    })
}

#[component]
pub fn ManagerCreateClientPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let age = RwSignal::new(String::new());
    let room = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let support_needs = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let created = RwSignal::new(false);

    Effect::new(move || {
        if created.get() {
            navigate("/manager/clients", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let payload = match build_new_client(
            &name.get(),
            &age.get(),
            &room.get(),
            &date_of_birth.get(),
            &support_needs.get(),
        ) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::errors::friendly_message;

            match api
                .post::<serde_json::Value>("manager/create/client", &payload)
                .await
            {
                Ok(_) => created.set(true),
                Err(err) => error.set(Some(friendly_message(&err))),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, payload);
            submitting.set(false);
        }
    };

    view! {
        <div class="dashboard-page">
            <PageHeader
                title="Create New Client"
                subtitle="Add a new client to the care home"
                back_href="/manager/clients"
            />
            <div class="form-container">
                <div class="form-inner">
                    <div class="form-card">
                        <form class="form-content" on:submit=on_submit>
                            <div class="form-field">
                                <label class="form-label form-label-required">
                                    "Full Name"
                                    <input
                                        class="form-input"
                                        type="text"
                                        placeholder="Enter client's full name"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <div class="form-group">
                                <div class="form-field">
                                    <label class="form-label form-label-required">
                                        "Age"
                                        <input
                                            class="form-input"
                                            type="number"
                                            min="18"
                                            max="120"
                                            placeholder="Age"
                                            prop:value=move || age.get()
                                            on:input=move |ev| age.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>
                                <div class="form-field">
                                    <label class="form-label form-label-required">
                                        "Room Number"
                                        <input
                                            class="form-input"
                                            type="text"
                                            placeholder="e.g. 101A"
                                            prop:value=move || room.get()
                                            on:input=move |ev| room.set(event_target_value(&ev))
                                        />
                                    </label>
                                </div>
                            </div>
                            <div class="form-field">
                                <label class="form-label form-label-required">
                                    "Date of Birth"
                                    <input
                                        class="form-input"
                                        type="date"
                                        prop:value=move || date_of_birth.get()
                                        on:input=move |ev| date_of_birth.set(event_target_value(&ev))
                                    />
                                </label>
                            </div>
                            <div class="form-field">
                                <label class="form-label">
                                    "Support Needs"
                                    <textarea
                                        class="form-input"
                                        placeholder="Mobility, medication, dietary requirements..."
                                        prop:value=move || support_needs.get()
                                        on:input=move |ev| support_needs.set(event_target_value(&ev))
                                    ></textarea>
                                </label>
                            </div>
                            <Show when=move || error.get().is_some()>
                                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                            </Show>
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || submitting.get()
                            >
                                {move || if submitting.get() { "Creating..." } else { "Create Client" }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </div>
    }
}
