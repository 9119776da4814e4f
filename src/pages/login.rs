//! Login page: email + password form with one-click demo accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route. Field presence is validated here before the
//! session store is involved; the store does not re-validate. Once the
//! session becomes authenticated, whether from this form or from bootstrap,
//! the page forwards the user to their role's dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Seeded demo account selectable from the login card.
pub(crate) struct DemoUser {
    pub label: &'static str,
    pub email: &'static str,
    pub password: &'static str,
}

pub(crate) const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        label: "Login as Manager",
        email: "manager@demo.com",
        password: "password123",
    },
    DemoUser {
        label: "Login as Carer",
        email: "carer@demo.com",
        password: "password123",
    },
    DemoUser {
        label: "Login as Family",
        email: "family@demo.com",
        password: "password123",
    },
];

/// Require both fields before attempting a login.
pub(crate) fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let show_demo = RwSignal::new(false);

    let busy = move || session.get().loading;

    // Forward an already-authenticated session to its dashboard.
    let navigate = use_navigate();
    Effect::new(move || {
        let state = session.get();
        if state.authenticated {
            if let Some(role) = state.role {
                navigate(&role.dashboard_path(), NavigateOptions::default());
            }
        }
    });

    let submit_login = move |email_value: String, password_value: String| {
        error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = session.login(&email_value, &password_value).await {
                error.set(e.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        match validate_credentials(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => submit_login(email_value, password_value),
            Err(message) => error.set(message.to_owned()),
        }
    };

    let demo_buttons = move || {
        DEMO_USERS
            .iter()
            .map(|demo| {
                view! {
                    <button
                        class="demo-button"
                        disabled=busy
                        on:click=move |_| {
                            email.set(demo.email.to_owned());
                            password.set(demo.password.to_owned());
                            submit_login(demo.email.to_owned(), demo.password.to_owned());
                        }
                    >
                        {demo.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="login-page">
            <div class="login-container">
                <div class="login-card">
                    <div class="login-header">
                        <h2 class="login-title">"CareView"</h2>
                        <p class="login-subtitle">"Sign in to your care management account"</p>
                    </div>

                    <div class="demo-toggle-container">
                        <button
                            type="button"
                            class="demo-toggle-button"
                            on:click=move |_| show_demo.update(|v| *v = !*v)
                        >
                            {move || if show_demo.get() { "Hide Demo Options" } else { "Try Demo Users" }}
                        </button>
                    </div>

                    <Show when=move || show_demo.get()>
                        <div class="demo-section">
                            <h3 class="demo-section-title">"Quick Demo Login"</h3>
                            <div class="demo-buttons-grid">{demo_buttons.clone()}</div>
                        </div>
                    </Show>

                    <form class="login-form" on:submit=on_submit>
                        <label class="login-label">
                            "Email"
                            <input
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="login-label">
                            "Password"
                            <input
                                class="login-input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="login-button" type="submit" disabled=busy>
                            {move || if busy() { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <Show when=move || !error.get().is_empty()>
                        <p class="login-error">{move || error.get()}</p>
                    </Show>
                </div>
            </div>
        </div>
    }
}
