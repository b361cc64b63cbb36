//! Dashboard page shown after sign-in.
//!
//! Redirects to the login page when the session is logged out, which is also
//! the case after any full reload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::User;
use crate::state::session::{SessionContext, SessionState};
use crate::util::auth::install_unauth_redirect;

/// Line identifying who is signed in.
fn signed_in_as(user: Option<&User>) -> Option<String> {
    user.map(|u| match u.display_name.as_deref() {
        Some(name) => format!("Signed in as {name} ({})", u.email),
        None => format!("Signed in as {}", u.email),
    })
}

/// End the session. The page's unauth redirect then returns to login.
fn sign_out(session: &impl SessionContext) {
    log::info!("signing out");
    session.logout();
}

#[component]
pub fn DashboardPage(session: RwSignal<SessionState>) -> impl IntoView {
    install_unauth_redirect(session, use_navigate());

    let on_sign_out = move |_| sign_out(&session);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="auth-button auth-button--secondary" type="button" on:click=on_sign_out>
                    "Sign out"
                </button>
            </header>
            <p class="dashboard-page__welcome">"Welcome to your dashboard!"</p>
            {move || {
                session
                    .with(|s| signed_in_as(s.current_user.as_ref()))
                    .map(|line| view! { <p class="dashboard-page__user">{line}</p> })
            }}
        </div>
    }
}
