//! Forgot-password page.
//!
//! Captures an email and logs the request. No reset email is sent; the page
//! has no backend call yet.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::components::auth_card::AuthCard;
use crate::route::AppRoute;

/// Log a reset request and return the trimmed email that was captured.
pub fn submit_forgot_password(email: &str) -> Option<String> {
    let email = email.trim();
    log::info!("forgot password submitted: email={email}");
    if email.is_empty() { None } else { Some(email.to_owned()) }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());

    let on_submit = move |_| {
        submit_forgot_password(&email.get_untracked());
    };

    view! {
        <AuthCard title="Forgot Password" subtitle="Enter your email address to reset your password">
            <div class="auth-form">
                <div class="auth-field">
                    <label for="email" class="auth-label">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        class="auth-input"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>

                <div class="auth-form__aside">
                    <a href=AppRoute::Login.path() class="auth-link">"Remembered your password?"</a>
                </div>

                <button class="auth-button" type="button" on:click=on_submit>
                    "Submit"
                </button>
            </div>
        </AuthCard>
    }
}
