//! Centered card shell shared by the login and forgot-password pages.

use leptos::prelude::*;

use crate::route::AppRoute;

#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <header class="auth-card__header">
                    <img class="auth-card__logo" src="/logo.svg" alt="Logo"/>
                    <h1>{title}</h1>
                    <p class="auth-card__subtitle">{subtitle}</p>
                </header>
                {children()}
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=AppRoute::Signup.path() class="auth-link auth-link--strong">
                        "Sign up"
                    </a>
                </p>
            </div>
        </div>
    }
}
