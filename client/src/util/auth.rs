//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages behind sign-in apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::route::AppRoute;
use crate::state::session::SessionState;

/// Whether a guarded page should bounce to the login page.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.is_logged_in
}

/// Redirect to the login page whenever the session is logged out.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(should_redirect_unauth) {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });
}
