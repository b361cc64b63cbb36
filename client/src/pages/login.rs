//! Email + password login page.
//!
//! The submit sequence lives in [`crate::state::login::submit_login`]; this
//! module owns the signals and adapts them to [`LoginSurface`].

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::toast::ToastBanner;
use crate::firebase::FirebaseApp;
use crate::route::AppRoute;
use crate::state::login::FieldErrors;
#[cfg(feature = "hydrate")]
use crate::state::login::{LoginSurface, submit_login};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;

const INPUT_CLASS: &str = "auth-input";
const INPUT_ERROR_CLASS: &str = "auth-input auth-input--error";

/// Input class, switching to the error style when flagged.
fn input_class(has_error: bool) -> &'static str {
    if has_error { INPUT_ERROR_CLASS } else { INPUT_CLASS }
}

fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Signing In..." } else { "Sign In" }
}

/// Per-page form signals. Created on mount, dropped on navigation away.
#[derive(Clone, Copy)]
struct LoginSignals {
    email: RwSignal<String>,
    password: RwSignal<String>,
    submitting: RwSignal<bool>,
    errors: RwSignal<FieldErrors>,
    failed: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
}

impl LoginSignals {
    fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
            errors: RwSignal::new(FieldErrors::default()),
            failed: RwSignal::new(false),
            toasts: RwSignal::new(ToastState::default()),
        }
    }
}

#[cfg(feature = "hydrate")]
struct PageSurface<N> {
    signals: LoginSignals,
    navigate: N,
}

#[cfg(feature = "hydrate")]
impl<N> LoginSurface for PageSurface<N>
where
    N: Fn(&str, NavigateOptions),
{
    fn is_submitting(&self) -> bool {
        self.signals.submitting.try_get_untracked().unwrap_or(false)
    }

    fn set_submitting(&self, submitting: bool) {
        self.signals.submitting.set(submitting);
    }

    fn set_errors(&self, errors: FieldErrors) {
        self.signals.errors.set(errors);
    }

    fn set_failed(&self, failed: bool) {
        self.signals.failed.set(failed);
    }

    fn show_toast(&self, message: &str, kind: ToastKind) {
        crate::components::toast::push_toast(self.signals.toasts, message, kind);
    }

    fn navigate(&self, route: AppRoute) {
        (self.navigate)(route.path(), NavigateOptions::default());
    }
}

#[component]
pub fn LoginPage(session: RwSignal<SessionState>, firebase: Option<FirebaseApp>) -> impl IntoView {
    let signals = LoginSignals::new();
    let navigate = use_navigate();

    let submit = move || {
        #[cfg(feature = "hydrate")]
        {
            let Some(firebase) = firebase.clone() else {
                let message = crate::firebase::AuthErrorKind::Misconfigured.message();
                log::error!("login submitted without an initialized Firebase app");
                signals.errors.set(FieldErrors { form: Some(message.to_owned()), ..FieldErrors::default() });
                crate::components::toast::push_toast(signals.toasts, message, ToastKind::Error);
                return;
            };
            let surface = PageSurface { signals, navigate: navigate.clone() };
            let email = signals.email.get_untracked();
            let password = signals.password.get_untracked();
            leptos::task::spawn_local(async move {
                submit_login(&email, &password, firebase.auth(), &session, &surface).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&firebase, &navigate, session);
        }
    };
    let submit_on_enter = submit.clone();

    let LoginSignals { email, password, submitting, errors, failed, toasts } = signals;

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to your account">
            <div class="auth-form">
                <div class="auth-field">
                    <label for="email" class="auth-label">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="you@example.com"
                        class=move || input_class(errors.with(|e| e.email.is_some()) || failed.get())
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || errors.with(|e| e.email.is_some())>
                        <p class="auth-error">{move || errors.with(|e| e.email.clone().unwrap_or_default())}</p>
                    </Show>
                </div>

                <div class="auth-field">
                    <label for="password" class="auth-label">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class=move || input_class(errors.with(|e| e.password.is_some()) || failed.get())
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit_on_enter();
                            }
                        }
                    />
                    <Show when=move || errors.with(|e| e.password.is_some())>
                        <p class="auth-error">{move || errors.with(|e| e.password.clone().unwrap_or_default())}</p>
                    </Show>
                </div>

                <div class="auth-form__aside">
                    <a href=AppRoute::ForgotPassword.path() class="auth-link">"Forgot password?"</a>
                </div>

                <button
                    class="auth-button"
                    type="button"
                    disabled=move || submitting.get()
                    on:click=move |_| submit()
                >
                    {move || submit_label(submitting.get())}
                </button>

                <Show when=move || errors.with(|e| e.form.is_some())>
                    <p class="auth-error auth-error--form">{move || errors.with(|e| e.form.clone().unwrap_or_default())}</p>
                </Show>
            </div>
        </AuthCard>
        <ToastBanner toasts=toasts/>
    }
}
