//! Toast notification banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `RwSignal<ToastState>`; [`push_toast`] shows a message and
//! schedules its dismissal, [`ToastBanner`] renders it with a close button.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, ToastKind, ToastState};

/// Show `message` and dismiss it after [`TOAST_DURATION_MS`].
pub fn push_toast(toasts: RwSignal<ToastState>, message: &str, kind: ToastKind) {
    let Some(id) = toasts.try_update(|t| t.show(message, kind)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    schedule_dismiss(toasts, id, |delay_ms, dismiss| {
        gloo_timers::callback::Timeout::new(delay_ms, dismiss).forget();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Hand `schedule` a delay and a callback that dismisses toast `id`.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn schedule_dismiss<S>(toasts: RwSignal<ToastState>, id: u64, schedule: S)
where
    S: FnOnce(u32, Box<dyn FnOnce()>),
{
    // Page may be gone by the time this fires.
    schedule(
        TOAST_DURATION_MS,
        Box::new(move || {
            let _ = toasts.try_update(|t| t.dismiss(id));
        }),
    );
}

#[component]
pub fn ToastBanner(toasts: RwSignal<ToastState>) -> impl IntoView {
    view! {
        {move || {
            toasts
                .with(|t| t.current.clone())
                .map(|toast| {
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                type="button"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.update(ToastState::close)
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
