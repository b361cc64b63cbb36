//! # client
//!
//! Leptos + WASM frontend for the sign-in pages: login, forgot-password and
//! dashboard, backed by Firebase Authentication.
//!
//! This crate contains pages, components, session and form state, the
//! Firebase configuration and client handle, and the Identity Toolkit REST
//! calls. The `hydrate` entry point builds the Firebase handle once, failing
//! fast on missing configuration, and hands it to [`app::App`].

pub mod app;
pub mod components;
pub mod firebase;
pub mod net;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let firebase = match firebase::FirebaseApp::from_build_env() {
        Ok(app) => app,
        Err(e) => {
            log::error!("firebase initialization failed: {e}");
            wasm_bindgen::throw_str(&e.to_string());
        }
    };

    leptos::mount::hydrate_body(move || view! { <App firebase=Some(firebase)/> });
}
