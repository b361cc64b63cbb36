//! Root application component with routing and explicit state handoff.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::firebase::FirebaseApp;
use crate::pages::{dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Server rendering never holds a Firebase handle.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App firebase=None/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the lifetime of the page and passes it, with the
/// Firebase handle built at startup, to each page.
#[component]
pub fn App(firebase: Option<FirebaseApp>) -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=move || view! { <LoginPage session=session firebase=firebase.clone()/> }
                />
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=move || view! { <DashboardPage session=session/> }
                />
            </Routes>
        </Router>
    }
}
