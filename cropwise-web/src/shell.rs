//! Layout shared by every route: navigation bar, toasts and the guard.

use crate::Route;
use cropwise_core::navigation::{resolve, Navigation, View};
use cropwise_ui::components::{Navbar, Notifications};
use cropwise_ui::state::AppState;
use cropwise_ui::storage::has_saved_input;
use dioxus::prelude::*;

#[component]
pub fn Shell() -> Element {
    let state = use_context::<AppState>();
    let route = use_route::<Route>();
    let view = View::from_path(&route.to_string());
    let session = state.session.read().clone();

    let body = match resolve(view, &session, has_saved_input()) {
        Navigation::Render => rsx! { Outlet::<Route> {} },
        Navigation::Redirect { to, reason } => rsx! {
            RedirectTo { to: to.path().to_string(), message: reason.message().to_string() }
        },
    };

    rsx! {
        div {
            style: "min-height: 100vh; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",
            Navbar {}
            Notifications {}
            main {
                style: "max-width: 1000px; margin: 0 auto; padding: 16px;",
                {body}
            }
        }
    }
}

/// Leave a flash message for the target view and replace the current entry.
#[component]
fn RedirectTo(to: String, message: String) -> Element {
    let mut state = use_context::<AppState>();
    use_effect(move || {
        dioxus_logger::tracing::info!("redirecting to {to}: {message}");
        state.flash.set(Some(message.clone()));
        navigator().replace(to.as_str());
    });
    rsx! {}
}
