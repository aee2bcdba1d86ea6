//! Top navigation bar.

use crate::state::{AppState, NotificationKind};
use crate::storage::session_transfer;
use cropwise_core::auth::Session;
use cropwise_core::flow::FlowEvent;
use cropwise_core::navigation::View;
use dioxus::prelude::*;

/// Links depend on the session; signing out clears the session and the
/// saved input record.
#[component]
pub fn Navbar() -> Element {
    let mut state = use_context::<AppState>();
    let session = state.session.read().clone();
    let links = View::nav_links(&session);
    let display_name = session.user().map(|u| u.display_name.clone());

    let on_logout = move |_: Event<MouseData>| {
        if let Ok(transfer) = session_transfer() {
            if let Err(err) = transfer.clear() {
                log::warn!("[CropWise] navbar: could not clear saved input: {err}");
            }
        }
        let _ = state.advance(FlowEvent::Logout);
        state.session.set(Session::Anonymous);
        state.notify(NotificationKind::Success, "Signed out", "See you next season.");
        navigator().push(View::Home.path());
    };

    rsx! {
        nav {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 20px; background: #14532d; color: #fff;",
            Link {
                to: View::Home.path(),
                style: "color: #fff; text-decoration: none; font-weight: bold; font-size: 18px;",
                "🌱 CropWise"
            }
            div {
                style: "display: flex; gap: 16px; align-items: center;",
                for link in links.iter() {
                    Link {
                        key: "{link.label}",
                        to: link.view.path(),
                        style: "color: #dcfce7; text-decoration: none;",
                        "{link.label}"
                    }
                }
                if let Some(name) = display_name {
                    span { style: "color: #bbf7d0; font-size: 13px;", "{name}" }
                    button {
                        style: "background: #fff; color: #14532d; border: none; border-radius: 4px; padding: 4px 10px; cursor: pointer;",
                        onclick: on_logout,
                        "Log out"
                    }
                }
            }
        }
    }
}
