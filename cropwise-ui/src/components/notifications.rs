//! Toast list bound to [`AppState::notifications`].

use crate::state::{AppState, NotificationKind};
use dioxus::prelude::*;

const ERROR_STYLE: &str =
    "background: #FEF2F2; border: 1px solid #FCA5A5; color: #991B1B; padding: 10px 12px; border-radius: 6px;";
const SUCCESS_STYLE: &str =
    "background: #F0FDF4; border: 1px solid #86EFAC; color: #166534; padding: 10px 12px; border-radius: 6px;";

#[component]
pub fn Notifications() -> Element {
    let mut state = use_context::<AppState>();
    let notifications: Vec<_> = state
        .notifications
        .read()
        .iter()
        .map(|note| {
            let style = match note.kind {
                NotificationKind::Error => ERROR_STYLE,
                NotificationKind::Success => SUCCESS_STYLE,
            };
            (note.clone(), style)
        })
        .collect();

    rsx! {
        div {
            style: "position: fixed; top: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 1000; max-width: 320px;",
            for (note, style) in notifications {
                div {
                    key: "{note.id}",
                    role: "status",
                    style: "{style}",
                    div {
                        style: "display: flex; justify-content: space-between; gap: 8px;",
                        strong { "{note.title}" }
                        button {
                            style: "background: none; border: none; cursor: pointer; color: inherit;",
                            aria_label: "Dismiss",
                            onclick: move |_| state.dismiss(note.id),
                            "×"
                        }
                    }
                    p { style: "margin: 4px 0 0 0; font-size: 13px;", "{note.message}" }
                }
            }
        }
    }
}
