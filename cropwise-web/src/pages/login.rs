//! Sign-in form with simulated latency.

use super::{use_flash, FlashBanner, CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON};
use cropwise_core::auth::{login, Credentials};
use cropwise_core::config::LOGIN_LATENCY;
use cropwise_core::flow::{FlowEvent, FlowState};
use cropwise_core::navigation::View;
use cropwise_ui::state::{AppState, NotificationKind};
use cropwise_ui::timers::sleep;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();
    let flash = use_flash();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let submitting = (state.flow)() == FlowState::Authenticating;

    // Leaving mid-request cancels the pending timer; don't stay stuck.
    use_drop(move || {
        if *state.flow.peek() == FlowState::Authenticating {
            let _ = state.advance(FlowEvent::AuthFailed);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.advance(FlowEvent::SubmitCredentials).is_err() {
            return;
        }
        let credentials = Credentials::new(email(), password());
        spawn(async move {
            sleep(LOGIN_LATENCY).await;
            match login(&credentials) {
                Ok(session) => {
                    let _ = state.advance(FlowEvent::AuthSucceeded);
                    let name = session
                        .user()
                        .map(|u| u.display_name.clone())
                        .unwrap_or_default();
                    state.session.set(session);
                    state.notify(NotificationKind::Success, "Signed in", format!("Welcome back, {name}!"));
                    nav.push(View::Dashboard.path());
                }
                Err(err) => {
                    let _ = state.advance(FlowEvent::AuthFailed);
                    state.notify(NotificationKind::Error, "Sign-in failed", err.to_string());
                }
            }
        });
    };

    let input_type = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };
    let button_label = if submitting { "Signing in..." } else { "Sign in" };

    rsx! {
        div {
            style: "max-width: 420px; margin: 32px auto; {CARD_STYLE}",
            h2 { style: "margin-top: 0;", "{View::Login.title()}" }
            if let Some(message) = flash {
                FlashBanner { message }
            }
            form {
                onsubmit: on_submit,
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    style: INPUT_STYLE,
                    value: "{email}",
                    oninput: move |evt: Event<FormData>| email.set(evt.value()),
                }
                label { r#for: "password", style: "display: block; margin-top: 12px;", "Password" }
                div {
                    style: "display: flex; gap: 6px;",
                    input {
                        id: "password",
                        r#type: input_type,
                        style: INPUT_STYLE,
                        value: "{password}",
                        oninput: move |evt: Event<FormData>| password.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        style: "padding: 0 10px;",
                        onclick: move |_| show_password.toggle(),
                        "{toggle_label}"
                    }
                }
                button {
                    r#type: "submit",
                    style: "{PRIMARY_BUTTON} width: 100%; margin-top: 16px;",
                    disabled: submitting,
                    "{button_label}"
                }
            }
            p {
                style: "font-size: 14px; text-align: center;",
                "No account yet? "
                Link { to: View::Register.path(), "Register" }
            }
        }
    }
}
