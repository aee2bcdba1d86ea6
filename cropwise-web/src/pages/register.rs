//! Registration form: validated up front, then a simulated round trip.

use super::{CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON};
use cropwise_core::auth::{register, Registration};
use cropwise_core::config::REGISTER_LATENCY;
use cropwise_core::flow::{FlowEvent, FlowState};
use cropwise_core::navigation::View;
use cropwise_ui::components::PasswordStrengthMeter;
use cropwise_ui::state::{AppState, NotificationKind};
use cropwise_ui::timers::sleep;
use dioxus::prelude::*;

#[component]
pub fn Register() -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();
    let mut form = use_signal(Registration::default);
    let submitting = (state.flow)() == FlowState::Authenticating;

    use_drop(move || {
        if *state.flow.peek() == FlowState::Authenticating {
            let _ = state.advance(FlowEvent::AuthFailed);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let registration = form.read().clone();
        if let Err(err) = registration.validate() {
            state.notify(NotificationKind::Error, "Registration failed", err.to_string());
            return;
        }
        if state.advance(FlowEvent::SubmitCredentials).is_err() {
            return;
        }
        spawn(async move {
            sleep(REGISTER_LATENCY).await;
            match register(&registration) {
                Ok(session) => {
                    let _ = state.advance(FlowEvent::AuthSucceeded);
                    state.session.set(session);
                    state.notify(
                        NotificationKind::Success,
                        "Account created",
                        "Your account is ready. Enter your field data to get started.",
                    );
                    nav.push(View::Dashboard.path());
                }
                Err(err) => {
                    let _ = state.advance(FlowEvent::AuthFailed);
                    state.notify(NotificationKind::Error, "Registration failed", err.to_string());
                }
            }
        });
    };

    let current = form.read().clone();
    let show_match = !current.confirm_password.is_empty();
    let (match_text, match_colour) = if current.passwords_match() {
        ("Passwords match", "#16a34a")
    } else {
        ("Passwords do not match", "#C62828")
    };
    let button_label = if submitting { "Creating account..." } else { "Create account" };

    rsx! {
        div {
            style: "max-width: 460px; margin: 32px auto; {CARD_STYLE}",
            h2 { style: "margin-top: 0;", "{View::Register.title()}" }
            form {
                onsubmit: on_submit,
                label { r#for: "full_name", "Full name" }
                input {
                    id: "full_name",
                    style: INPUT_STYLE,
                    value: "{current.full_name}",
                    oninput: move |evt: Event<FormData>| form.write().full_name = evt.value(),
                }
                label { r#for: "email", style: "display: block; margin-top: 10px;", "Email" }
                input {
                    id: "email",
                    r#type: "email",
                    style: INPUT_STYLE,
                    value: "{current.email}",
                    oninput: move |evt: Event<FormData>| form.write().email = evt.value(),
                }
                label { r#for: "location", style: "display: block; margin-top: 10px;", "Farm location" }
                input {
                    id: "location",
                    style: INPUT_STYLE,
                    value: "{current.location}",
                    oninput: move |evt: Event<FormData>| form.write().location = evt.value(),
                }
                label { r#for: "password", style: "display: block; margin-top: 10px;", "Password" }
                input {
                    id: "password",
                    r#type: "password",
                    style: INPUT_STYLE,
                    value: "{current.password}",
                    oninput: move |evt: Event<FormData>| form.write().password = evt.value(),
                }
                PasswordStrengthMeter { password: current.password.clone() }
                label { r#for: "confirm_password", style: "display: block; margin-top: 10px;", "Confirm password" }
                input {
                    id: "confirm_password",
                    r#type: "password",
                    style: INPUT_STYLE,
                    value: "{current.confirm_password}",
                    oninput: move |evt: Event<FormData>| form.write().confirm_password = evt.value(),
                }
                if show_match {
                    span { style: "font-size: 12px; color: {match_colour};", "{match_text}" }
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
                "Already registered? "
                Link { to: View::Login.path(), "Sign in" }
            }
        }
    }
}
