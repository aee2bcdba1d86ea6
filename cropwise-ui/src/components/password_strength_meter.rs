//! Password strength bar.

use cropwise_core::metrics::PasswordStrength;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PasswordStrengthMeterProps {
    pub password: String,
}

/// Hidden while the password is empty.
#[component]
pub fn PasswordStrengthMeter(props: PasswordStrengthMeterProps) -> Element {
    if props.password.is_empty() {
        return rsx! {};
    }
    let strength = PasswordStrength::of(&props.password);
    let width = strength.meter_width();
    let colour = strength.colour();
    let label = strength.label.text();

    rsx! {
        div {
            style: "margin: 4px 0 10px 0;",
            div {
                style: "height: 6px; background: #e5e7eb; border-radius: 3px; overflow: hidden;",
                div { style: "height: 100%; width: {width}%; background: {colour}; transition: width 0.2s;" }
            }
            span { style: "font-size: 12px; color: {colour};", "Password strength: {label}" }
        }
    }
}
