//! Landing page.

use super::CARD_STYLE;
use cropwise_core::navigation::View;
use cropwise_ui::state::AppState;
use dioxus::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🧪", "Soil analysis", "Enter N, P, K, pH and moisture readings from your latest soil test."),
    ("🌦️", "Climate aware", "Temperature, humidity and rainfall are weighed against every crop's needs."),
    ("📊", "Ranked crops", "See which crops suit your field best, with charts explaining why."),
];

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let signed_in = state.session.read().is_signed_in();
    let (cta_label, cta_target) = if signed_in {
        ("Enter field data", View::Input)
    } else {
        ("Get started", View::Register)
    };

    rsx! {
        section {
            style: "text-align: center; padding: 48px 16px;",
            h1 { style: "font-size: 36px; margin: 0 0 12px 0; color: #14532d;", "Grow the right crop for your land" }
            p {
                style: "font-size: 18px; color: #4b5563; max-width: 640px; margin: 0 auto 24px auto;",
                "CropWise turns your soil and climate readings into ranked crop recommendations."
            }
            Link {
                to: cta_target.path(),
                style: "background: #16a34a; color: #fff; padding: 12px 24px; border-radius: 6px; text-decoration: none;",
                "{cta_label}"
            }
        }
        section {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px;",
            for (icon, title, text) in FEATURES {
                div {
                    key: "{title}",
                    style: CARD_STYLE,
                    div { style: "font-size: 28px;", "{icon}" }
                    h3 { "{title}" }
                    p { style: "color: #555;", "{text}" }
                }
            }
        }
    }
}
