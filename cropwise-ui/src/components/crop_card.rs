//! Card for one crop recommendation.

use cropwise_core::metrics::format_percent;
use cropwise_core::recommend::CropRecommendation;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CropCardProps {
    pub crop: CropRecommendation,
    /// 1-based position in the ranking
    pub rank: usize,
}

/// Suitability badge, headline facts and an expandable detail section.
#[component]
pub fn CropCard(props: CropCardProps) -> Element {
    let mut expanded = use_signal(|| false);
    let crop = &props.crop;
    let band = crop.band();
    let colour = band.colour();
    let score = format_percent(f64::from(crop.suitability_score));
    let image = crop.image_url().map(str::to_string);
    let toggle_label = if expanded() { "Hide details" } else { "Show details" };

    let factors = [
        ("Soil", crop.soil_compatibility),
        ("Climate", crop.climate_compatibility),
        ("Water", crop.water_compatibility),
        ("Market", crop.market_potential),
    ];

    rsx! {
        div {
            style: "border: 1px solid #e5e7eb; border-left: 4px solid {colour}; border-radius: 8px; padding: 16px; background: #fff;",
            if let Some(src) = image {
                img {
                    src: "{src}",
                    alt: "{crop.name}",
                    style: "width: 100%; height: 160px; object-fit: cover; border-radius: 6px; margin-bottom: 10px;",
                }
            }
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "#{props.rank} {crop.name}" }
                span {
                    style: "background: {colour}; color: #fff; padding: 2px 10px; border-radius: 12px; font-size: 12px;",
                    "{score} · {band.label()}"
                }
            }
            p { style: "color: #555; font-size: 14px;", "{crop.description}" }
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 6px; font-size: 13px;",
                div { strong { "Expected yield: " } "{crop.expected_yield}" }
                div { strong { "Water: " } "{crop.water_requirement}" }
                div { strong { "Growth: " } "{crop.growth_duration}" }
                div { strong { "Profit: " } "{crop.profit_potential}" }
            }
            button {
                style: "margin-top: 10px; background: none; border: none; color: #16a34a; cursor: pointer; padding: 0;",
                onclick: move |_| expanded.toggle(),
                "{toggle_label}"
            }
            if expanded() {
                div {
                    style: "margin-top: 8px;",
                    for (name, value) in factors {
                        div {
                            key: "{name}",
                            style: "display: flex; align-items: center; gap: 8px; font-size: 12px; margin-bottom: 4px;",
                            span { style: "width: 60px;", "{name}" }
                            div {
                                style: "flex: 1; height: 6px; background: #e5e7eb; border-radius: 3px;",
                                div { style: "height: 100%; width: {value}%; background: {colour}; border-radius: 3px;" }
                            }
                            span { "{value}%" }
                        }
                    }
                    if let Some(field) = crop.limiting_factor {
                        p {
                            style: "font-size: 12px; color: #92400E;",
                            "Limiting factor: {field.label()}"
                        }
                    }
                }
            }
        }
    }
}
