//! Ranked crops for the saved soil/climate record.

use super::{use_flash, FlashBanner, CARD_STYLE, PRIMARY_BUTTON};
use cropwise_core::config::DEFAULT_TOP_N;
use cropwise_core::flow::FlowEvent;
use cropwise_core::navigation::View;
use cropwise_core::recommend::{other_soil_matches, recommend_top, summary};
use cropwise_ui::charts;
use cropwise_ui::components::{ChartContainer, ChartHeader, CropCard, ErrorDisplay, LoadingSpinner};
use cropwise_ui::js_bridge;
use cropwise_ui::state::AppState;
use cropwise_ui::storage::session_transfer;
use dioxus::prelude::*;

const COMPATIBILITY_CHART_ID: &str = "compatibility-chart";
const RADAR_CHART_ID: &str = "suitability-radar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Crops,
    Analytics,
}

#[component]
pub fn Recommendations() -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();
    let flash = use_flash();
    let mut tab = use_signal(|| Tab::Crops);
    let record = use_hook(|| session_transfer().ok().and_then(|t| t.load().ok().flatten()));

    let loaded = record.is_some();
    use_effect(move || {
        if !loaded {
            return;
        }
        if !state.flow.peek().has_data() {
            let _ = state.advance(FlowEvent::DataSaved);
        }
        let _ = state.advance(FlowEvent::ShowRecommendations);
    });

    let top = {
        let catalog = state.catalog.read();
        record
            .as_ref()
            .map(|r| recommend_top(&catalog, r, DEFAULT_TOP_N))
            .unwrap_or_default()
    };

    let chart_record = record.clone();
    use_effect(move || {
        if tab() != Tab::Analytics {
            return;
        }
        let Some(record) = chart_record.as_ref() else {
            return;
        };
        let top = recommend_top(&state.catalog.read(), record, DEFAULT_TOP_N);
        if top.is_empty() {
            return;
        }
        let (data, config) = charts::compatibility_groups(&top);
        js_bridge::render_grouped_bar_chart(COMPATIBILITY_CHART_ID, &data, &config);
        let (data, config) = charts::suitability_radar(&top);
        js_bridge::render_radar_chart(RADAR_CHART_ID, &data, &config);
    });

    let on_new_analysis = move |_: Event<MouseData>| {
        let _ = state.advance(FlowEvent::EditInput);
        nav.push(View::Input.path());
    };

    let Some(record) = record else {
        return rsx! {
            ErrorDisplay { message: "Saved soil data could not be read. Please enter it again.".to_string() }
            Link { to: View::Input.path(), "Go to input" }
        };
    };

    let tab_style = |which: Tab| {
        if tab() == which {
            "padding: 8px 14px; border: none; border-bottom: 3px solid #16a34a; background: none; font-weight: bold; cursor: pointer;"
        } else {
            "padding: 8px 14px; border: none; border-bottom: 3px solid transparent; background: none; cursor: pointer;"
        }
    };
    let crops_tab_style = tab_style(Tab::Crops);
    let analytics_tab_style = tab_style(Tab::Analytics);
    let summary_text = summary(&record);
    let soil = record.soil_type;
    let also_suited = state
        .db
        .read()
        .as_ref()
        .and_then(|db| match db.query_crops_for_soil(soil) {
            Ok(crops) => Some(crops),
            Err(e) => {
                log::warn!("[CropWise] recommendations: soil lookup failed: {e}");
                None
            }
        })
        .map(|crops| other_soil_matches(&crops, &top).join(", "))
        .unwrap_or_default();

    rsx! {
        h2 { "{View::Recommendations.title()}" }
        if let Some(message) = flash {
            FlashBanner { message }
        }
        div {
            style: "{CARD_STYLE} margin-bottom: 16px;",
            h3 { style: "margin-top: 0;", "Analysis summary" }
            p { style: "color: #374151;", "{summary_text}" }
            if !also_suited.is_empty() {
                p {
                    style: "font-size: 13px; color: #4b5563;",
                    "Also suited to {soil.as_str()} soil: {also_suited}"
                }
            }
            button { style: PRIMARY_BUTTON, onclick: on_new_analysis, "New analysis" }
        }

        if *state.loading.read() {
            LoadingSpinner { label: "Loading crop catalog...".to_string() }
        } else if top.is_empty() {
            ErrorDisplay { message: "No crops in the catalog to compare against.".to_string() }
        } else {
            div {
                style: "display: flex; gap: 4px; border-bottom: 1px solid #e5e7eb; margin-bottom: 12px;",
                button { style: crops_tab_style, onclick: move |_| tab.set(Tab::Crops), "Top crops" }
                button { style: analytics_tab_style, onclick: move |_| tab.set(Tab::Analytics), "Analytics" }
            }
            if tab() == Tab::Crops {
                div {
                    style: "display: grid; gap: 12px;",
                    for (index, crop) in top.into_iter().enumerate() {
                        CropCard { key: "{crop.name}", crop, rank: index + 1 }
                    }
                }
            } else {
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 16px;",
                    div {
                        style: CARD_STYLE,
                        ChartHeader {
                            title: "Compatibility breakdown".to_string(),
                            caption: "Soil, climate, water and market fit, 0-100".to_string(),
                        }
                        ChartContainer { id: COMPATIBILITY_CHART_ID.to_string(), min_height: 320 }
                    }
                    div {
                        style: CARD_STYLE,
                        ChartHeader {
                            title: "Overall suitability".to_string(),
                            caption: "One axis per recommended crop".to_string(),
                        }
                        ChartContainer { id: RADAR_CHART_ID.to_string(), min_height: 320 }
                    }
                }
            }
        }
    }
}
