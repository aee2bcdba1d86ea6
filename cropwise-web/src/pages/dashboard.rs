//! Signed-in overview: weather, gauges and charts from the saved record.

use super::CARD_STYLE;
use cropwise_core::field::FieldId;
use cropwise_core::form::FormController;
use cropwise_core::metrics::nutrient_composition;
use cropwise_core::navigation::View;
use cropwise_core::recommend::recommend_top;
use cropwise_ui::charts;
use cropwise_ui::components::{ChartContainer, ChartHeader, ErrorDisplay, Gauge, LoadingSpinner, WeatherWidget};
use cropwise_ui::js_bridge;
use cropwise_ui::state::AppState;
use cropwise_ui::storage::session_transfer;
use dioxus::prelude::*;

const NUTRIENT_CHART_ID: &str = "nutrient-chart";
const TOP_CROPS_CHART_ID: &str = "top-crops-chart";

/// Crops shown in the dashboard's suitability chart.
const DASHBOARD_TOP_N: usize = 5;

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let record = use_hook(|| session_transfer().ok().and_then(|t| t.load().ok().flatten()));

    let user_location = state
        .session
        .read()
        .user()
        .and_then(|u| u.location.clone());
    let location = record
        .as_ref()
        .map(|r| r.location.as_str().to_string())
        .or(user_location);

    // Nutrients and moisture from the saved record, otherwise the form defaults.
    let defaults = FormController::new();
    let reading = |field: FieldId| {
        record
            .as_ref()
            .and_then(|r| r.numeric(field))
            .or_else(|| defaults.number(field))
            .unwrap_or(0.0)
    };
    let (nitrogen, phosphorus, potassium) = (
        reading(FieldId::Nitrogen),
        reading(FieldId::Phosphorus),
        reading(FieldId::Potassium),
    );
    let moisture = reading(FieldId::Humidity);

    let top = {
        let catalog = state.catalog.read();
        record
            .as_ref()
            .map(|r| recommend_top(&catalog, r, DASHBOARD_TOP_N))
            .unwrap_or_default()
    };
    let best_score = top.first().map(|c| f64::from(c.suitability_score)).unwrap_or(0.0);
    let has_record = record.is_some();

    // Re-renders the charts once the catalog has loaded.
    let chart_record = record.clone();
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let shares = nutrient_composition(nitrogen, phosphorus, potassium);
        let (data, config) = charts::nutrient_pie(&shares);
        js_bridge::render_pie_chart(NUTRIENT_CHART_ID, &data, &config);

        let catalog = state.catalog.read();
        if let Some(record) = chart_record.as_ref() {
            let top = recommend_top(&catalog, record, DASHBOARD_TOP_N);
            let (data, config) = charts::suitability_bars(&top);
            js_bridge::render_bar_chart(TOP_CROPS_CHART_ID, &data, &config);
        }
    });

    let greeting = state
        .session
        .read()
        .user()
        .map(|u| format!("Welcome, {}", u.display_name))
        .unwrap_or_else(|| View::Dashboard.title().to_string());

    rsx! {
        h2 { "{greeting}" }

        if let Some(err) = state.error_msg.read().as_ref() {
            ErrorDisplay { message: err.clone() }
        }

        if *state.loading.read() {
            LoadingSpinner { label: "Loading crop catalog...".to_string() }
        } else {
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 16px;",
                WeatherWidget { location }
                div {
                    style: "{CARD_STYLE} display: flex; justify-content: space-around; align-items: center;",
                    Gauge { label: "Soil moisture".to_string(), percent: moisture, colour: "#0ea5e9".to_string() }
                    Gauge { label: "Best crop match".to_string(), percent: best_score }
                }
                div {
                    style: CARD_STYLE,
                    ChartHeader {
                        title: "Nutrient composition".to_string(),
                        caption: "Share of N, P and K in mg/kg".to_string(),
                    }
                    ChartContainer { id: NUTRIENT_CHART_ID.to_string(), min_height: 260 }
                }
                div {
                    style: CARD_STYLE,
                    ChartHeader {
                        title: "Top crops".to_string(),
                        caption: "Suitability score, 0-100".to_string(),
                    }
                    if has_record {
                        ChartContainer { id: TOP_CROPS_CHART_ID.to_string(), min_height: 220 }
                    } else {
                        p { style: "color: #666;", "No soil data yet." }
                        Link { to: View::Input.path(), "Enter your field data" }
                    }
                }
            }
        }
    }
}
