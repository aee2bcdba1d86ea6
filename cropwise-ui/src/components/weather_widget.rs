//! Clock and weather card for the dashboard.

use crate::timers::use_interval;
use chrono::Local;
use cropwise_core::config::CLOCK_PERIOD;
use cropwise_core::metrics::format_degrees;
use cropwise_core::weather::{clock_labels, mock_weather};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct WeatherWidgetProps {
    /// Falls back to the default farm location when `None`
    #[props(!optional)]
    pub location: Option<String>,
}

/// Mock conditions plus a clock refreshed every [`CLOCK_PERIOD`].
#[component]
pub fn WeatherWidget(props: WeatherWidgetProps) -> Element {
    let mut now = use_signal(|| Local::now().naive_local());
    use_interval(CLOCK_PERIOD, move || now.set(Local::now().naive_local()));

    let current = now();
    let labels = clock_labels(&current);
    let weather = mock_weather(props.location.as_deref(), current.date());
    let temperature = format_degrees(f64::from(weather.temperature));

    rsx! {
        div {
            style: "background: linear-gradient(135deg, #0ea5e9, #2563eb); color: #fff; border-radius: 10px; padding: 16px;",
            div {
                style: "display: flex; justify-content: space-between;",
                div {
                    div { style: "font-size: 28px; font-weight: bold;", "{labels.time}" }
                    div { style: "font-size: 13px; opacity: 0.9;", "{labels.date}" }
                    div { style: "font-size: 13px; margin-top: 4px;", "📍 {weather.location}" }
                }
                div {
                    style: "text-align: right;",
                    div { style: "font-size: 28px;", "{temperature}" }
                    div { style: "font-size: 13px;", "{weather.condition}" }
                    div { style: "font-size: 12px; opacity: 0.9;", "Humidity {weather.humidity}% · Wind {weather.wind_speed} km/h {weather.wind_direction}" }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; margin-top: 12px; border-top: 1px solid rgba(255,255,255,0.3); padding-top: 8px;",
                for day in weather.forecast.iter() {
                    div {
                        key: "{day.day}",
                        style: "text-align: center; font-size: 12px;",
                        div { "{day.day}" }
                        div { style: "font-size: 18px;", "{day.condition.icon()}" }
                        div { "{day.temperature}°" }
                    }
                }
            }
        }
    }
}
