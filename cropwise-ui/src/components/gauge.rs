//! Circular percentage gauge.

use cropwise_core::metrics::{format_percent, gauge_dash_offset, GAUGE_CIRCUMFERENCE};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct GaugeProps {
    pub label: String,
    /// 0-100; values outside are clamped
    pub percent: f64,
    #[props(default = "#16a34a".to_string())]
    pub colour: String,
}

/// An r=45 ring whose stroke fills `percent` of the circumference.
#[component]
pub fn Gauge(props: GaugeProps) -> Element {
    let offset = gauge_dash_offset(props.percent);
    let text = format_percent(props.percent.clamp(0.0, 100.0));

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 4px;",
            svg {
                width: "110",
                height: "110",
                view_box: "0 0 110 110",
                circle {
                    cx: "55", cy: "55", r: "45",
                    fill: "none",
                    stroke: "#e5e7eb",
                    stroke_width: "10",
                }
                circle {
                    cx: "55", cy: "55", r: "45",
                    fill: "none",
                    stroke: "{props.colour}",
                    stroke_width: "10",
                    stroke_linecap: "round",
                    stroke_dasharray: "{GAUGE_CIRCUMFERENCE}",
                    stroke_dashoffset: "{offset}",
                    transform: "rotate(-90 55 55)",
                }
                text {
                    x: "55", y: "60",
                    text_anchor: "middle",
                    font_size: "18",
                    font_weight: "bold",
                    "{text}"
                }
            }
            span { style: "font-size: 13px; color: #555;", "{props.label}" }
        }
    }
}
