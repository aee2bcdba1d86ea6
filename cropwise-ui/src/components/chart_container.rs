//! Chart container component with loading state.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
}

/// A container div for a D3.js chart with a loading overlay.
///
/// The chart is cleared when the container unmounts so a later render into
/// the same id starts from an empty node.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    let id = props.id.clone();
    use_drop(move || crate::js_bridge::destroy_chart(&id));

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
