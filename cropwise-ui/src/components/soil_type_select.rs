//! Soil type dropdown.

use cropwise_core::soil::SoilType;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SoilTypeSelectProps {
    /// Raw value as held by the form ("" when nothing is chosen)
    pub value: String,
    #[props(!optional)]
    pub error: Option<String>,
    pub onchange: EventHandler<String>,
}

#[component]
pub fn SoilTypeSelect(props: SoilTypeSelectProps) -> Element {
    let current: Option<SoilType> = props.value.parse().ok();

    rsx! {
        div {
            style: "margin-bottom: 14px;",
            label {
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                r#for: "soilType",
                "Soil type"
            }
            select {
                id: "soilType",
                style: "width: 100%; padding: 6px;",
                onchange: move |evt: Event<FormData>| props.onchange.call(evt.value()),
                option { value: "", selected: current.is_none(), disabled: true, "Select soil type" }
                for soil in SoilType::ALL {
                    option {
                        key: "{soil.as_str()}",
                        value: "{soil.as_str()}",
                        selected: current == Some(soil),
                        "{soil.label()}"
                    }
                }
            }
            if let Some(err) = props.error.as_ref() {
                p { style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;", "{err}" }
            }
        }
    }
}
