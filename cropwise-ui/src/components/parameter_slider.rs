//! Range slider for one numeric soil/climate reading.

use cropwise_core::field::FieldId;
use cropwise_core::metrics::format_reading;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ParameterSliderProps {
    pub field: FieldId,
    /// Raw value as held by the form
    pub value: String,
    #[props(!optional)]
    pub error: Option<String>,
    /// Receives the raw slider value on every move
    pub oninput: EventHandler<String>,
}

/// Labelled slider bounded by the field's interval, with an inline error.
#[component]
pub fn ParameterSlider(props: ParameterSliderProps) -> Element {
    let field = props.field;
    let (min, max) = field.bounds().unwrap_or((0.0, 100.0));
    let step = field.step();
    let shown = props
        .value
        .trim()
        .parse::<f64>()
        .map(|v| format_reading(field, v))
        .unwrap_or_else(|_| props.value.clone());
    let border = if props.error.is_some() { "#EF4444" } else { "#e5e7eb" };
    let key = field.key();
    let label = field.label();

    rsx! {
        div {
            style: "margin-bottom: 14px; padding: 8px; border: 1px solid {border}; border-radius: 6px;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 14px;",
                label { r#for: "{key}", style: "font-weight: bold;", "{label}" }
                span { style: "color: #16a34a;", "{shown}" }
            }
            input {
                id: "{key}",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{props.value}",
                style: "width: 100%;",
                oninput: move |evt: Event<FormData>| props.oninput.call(evt.value()),
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                span { "{format_reading(field, min)}" }
                span { "{format_reading(field, max)}" }
            }
            if let Some(err) = props.error.as_ref() {
                p { style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;", "{err}" }
            }
        }
    }
}
