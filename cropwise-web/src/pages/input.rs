//! Soil and climate data entry.
//!
//! The form lives in a [`FormController`] held by a signal; it is pre-filled
//! from the saved record when one exists. On a valid submit the record is
//! written to the session slot and the user moves on to recommendations.

use super::{use_flash, FlashBanner, CARD_STYLE, INPUT_STYLE, PRIMARY_BUTTON};
use cropwise_core::field::FieldId;
use cropwise_core::flow::FlowEvent;
use cropwise_core::form::FormController;
use cropwise_core::navigation::View;
use cropwise_ui::components::{ParameterSlider, SoilTypeSelect};
use cropwise_ui::state::{AppState, NotificationKind};
use cropwise_ui::storage::session_transfer;
use dioxus::prelude::*;

#[component]
pub fn Input() -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();
    let flash = use_flash();

    let (mut form, subscription) = use_hook(|| {
        let saved = session_transfer().ok().and_then(|t| t.load().ok().flatten());
        let mut controller = saved
            .as_ref()
            .map(FormController::from_record)
            .unwrap_or_default();
        let id = controller.subscribe(|field, raw| {
            log::debug!("[CropWise] input: {} = {raw:?}", field.key());
        });
        (Signal::new(controller), id)
    });

    use_drop(move || {
        if let Ok(mut controller) = form.try_write() {
            controller.unsubscribe(subscription);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut submitted = None;
        let outcome = form.write().submit(|record| submitted = Some(record));
        let record = match (outcome, submitted) {
            (Ok(()), Some(record)) => record,
            (Err(errors), _) => {
                log::info!("[CropWise] input: {} field(s) need attention", errors.len());
                return;
            }
            (Ok(()), None) => return,
        };

        match session_transfer().and_then(|transfer| transfer.save(&record)) {
            Ok(()) => {
                let _ = state.advance(FlowEvent::DataSaved);
                state.notify(
                    NotificationKind::Success,
                    "Data saved",
                    format!("Analysing {} soil in {}.", record.soil_type.as_str(), record.location),
                );
                nav.push(View::Recommendations.path());
            }
            Err(err) => {
                state.notify(NotificationKind::Error, "Could not save data", err.to_string());
            }
        }
    };

    let controller = form.read();
    let sliders: Vec<_> = FieldId::NUMERIC
        .iter()
        .map(|field| {
            (
                *field,
                controller.value(*field).to_string(),
                controller.error(*field).map(|e| e.to_string()),
            )
        })
        .collect();
    let location = controller.value(FieldId::Location).to_string();
    let location_error = controller.error(FieldId::Location).map(|e| e.to_string());
    let soil = controller.value(FieldId::SoilType).to_string();
    let soil_error = controller.error(FieldId::SoilType).map(|e| e.to_string());
    let error_count = controller.errors().len();
    drop(controller);

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; {CARD_STYLE}",
            h2 { style: "margin-top: 0;", "{View::Input.title()}" }
            if let Some(message) = flash {
                FlashBanner { message }
            }
            form {
                onsubmit: on_submit,
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 0 16px;",
                    for (field, value, error) in sliders {
                        ParameterSlider {
                            key: "{field.key()}",
                            field,
                            value,
                            error,
                            oninput: move |raw: String| form.write().set(field, raw),
                        }
                    }
                }
                div {
                    style: "margin-bottom: 14px;",
                    label { r#for: "location", style: "font-weight: bold; display: block; margin-bottom: 4px;", "Location" }
                    input {
                        id: "location",
                        style: INPUT_STYLE,
                        placeholder: "e.g. Fresno, CA",
                        value: "{location}",
                        oninput: move |evt: Event<FormData>| form.write().set(FieldId::Location, evt.value()),
                    }
                    if let Some(err) = location_error {
                        p { style: "margin: 4px 0 0 0; font-size: 12px; color: #C62828;", "{err}" }
                    }
                }
                SoilTypeSelect {
                    value: soil,
                    error: soil_error,
                    onchange: move |raw: String| form.write().set(FieldId::SoilType, raw),
                }
                if error_count > 0 {
                    p { style: "color: #C62828; font-size: 13px;", "Please fix the highlighted fields." }
                }
                div {
                    style: "display: flex; gap: 8px;",
                    button { r#type: "submit", style: PRIMARY_BUTTON, "Get recommendations" }
                    button {
                        r#type: "button",
                        style: "background: none; border: 1px solid #d1d5db; border-radius: 6px; padding: 10px 16px; cursor: pointer;",
                        onclick: move |_| form.write().reset(),
                        "Reset"
                    }
                }
            }
        }
    }
}
