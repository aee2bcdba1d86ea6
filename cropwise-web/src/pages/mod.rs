//! One module per route.

mod dashboard;
mod home;
mod input;
mod login;
mod not_found;
mod recommendations;
mod register;

pub use dashboard::Dashboard;
pub use home::Home;
pub use input::Input;
pub use login::Login;
pub use not_found::NotFound;
pub use recommendations::Recommendations;
pub use register::Register;

use cropwise_ui::state::AppState;
use dioxus::prelude::*;

/// Message left by the redirect that led here, read once on mount.
fn use_flash() -> Option<String> {
    let mut state = use_context::<AppState>();
    use_hook(move || state.take_flash())
}

#[component]
fn FlashBanner(message: String) -> Element {
    rsx! {
        div {
            role: "status",
            style: "padding: 10px 14px; margin-bottom: 12px; background: #FFFBEB; color: #92400E; border: 1px solid #FCD34D; border-radius: 4px;",
            "{message}"
        }
    }
}

const CARD_STYLE: &str =
    "background: #fff; border: 1px solid #e5e7eb; border-radius: 10px; padding: 16px;";
const PRIMARY_BUTTON: &str =
    "background: #16a34a; color: #fff; border: none; border-radius: 6px; padding: 10px 16px; cursor: pointer; font-size: 15px;";
const INPUT_STYLE: &str =
    "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; box-sizing: border-box;";
