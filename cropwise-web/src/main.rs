//! CropWise: crop recommendations from soil and climate readings.
//!
//! Data flow:
//! 1. On mount the embedded crop catalog is loaded into an in-memory SQLite
//!    database and the D3 chart scripts are initialised.
//! 2. The user signs in (simulated), enters readings on `/input`; the
//!    validated record is saved to `sessionStorage`.
//! 3. `/recommendations` reads the record back, scores every crop in the
//!    catalog and renders cards plus D3 charts.
//!
//! Every route renders inside [`Shell`], which runs the navigation guard.

mod pages;
mod shell;

use cropwise_db::Database;
use cropwise_ui::js_bridge;
use cropwise_ui::state::AppState;
use dioxus::prelude::*;

use pages::{Dashboard, Home, Input, Login, NotFound, Recommendations, Register};
use shell::Shell;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/input")]
        Input {},
        #[route("/recommendations")]
        Recommendations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the crop catalog once on mount.
    use_effect(move || {
        match Database::with_builtin_catalog() {
            Ok(db) => {
                match db.query_crops() {
                    Ok(crops) => {
                        dioxus_logger::tracing::info!("catalog ready with {} crops", crops.len());
                        state.catalog.set(crops);
                    }
                    Err(e) => state.error_msg.set(Some(format!("Failed to read crop catalog: {e}"))),
                }
                state.db.set(Some(db));
            }
            Err(e) => state.error_msg.set(Some(format!("Failed to load crop catalog: {e}"))),
        }
        state.loading.set(false);

        js_bridge::init_charts();
    });

    rsx! {
        Router::<Route> {}
    }
}
