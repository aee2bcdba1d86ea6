//! Shared Dioxus components and browser glue for the CropWise web app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `charts`: JSON payloads for those chart functions
//! - `state`: Reactive AppState with Dioxus Signals
//! - `storage`: `sessionStorage` backend for the input transfer slot
//! - `timers`: browser `Scheduler` and timer hooks
//! - `components`: Reusable RSX components (form controls, cards, navigation, etc.)

pub mod charts;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod storage;
pub mod timers;
