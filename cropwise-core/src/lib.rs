//! Core of the CropWise farming dashboard.
//!
//! Everything here is free of browser APIs so it runs natively in tests and
//! the CLI as well as in the WASM web app:
//!
//! - [`field`], [`soil`], [`input`] - typed readings, bounds carried in the types
//! - [`validation`], [`form`] - the data-entry schema and form controller
//! - [`session`] - the single `cropInputData` transfer slot
//! - [`catalog`], [`recommend`] - crop profiles and suitability ranking
//! - [`metrics`] - bands, password strength, formatting helpers
//! - [`auth`], [`flow`], [`navigation`] - simulated sign-in, journey state, route guard
//! - [`schedule`], [`weather`] - timer abstraction and dashboard widgets

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod flow;
pub mod form;
pub mod input;
pub mod metrics;
pub mod navigation;
pub mod recommend;
pub mod schedule;
pub mod session;
pub mod soil;
pub mod validation;
pub mod weather;
