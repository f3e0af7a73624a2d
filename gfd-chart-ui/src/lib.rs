//! Shared Dioxus components and Plotly.js bridge for the dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js chart calls via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
