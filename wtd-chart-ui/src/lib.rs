//! Shared Dioxus components and D3.js bridge for the weather trends dashboard.
//!
//! This crate provides:
//! - `js_bridge`: browser `fetch` of the yearly summary and Rust wrappers for
//!   the D3.js line chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (loading, error, charts, placeholder)

pub mod js_bridge;
pub mod state;
pub mod components;
