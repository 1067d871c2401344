//! Shared Dioxus components and D3.js bridge for the facilities dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar and pie charts via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Sidebar controls and chart layout pieces

pub mod js_bridge;
pub mod state;
pub mod components;
