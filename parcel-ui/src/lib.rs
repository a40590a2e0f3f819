//! Shared Dioxus components and JS bridge for the parcel valuation app.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3.js trend chart via `js_sys::eval()`
//! - `payload`: JSON payloads handed to the JS side
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (search form, parcel cards, map, chart)

pub mod js_bridge;
pub mod payload;
pub mod state;
pub mod components;
