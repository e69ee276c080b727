//! Shared Dioxus components and browser glue for the booking pages.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Chart.js and Bootstrap tooltips via `js_sys::eval()`
//! - `host`: reads room id and CSRF token from the server-rendered page
//! - `http`: the availability check over `fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (date inputs, alert, price, button, chart canvas)

pub mod components;
pub mod host;
pub mod http;
pub mod js_bridge;
pub mod state;
