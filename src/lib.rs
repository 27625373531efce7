//! Browser-based country directory viewer.
//!
//! Fetches the public country dataset once at startup, renders a
//! searchable/filterable card list, and shows a detail panel per country,
//! with a persisted light/dark theme. Compiled to WASM and rendered
//! client-side with Leptos.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
