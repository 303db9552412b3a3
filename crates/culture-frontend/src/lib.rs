//! # Culture-Frontend
//!
//! Leptos client-side frontend for the organizational culture presentation.
//!
//! ## Features
//!
//! - **Radar Chart**: Collaborative vs. hierarchical culture drawn on a 2D canvas
//!   the first time it scrolls into view
//! - **Animated Statistics**: Spring counters that start when first visible
//! - **Scroll Spy**: Navigation bar that follows the section being read
//! - **Decorative Motion**: Fade-in sections and floating hero particles

pub mod app;
pub mod canvas;
pub mod components;
pub mod pages;
pub mod state;
pub mod utils;

pub use app::App;

use wasm_bindgen::prelude::*;

/// Initialize the application
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing
    tracing_wasm::set_as_global_default();

    tracing::info!("Culture frontend initialized");

    leptos::mount_to_body(App);
}
