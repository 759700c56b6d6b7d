//! Tandem Engine - collision resolution for a two-player platformer
//!
//! Each frame the host hands over its entity collections; the engine
//! pushes players out of solids, carries them on moving platforms, flips
//! switches and reports deaths, completion and sound cues as events.
//!
//! Architecture:
//! - core/        - geometry, logging, timing
//! - domain/      - entities, scene container, config, events
//! - systems/     - classifier, resolvers, audio cue channel
//! - simulation/  - engine orchestration (per tick and per key press)
//! - api/         - wasm-bindgen facade for the JS host

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logger();
    log::info!("tandem engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::CollisionWorld;
pub use crate::core::geometry::{Rect, Vec2};
pub use domain::{CollisionConfig, CollisionPass, FrameEvent, Scene, PASS_ORDER};
pub use simulation::{CollisionEngine, PerfStats};
