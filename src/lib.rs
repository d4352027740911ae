//! Glassbreak Engine - a breakable glass pane for the browser, in WASM
//!
//! Architecture:
//! - core/        - error type, logging bootstrap
//! - domain/      - glass types, colors, sounds, pane options
//! - systems/     - rigid bodies and the physics world
//! - simulation/  - the pane: shards, gestures, fracture, frame step
//! - offline/     - offline asset cache strategy
//! - api/         - wasm-bindgen facade over a canvas

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod offline;
pub mod api;

// Short paths for the commonly used modules
pub use domain::color;
pub use domain::config;
pub use domain::device;
pub use domain::glass;
pub use domain::sound;
pub use systems::physics_world;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::init_logging(log::Level::Info);
    log::info!("glassbreak engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Glass type names accepted by `Pane.update_glass_type`
#[wasm_bindgen]
pub fn glass_types() -> Vec<String> {
    glass::GlassType::ALL.iter().map(|g| g.as_str().to_string()).collect()
}

// Re-export main types
pub use api::Pane;
pub use config::PaneConfig;
pub use crate::core::GlassError;
pub use glass::GlassType;
pub use simulation::PaneCore;
