//! Grainfall Engine - falling-particle cellular automaton (native + WASM)
//!
//! Architecture:
//! - domain/      - Materials, palette, config, errors
//! - spatial/     - SoA grid storage
//! - systems/     - Movement behaviors (powder, liquid)
//! - simulation/  - World orchestration, tick, paint, render export, JS facade

pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

// Short paths used across the crate
pub use spatial::grid;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32", target_feature = "atomics"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, logger, greeting
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Ignore the error if a logger is already installed (init called twice)
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"Grainfall WASM engine initialized".into());
    }

    #[cfg(not(target_arch = "wasm32"))]
    log::info!("Grainfall engine initialized");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::errors::PaintError;
pub use domain::materials::{Material, MaterialId, Rgb};
pub use grid::{Cell, Grid};
pub use simulation::{OccupiedCell, StepStats, TickClock, World, WorldCore};

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { domain::materials::MAT_EMPTY }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { domain::materials::MAT_SAND }
#[wasm_bindgen]
pub fn mat_water() -> u8 { domain::materials::MAT_WATER }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { domain::materials::MAT_WOOD }
