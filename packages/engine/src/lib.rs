//! Granule Engine - real-time Verlet particle solver (native + WASM)
//!
//! Advances 10^5-scale populations of unit-diameter particles under gravity
//! and pairwise non-penetration, using sub-stepped implicit-velocity
//! integration and a uniform collision grid.
//!
//! Architecture:
//! - core/       - indexing macros, math, RNG
//! - domain/     - particles and configuration
//! - spatial/    - collision grid
//! - systems/    - contacts, integration, external forces
//! - simulation/ - per-frame orchestration and the JS facade

// Safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

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

    web_sys::console::log_1(&"Granule WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{Particle, ParticleId, ParticleStore, PressurePolicy, SolverConfig};
pub use grid::{CollisionCell, CollisionGrid, CELL_CAPACITY};
pub use simulation::{PerfStats, Solver, SolverCore};
