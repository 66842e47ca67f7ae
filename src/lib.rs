// Tornado particle backend. Rust owns the funnel and debris particle state and
// their flat position buffers; the page owns the scene and calls `tick()` once
// per animation frame.

#[macro_use]
pub mod timer;
mod utils;

pub mod error;
pub mod forces;
pub mod frame;
pub mod params;
pub mod particle;
pub mod population;
pub mod simulation;
pub mod spawn;
pub mod tornado_sim;
pub mod update;

extern crate nalgebra_glm as glm;
use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub use error::SimError;
pub use frame::{PanInput, VortexFrame};
pub use params::VortexParams;
pub use particle::{ParticleState, Species};
pub use population::Population;
pub use simulation::Simulation;
pub use tornado_sim::TornadoSim;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    console_log!("tornado backend {} initialized", env!("CARGO_PKG_VERSION"));
}
