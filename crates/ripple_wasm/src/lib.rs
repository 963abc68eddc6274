//! WASM bindings exposing the Ripple simulation driver to a JS host.

mod payload;
pub mod system;

pub use system::{sine_wave_payload, WasmSimulation};
