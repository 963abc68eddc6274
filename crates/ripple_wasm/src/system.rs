//! Core WASM simulation wrapper.

use crate::payload::{sine_wave_json, snapshot_payload, PREVIEW_POINTS};
use js_sys::Function;
use ripple_core::grid::Grid;
use ripple_core::{InitialProfile, ModelKind, Simulation, SimulationSettings};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmSimulation {
    pub(crate) sim: Simulation,
}

pub(crate) fn parse_model(name: &str) -> Option<ModelKind> {
    match name {
        "wave" => Some(ModelKind::Wave),
        "diffusion" => Some(ModelKind::Diffusion),
        _ => None,
    }
}

#[wasm_bindgen]
impl WasmSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(model: &str, wave_speed: f64) -> Result<WasmSimulation, JsValue> {
        console_error_panic_hook::set_once();

        let model = parse_model(model).ok_or_else(|| JsValue::from_str("Unknown model"))?;
        Ok(WasmSimulation {
            sim: Simulation::new(model, wave_speed),
        })
    }

    /// Builds an initialized simulation from a `SimulationSettings` object.
    #[wasm_bindgen(js_name = fromSettings)]
    pub fn from_settings(settings: JsValue) -> Result<WasmSimulation, JsValue> {
        console_error_panic_hook::set_once();

        let settings: SimulationSettings = from_value(settings)
            .map_err(|e| JsValue::from_str(&format!("Invalid settings: {}", e)))?;
        let sim = Simulation::from_settings(&settings)
            .map_err(|e| JsValue::from_str(&format!("Simulation setup failed: {}", e)))?;
        Ok(WasmSimulation { sim })
    }

    /// Starts a run from sin(x).
    pub fn initialize(&mut self, point_count: u32, cfl_fraction: f64) -> Result<(), JsValue> {
        self.sim
            .initialize(point_count as usize, cfl_fraction, f64::sin)
            .map_err(|e| JsValue::from_str(&format!("Initialization failed: {}", e)))
    }

    /// Starts a run from a serialized `InitialProfile`.
    pub fn initialize_with_profile(
        &mut self,
        point_count: u32,
        cfl_fraction: f64,
        profile: JsValue,
    ) -> Result<(), JsValue> {
        let profile: InitialProfile = from_value(profile)
            .map_err(|e| JsValue::from_str(&format!("Invalid profile: {}", e)))?;
        self.sim
            .initialize(point_count as usize, cfl_fraction, |x| profile.evaluate(x))
            .map_err(|e| JsValue::from_str(&format!("Initialization failed: {}", e)))
    }

    /// Starts a run from a JS callback `(x) => number`.
    pub fn initialize_with_function(
        &mut self,
        point_count: u32,
        cfl_fraction: f64,
        initial_condition: &Function,
    ) -> Result<(), JsValue> {
        let grid = Grid::new(point_count as usize)
            .map_err(|e| JsValue::from_str(&format!("Initialization failed: {}", e)))?;
        let samples = grid
            .coordinates()
            .into_iter()
            .map(|x| {
                initial_condition
                    .call1(&JsValue::NULL, &JsValue::from_f64(x))?
                    .as_f64()
                    .ok_or_else(|| JsValue::from_str("Initial condition must return a number"))
            })
            .collect::<Result<Vec<f64>, JsValue>>()?;
        self.initialize_with_samples(cfl_fraction, samples)
    }

    /// Starts a run from displacement samples taken at the grid coordinates.
    pub fn initialize_with_samples(
        &mut self,
        cfl_fraction: f64,
        samples: Vec<f64>,
    ) -> Result<(), JsValue> {
        self.sim
            .initialize_with_samples(cfl_fraction, samples)
            .map_err(|e| JsValue::from_str(&format!("Initialization failed: {}", e)))
    }

    pub fn is_initialized(&self) -> bool {
        self.sim.is_initialized()
    }

    pub fn advance(&mut self, steps: u32) -> Result<Vec<f64>, JsValue> {
        self.sim
            .advance(steps as usize)
            .map_err(|e| JsValue::from_str(&format!("Advance failed: {}", e)))
    }

    pub fn current_time_step(&self) -> Result<f64, JsValue> {
        self.sim
            .current_time_step()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn simulated_time(&self) -> Result<f64, JsValue> {
        self.sim
            .simulated_time()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn grid_coordinates(&self) -> Result<Vec<f64>, JsValue> {
        self.sim
            .grid()
            .map(Grid::coordinates)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Velocity samples; empty for the diffusion model.
    pub fn velocity(&self) -> Result<Vec<f64>, JsValue> {
        self.sim
            .velocity()
            .map(Option::unwrap_or_default)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// `{ x, f, t, dt }` for the current displacement.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let payload = snapshot_payload(&self.sim)
            .map_err(|e| JsValue::from_str(&format!("Snapshot failed: {:#}", e)))?;
        to_value(&payload).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}

/// One period of sin(x) on 100 points as the JSON string `{"x":[...],"sinWave":[...]}`.
#[wasm_bindgen(js_name = getSineWave)]
pub fn sine_wave_payload() -> Result<JsValue, JsValue> {
    let json = sine_wave_json(PREVIEW_POINTS)
        .map_err(|e| JsValue::from_str(&format!("Sine wave failed: {:#}", e)))?;
    Ok(JsValue::from_str(&json))
}
