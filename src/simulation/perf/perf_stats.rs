use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Counters for the last tick. Only filled while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) particles_processed: u32,
    pub(super) particles_moved: u32,
    pub(super) particles_swapped: u32,
    pub(super) occupied_cells: u32,
    pub(super) frame: u64,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_processed(&self) -> u32 { self.particles_processed }
    #[wasm_bindgen(getter)]
    pub fn particles_moved(&self) -> u32 { self.particles_moved }
    #[wasm_bindgen(getter)]
    pub fn particles_swapped(&self) -> u32 { self.particles_swapped }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
