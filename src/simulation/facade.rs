use wasm_bindgen::prelude::*;

use crate::domain::materials::{Material, MaterialId};

use super::perf_stats::StepStats;
use super::WorldCore;

/// JS-facing handle. Coordinates are (row, col), materials are numeric ids.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty size x size world
    #[wasm_bindgen(constructor)]
    pub fn new(size: u32) -> Self {
        Self {
            core: WorldCore::new(size),
        }
    }

    /// Create a world from a JSON config string
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        self.core.get_perf_stats()
    }

    pub fn set_tick_ms(&mut self, tick_ms: f64) -> Result<(), JsValue> {
        self.core.set_tick_ms(tick_ms).map_err(|e| JsValue::from_str(&e))
    }

    /// Turn a material on or off for painting
    pub fn set_material_enabled(&mut self, material: MaterialId, enabled: bool) -> Result<(), JsValue> {
        let material = Material::from_id(material)
            .ok_or_else(|| JsValue::from_str(&format!("unknown material id {}", material)))?;
        self.core
            .set_material_enabled(material, enabled)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Paint one cell. Returns 0 on success, otherwise the rejection code
    /// (1 = out of bounds, 2 = already occupied, 3 = invalid material).
    pub fn paint(&mut self, row: i32, col: i32, material: MaterialId) -> u8 {
        let Some(material) = Material::from_id(material) else {
            return 3;
        };
        match self.core.paint(row as i64, col as i64, material) {
            Ok(()) => 0,
            Err(e) => e.code(),
        }
    }

    /// Paint a disc of particles (brush). Returns how many were placed.
    pub fn paint_radius(&mut self, center_row: i32, center_col: i32, radius: i32, material: MaterialId) -> u32 {
        match Material::from_id(material) {
            Some(material) => self.core.paint_radius(center_row as i64, center_col as i64, radius, material),
            None => 0,
        }
    }

    /// Material id at (row, col), 0 past the perimeter
    pub fn material_at(&self, row: i32, col: i32) -> MaterialId {
        self.core
            .get(row as i64, col as i64)
            .map_or(Material::Empty.id(), |cell| cell.material.id())
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance exactly one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Feed elapsed milliseconds, returns ticks run
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.core.advance(elapsed_ms)
    }

    /// Refresh the packed render buffer, returns the occupied cell count
    pub fn extract_render_buffer(&mut self) -> usize {
        self.core.extract_render_buffer()
    }

    /// Pointer to the packed render buffer (4 x u32 per cell)
    pub fn render_buffer_ptr(&self) -> *const u32 {
        self.core.render_buffer().as_ptr()
    }

    /// Length of the packed render buffer in u32 elements
    pub fn render_buffer_len(&self) -> usize {
        self.core.render_buffer().len()
    }

    /// JSON array of occupied cells, for hosts that prefer not to read memory directly
    pub fn occupied_cells_json(&self) -> String {
        serde_json::to_string(&self.core.occupied_cells()).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn move_count(&self) -> usize {
        self.core.last_moves().len()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
