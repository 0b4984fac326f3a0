//! Simulation config - one parameterized engine instead of per-size copies
//!
//! Loaded from camelCase JSON, same shape the host ships next to the wasm:
//! `{ "gridSize": 256, "tickMs": 60, "maxTicksPerAdvance": 8, "enabledMaterials": ["sand", "water", "wood"] }`
//! Every field is optional and falls back to the defaults below.

use serde::{Deserialize, Serialize};

use super::materials::{Material, PAINTABLE_MATERIALS};

pub const DEFAULT_GRID_SIZE: u32 = 256;
pub const DEFAULT_TICK_MS: f64 = 60.0;
pub const DEFAULT_MAX_TICKS_PER_ADVANCE: u32 = 8;
/// Largest N whose N * N cell count still fits in u32
pub const MAX_GRID_SIZE: u32 = 65_535;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Side length N of the square grid
    pub grid_size: u32,
    /// Duration of one tick in milliseconds
    pub tick_ms: f64,
    /// Upper bound on ticks run by a single `advance` call
    pub max_ticks_per_advance: u32,
    pub enabled_materials: Vec<Material>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            tick_ms: DEFAULT_TICK_MS,
            max_ticks_per_advance: DEFAULT_MAX_TICKS_PER_ADVANCE,
            enabled_materials: PAINTABLE_MATERIALS.to_vec(),
        }
    }
}

impl SimConfig {
    pub fn with_grid_size(grid_size: u32) -> Self {
        Self {
            grid_size,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("gridSize must be at least 1".to_string());
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(format!("gridSize {} is too large", self.grid_size));
        }
        if !(self.tick_ms.is_finite() && self.tick_ms > 0.0) {
            return Err(format!("tickMs must be a positive number, got {}", self.tick_ms));
        }
        if self.max_ticks_per_advance == 0 {
            return Err("maxTicksPerAdvance must be at least 1".to_string());
        }
        if self.enabled_materials.contains(&Material::Empty) {
            return Err("enabledMaterials cannot contain empty".to_string());
        }
        Ok(())
    }

    #[inline]
    pub fn is_enabled(&self, material: Material) -> bool {
        self.enabled_materials.contains(&material)
    }
}
