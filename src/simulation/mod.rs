//! World - falling-particle simulation
//!
//! WorldCore only orchestrates:
//! - cell storage lives in grid/
//! - movement rules live in behaviors/
//! - paint, step, clock and render export are split into the files below
//!
//! The host owns the world and drives it through `&mut self`, so a tick and a
//! paint can never interleave.

use crate::behaviors::BehaviorRegistry;
use crate::domain::config::{SimConfig, MAX_GRID_SIZE};
use crate::domain::errors::PaintError;
use crate::domain::materials::Material;
use crate::grid::{Cell, Grid, ParticleMove};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "step/clock.rs"]
mod clock;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use clock::TickClock;
pub use facade::World;
pub use perf_stats::StepStats;
pub use render_extract::{OccupiedCell, RENDER_WORDS_PER_CELL};

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    grid: Grid,
    behaviors: BehaviorRegistry,
    clock: TickClock,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: StepStats,

    // Reused by extract_render_buffer: [row, col, material, abgr] per occupied cell
    render_buffer: Vec<u32>,
}

impl WorldCore {
    /// Create an empty N x N world with default settings.
    /// N is clamped to `1..=MAX_GRID_SIZE`; use `with_config` to reject instead.
    pub fn new(size: u32) -> Self {
        let clamped = size.clamp(1, MAX_GRID_SIZE);
        if clamped != size {
            log::warn!("grid size {} out of range, using {}", size, clamped);
        }
        init::create_world_core(SimConfig::with_grid_size(clamped))
    }

    /// Create a world from a validated config
    pub fn with_config(config: SimConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_world_core(config))
    }

    /// Create a world from a JSON config (see `SimConfig`)
    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json)?;
        Ok(init::create_world_core(config))
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn size(&self) -> u32 { self.grid.size() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Number of non-Empty cells
    pub fn particle_count(&self) -> u32 { self.grid.occupied_count() }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Read one cell (None past the perimeter)
    pub fn get(&self, row: i64, col: i64) -> Option<Cell> {
        self.grid.try_get(row, col)
    }

    // === Settings ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        settings::get_perf_stats(self)
    }

    pub fn set_tick_ms(&mut self, tick_ms: f64) -> Result<(), String> {
        settings::set_tick_ms(self, tick_ms)
    }

    pub fn set_material_enabled(&mut self, material: Material, enabled: bool) -> Result<(), String> {
        settings::set_material_enabled(self, material, enabled)
    }

    // === Commands ===

    /// Place a particle into an Empty cell
    pub fn paint(&mut self, row: i64, col: i64, material: Material) -> Result<(), PaintError> {
        commands::paint(self, row, col, material)
    }

    /// Paint every free cell in a disc, returns how many were placed
    pub fn paint_radius(&mut self, center_row: i64, center_col: i64, radius: i32, material: Material) -> u32 {
        commands::paint_radius(self, center_row, center_col, radius, material)
    }

    /// Reset every cell to Empty
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Simulation ===

    /// Advance the world by exactly one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Feed elapsed host time, run as many whole ticks as it covers.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        clock::advance(self, elapsed_ms)
    }

    pub fn clock(&self) -> &TickClock { &self.clock }

    /// Moves applied by the last tick (from_row, from_col, to_row, to_col)
    pub fn last_moves(&self) -> &[ParticleMove] {
        self.grid.pending_moves.as_slice()
    }

    // === Render export ===

    /// Snapshot of every occupied cell, row-major
    pub fn occupied_cells(&self) -> Vec<OccupiedCell> {
        render_extract::occupied_cells(self)
    }

    /// Fill the packed render buffer, returns the number of cells written
    pub fn extract_render_buffer(&mut self) -> usize {
        render_extract::extract_render_buffer(self)
    }

    pub fn render_buffer(&self) -> &[u32] {
        &self.render_buffer
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
