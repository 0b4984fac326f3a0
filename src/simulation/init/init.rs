use crate::behaviors::BehaviorRegistry;
use crate::domain::config::SimConfig;
use crate::grid::Grid;

use super::perf_stats::StepStats;
use super::{TickClock, WorldCore};

/// Initial capacity for the packed render buffer (cells, not words)
const RENDER_BUFFER_INITIAL_CELLS: usize = 4096;

pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    log::info!(
        "creating {}x{} world (tick {} ms, materials {:?})",
        config.grid_size,
        config.grid_size,
        config.tick_ms,
        config.enabled_materials
    );

    let grid = Grid::new(config.grid_size);
    let clock = TickClock::new(config.tick_ms, config.max_ticks_per_advance);
    let render_cells = grid.cell_count().min(RENDER_BUFFER_INITIAL_CELLS);

    WorldCore {
        grid,
        behaviors: BehaviorRegistry::new(),
        clock,
        frame: 0,
        perf_enabled: false,
        perf_stats: StepStats::default(),
        render_buffer: Vec::with_capacity(render_cells * super::RENDER_WORDS_PER_CELL),
        config,
    }
}
