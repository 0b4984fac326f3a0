use crate::behaviors::{Outcome, UpdateContext};
use crate::domain::materials::{Category, Material};

use super::{PerfTimer, WorldCore};

/// One tick: rows bottom to top (gravity side first), columns left to right,
/// every particle at most once.
///
/// Scanning from the floor up lets a grain fall into a slot vacated earlier in
/// the same tick, so a falling column drops as a unit. The `updated` flags stop
/// a particle that slid right into a not-yet-scanned cell from moving twice.
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    world.grid.reset_updated();
    world.grid.clear_moves();

    let size = world.grid.size();
    for row in (0..size).rev() {
        if !world.grid.row_has_data(row) {
            continue;
        }
        for col in 0..size {
            let outcome = update_particle(world, row, col);
            if perf_on {
                record_outcome(world, outcome);
            }
        }
    }

    if world.grid.pending_moves.overflow_count() > 0 {
        log::debug!(
            "move buffer regrew {} time(s) this tick (capacity now {})",
            world.grid.pending_moves.overflow_count(),
            world.grid.pending_moves.capacity()
        );
    }

    world.frame += 1;

    if let Some(t0) = step_start {
        world.perf_stats.step_ms = t0.elapsed_ms();
        world.perf_stats.occupied_cells = world.grid.occupied_count();
        world.perf_stats.frame = world.frame;
    }
}

/// Run the behavior for the particle at (row, col), if it still has its move this tick
fn update_particle(world: &mut WorldCore, row: u32, col: u32) -> Option<Outcome> {
    let idx = world.grid.index(row, col);
    let material = world.grid.materials[idx];
    if material == Material::Empty || world.grid.is_updated_idx(idx) {
        return None;
    }

    let category = material.category();
    if category == Category::Solid {
        return None;
    }

    let mut ctx = UpdateContext {
        grid: &mut world.grid,
        row,
        col,
    };
    Some(world.behaviors.update(category, &mut ctx))
}

fn record_outcome(world: &mut WorldCore, outcome: Option<Outcome>) {
    let Some(outcome) = outcome else {
        return;
    };
    let stats = &mut world.perf_stats;
    stats.particles_processed = stats.particles_processed.saturating_add(1);
    match outcome {
        Outcome::Moved { .. } => stats.particles_moved = stats.particles_moved.saturating_add(1),
        Outcome::Swapped { .. } => stats.particles_swapped = stats.particles_swapped.saturating_add(1),
        Outcome::Stayed => {}
    }
}
