//! LiquidBehavior - gravity with lateral spread (water)
//!
//! Same fall order as powder, plus two pure sideways steps, so a liquid
//! that cannot drop keeps seeking its level. No pressure, no mass.

use super::{first_empty, Behavior, Offset, Outcome, UpdateContext};

/// Priority order: down, down-left, down-right, left, right
pub const LIQUID_CANDIDATES: [Offset; 5] = [(1, 0), (1, -1), (1, 1), (0, -1), (0, 1)];

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LiquidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> Outcome {
        match first_empty(ctx.grid, ctx.row, ctx.col, &LIQUID_CANDIDATES) {
            Some(to) => {
                ctx.grid.move_cell((ctx.row, ctx.col), to);
                Outcome::Moved { to }
            }
            None => Outcome::Stayed,
        }
    }
}
