//! PowderBehavior - gravity with diagonal spill (sand)
//!
//! Tries straight down, then down-left, then down-right; the first Empty cell wins.
//! When all three are blocked and the cell below holds a liquid, the two swap,
//! so sand sinks through water one row per tick.

use super::{first_empty, Behavior, Offset, Outcome, UpdateContext};
use crate::domain::materials::Category;

/// Priority order: down, down-left, down-right
pub const POWDER_CANDIDATES: [Offset; 3] = [(1, 0), (1, -1), (1, 1)];

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }

    /// Cell straight below, if it holds a liquid the powder can sink into.
    /// Liquid that already moved this tick (e.g. fell in diagonally) is left alone.
    #[inline]
    fn liquid_below(&self, ctx: &UpdateContext) -> Option<(u32, u32)> {
        let (r, c) = ctx.grid.offset(ctx.row, ctx.col, 1, 0)?;
        if ctx.grid.material(r, c).category() == Category::Liquid && !ctx.grid.is_updated(r, c) {
            Some((r, c))
        } else {
            None
        }
    }
}

impl Default for PowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> Outcome {
        let here = (ctx.row, ctx.col);

        if let Some(to) = first_empty(ctx.grid, ctx.row, ctx.col, &POWDER_CANDIDATES) {
            ctx.grid.move_cell(here, to);
            return Outcome::Moved { to };
        }

        if let Some(below) = self.liquid_below(ctx) {
            ctx.grid.swap(here, below);
            return Outcome::Swapped { with: below };
        }

        Outcome::Stayed
    }
}
