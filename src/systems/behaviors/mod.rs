//! Behaviors - movement rules, one per material category
//!
//! SOLID: Single Responsibility - each behavior handles one category
//! SOLID: Open/Closed - a new category adds a behavior, the scan stays untouched
//!
//! Empty and Solid (wood) cells have no behavior and never move.

mod common;
mod liquid;
mod powder;

pub use common::{first_empty, Offset};
pub use liquid::{LiquidBehavior, LIQUID_CANDIDATES};
pub use powder::{PowderBehavior, POWDER_CANDIDATES};

use crate::domain::materials::Category;
use crate::grid::Grid;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub row: u32,
    pub col: u32,
}

/// What a behavior did with the particle this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Stayed,
    Moved { to: (u32, u32) },
    Swapped { with: (u32, u32) },
}

/// Behavior trait - each category implements this
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> Outcome;
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(&self, category: Category, ctx: &mut UpdateContext) -> Outcome {
        match category {
            Category::Powder => self.powder.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Solid | Category::None => Outcome::Stayed,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
