use std::fmt;

use super::materials::Material;

/// Why a paint request was turned down. Every variant leaves the grid untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintError {
    /// Coordinate outside `[0, size) x [0, size)`
    OutOfBounds { row: i64, col: i64, size: u32 },
    /// Target cell already holds a particle
    AlreadyOccupied { row: u32, col: u32, existing: Material },
    /// Empty, or a material switched off in the config
    InvalidMaterial(Material),
}

impl PaintError {
    /// Stable numeric code for the JS facade (0 is reserved for success)
    pub fn code(&self) -> u8 {
        match self {
            PaintError::OutOfBounds { .. } => 1,
            PaintError::AlreadyOccupied { .. } => 2,
            PaintError::InvalidMaterial(_) => 3,
        }
    }
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::OutOfBounds { row, col, size } => {
                write!(f, "({}, {}) is outside the {}x{} grid", row, col, size, size)
            }
            PaintError::AlreadyOccupied { row, col, existing } => {
                write!(f, "({}, {}) is already occupied by {}", row, col, existing)
            }
            PaintError::InvalidMaterial(m) => write!(f, "material {} cannot be painted", m),
        }
    }
}

impl std::error::Error for PaintError {}
