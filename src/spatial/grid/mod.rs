//! Grid - Structure of Arrays (SoA) storage for the N x N cell world
//!
//! Instead of: Vec<Cell { material, color, .. }>
//! We have:    materials[], colors[], updated[]  // linear memory, cheap row scans
//!
//! Coordinates are (row, col). Row 0 is the top, rows grow downwards.
//! Index = row * size + col.

use crate::domain::materials::{Material, Rgb};

const MIN_MOVE_BUFFER_CAPACITY: usize = 1024;
const MAX_MOVE_BUFFER_CAPACITY: usize = 1_000_000;

mod move_buffer;
pub use move_buffer::{MoveBuffer, ParticleMove};

mod indexing;
mod accessors;
mod moves;
mod sparse;

/// Copy of one cell's visible state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub material: Material,
    pub color: Rgb,
}

impl Cell {
    pub const EMPTY: Cell = Cell { material: Material::Empty, color: Rgb::BLACK };
}

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    size: u32,
    len: usize,

    pub materials: Vec<Material>,   // Material per cell (Empty = rest state)
    pub colors: Vec<Rgb>,           // Palette color, black when empty
    pub updated: Vec<u8>,           // 1 = already moved this tick

    // Moves recorded during the current tick (from_row, from_col, to_row, to_col)
    pub pending_moves: MoveBuffer,

    // Occupied cells per row, lets the scan skip empty rows
    row_occupied: Vec<u32>,
}

impl Grid {
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        let move_capacity = len.clamp(MIN_MOVE_BUFFER_CAPACITY, MAX_MOVE_BUFFER_CAPACITY);
        Self::new_with_move_buffer_capacity(size, move_capacity)
    }

    pub fn new_with_move_buffer_capacity(size: u32, move_buffer_capacity: usize) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            len,
            materials: vec![Material::Empty; len],
            colors: vec![Rgb::BLACK; len],
            updated: vec![0; len],
            pending_moves: MoveBuffer::new(move_buffer_capacity),
            row_occupied: vec![0u32; size as usize],
        }
    }

    // === Sparse helpers ===
    fn mark_cell_occupied(&mut self, row: u32) {
        let r = row as usize;
        if r < self.row_occupied.len() {
            self.row_occupied[r] = self.row_occupied[r].saturating_add(1);
        }
    }

    fn mark_cell_vacated(&mut self, row: u32) {
        let r = row as usize;
        if r < self.row_occupied.len() {
            self.row_occupied[r] = self.row_occupied[r].saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.cell_count(), 64);
        assert_eq!(grid.count_occupied(), 0);
        assert!((0..8).all(|r| !grid.row_has_data(r)));
        assert_eq!(grid.get(7, 7), Cell::EMPTY);
    }

    #[test]
    fn perimeter_reads_as_blocked() {
        let grid = Grid::new(4);
        assert!(!grid.is_empty(-1, 0));
        assert!(!grid.is_empty(0, 4));
        assert!(grid.is_empty(3, 3));
        assert_eq!(grid.material_at(4, 0), None);
        assert_eq!(grid.offset(0, 0, -1, 0), None);
        assert_eq!(grid.offset(0, 0, 1, 1), Some((1, 1)));
        assert!(grid.try_get(0, -1).is_none());
    }

    #[test]
    fn move_cell_relocates_and_records() {
        let mut grid = Grid::new(4);
        let sand = Material::Sand.color();
        grid.set_cell(0, 1, Material::Sand, sand);
        grid.move_cell((0, 1), (1, 1));

        assert_eq!(grid.get(0, 1), Cell::EMPTY);
        assert_eq!(grid.get(1, 1), Cell { material: Material::Sand, color: sand });
        assert!(grid.is_updated(1, 1));
        assert!(!grid.row_has_data(0));
        assert!(grid.row_has_data(1));
        assert_eq!(grid.pending_moves.as_slice(), &[(0, 1, 1, 1)]);
    }

    #[test]
    fn swap_exchanges_full_contents() {
        let mut grid = Grid::new(2);
        grid.set_cell(0, 0, Material::Sand, Material::Sand.color());
        grid.set_cell(1, 0, Material::Water, Material::Water.color());
        grid.swap((0, 0), (1, 0));

        assert_eq!(grid.material(0, 0), Material::Water);
        assert_eq!(grid.color(0, 0), Material::Water.color());
        assert_eq!(grid.material(1, 0), Material::Sand);
        assert_eq!(grid.occupied_count(), 2);
        assert!(grid.is_updated(0, 0) && grid.is_updated(1, 0));
    }

    #[test]
    fn row_counters_agree_with_arrays() {
        let mut grid = Grid::new(5);
        grid.set_cell(2, 2, Material::Wood, Material::Wood.color());
        grid.set_cell(4, 0, Material::Water, Material::Water.color());
        grid.move_cell((4, 0), (4, 1));
        grid.clear_cell(2, 2);
        assert_eq!(grid.occupied_count(), grid.count_occupied());

        grid.refresh_row_counts();
        assert_eq!(grid.occupied_count(), 1);

        grid.clear();
        assert_eq!(grid.occupied_count(), 0);
        assert!(grid.pending_moves.is_empty());
    }
}
