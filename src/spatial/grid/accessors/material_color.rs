use super::super::*;

impl Grid {
    /// True only for an in-bounds Empty cell. Past the perimeter counts as blocked.
    #[inline]
    pub fn is_empty(&self, row: i64, col: i64) -> bool {
        if !self.in_bounds(row, col) { return false; }
        self.materials[self.index(row as u32, col as u32)] == Material::Empty
    }

    #[inline]
    pub fn is_empty_idx(&self, idx: usize) -> bool {
        self.materials[idx] == Material::Empty
    }

    // === Material access ===
    #[inline]
    pub fn material(&self, row: u32, col: u32) -> Material {
        self.materials[self.index(row, col)]
    }

    /// Material at a possibly out-of-range coordinate (None past the perimeter)
    #[inline]
    pub fn material_at(&self, row: i64, col: i64) -> Option<Material> {
        if !self.in_bounds(row, col) { return None; }
        Some(self.materials[self.index(row as u32, col as u32)])
    }

    // === Color access ===
    #[inline]
    pub fn color(&self, row: u32, col: u32) -> Rgb {
        self.colors[self.index(row, col)]
    }

    /// Read-only copy of one cell
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Cell {
        let idx = self.index(row, col);
        Cell {
            material: self.materials[idx],
            color: self.colors[idx],
        }
    }

    /// Checked read for coordinates coming from outside
    pub fn try_get(&self, row: i64, col: i64) -> Option<Cell> {
        if !self.in_bounds(row, col) { return None; }
        Some(self.get(row as u32, col as u32))
    }
}
