use super::*;

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Total number of cells (size * size)
    #[inline]
    pub fn cell_count(&self) -> usize { self.len }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        (row as usize) * (self.size as usize) + (col as usize)
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let size = self.size as usize;
        ((idx / size) as u32, (idx % size) as u32)
    }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && row < self.size as i64 && col >= 0 && col < self.size as i64
    }

    /// Neighbor at (row + dr, col + dc), or None past the perimeter
    #[inline]
    pub fn offset(&self, row: u32, col: u32, dr: i32, dc: i32) -> Option<(u32, u32)> {
        let r = row as i64 + dr as i64;
        let c = col as i64 + dc as i64;
        if self.in_bounds(r, c) {
            Some((r as u32, c as u32))
        } else {
            None
        }
    }
}
