use super::super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    // === Updated flag ===
    #[inline]
    pub fn is_updated(&self, row: u32, col: u32) -> bool {
        self.updated[self.index(row, col)] == 1
    }

    #[inline]
    pub fn is_updated_idx(&self, idx: usize) -> bool {
        self.updated[idx] == 1
    }

    /// Reset updated flags for all cells (start of every tick)
    #[inline]
    pub fn reset_updated(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.updated.par_iter_mut().for_each(|v| *v = 0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.updated.fill(0);
        }
    }
}
