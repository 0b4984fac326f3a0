use super::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl Grid {
    /// True when the row holds at least one particle (used to skip empty rows)
    #[inline]
    pub fn row_has_data(&self, row: u32) -> bool {
        self.row_occupied
            .get(row as usize)
            .map_or(false, |&n| n > 0)
    }

    /// Number of non-Empty cells, from the per-row counters
    pub fn occupied_count(&self) -> u32 {
        self.row_occupied.iter().sum()
    }

    /// Number of non-Empty cells, counted from the authoritative arrays.
    /// PARALLEL: row scans fan out with Rayon when the feature is enabled.
    pub fn count_occupied(&self) -> u32 {
        #[cfg(feature = "parallel")]
        {
            self.materials
                .par_iter()
                .filter(|&&m| m != Material::Empty)
                .count() as u32
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.materials.iter().filter(|&&m| m != Material::Empty).count() as u32
        }
    }

    /// Rebuild per-row counters from the material array
    pub fn refresh_row_counts(&mut self) {
        let size = self.size as usize;
        if size == 0 {
            return;
        }

        #[cfg(feature = "parallel")]
        {
            let counts: Vec<u32> = self
                .materials
                .par_chunks(size)
                .map(|row| row.iter().filter(|&&m| m != Material::Empty).count() as u32)
                .collect();
            self.row_occupied.copy_from_slice(&counts);
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (r, row) in self.materials.chunks(size).enumerate() {
                self.row_occupied[r] = row.iter().filter(|&&m| m != Material::Empty).count() as u32;
            }
        }
    }
}
