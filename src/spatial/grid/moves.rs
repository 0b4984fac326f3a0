use super::*;

impl Grid {
    /// Relocate the particle at `src` into the Empty cell `dst`; `src` becomes Empty.
    /// Both cells end up flagged as updated so the scan does not visit the particle twice.
    ///
    /// The caller checks `dst` is Empty. Only asserted in debug builds.
    pub fn move_cell(&mut self, src: (u32, u32), dst: (u32, u32)) {
        let src_idx = self.index(src.0, src.1);
        let dst_idx = self.index(dst.0, dst.1);
        debug_assert!(
            self.materials[dst_idx] == Material::Empty,
            "move_cell: destination ({}, {}) holds {:?}",
            dst.0,
            dst.1,
            self.materials[dst_idx]
        );

        self.materials[dst_idx] = self.materials[src_idx];
        self.colors[dst_idx] = self.colors[src_idx];
        self.updated[dst_idx] = 1;

        self.materials[src_idx] = Material::Empty;
        self.colors[src_idx] = Rgb::BLACK;
        self.updated[src_idx] = 0;

        if src.0 != dst.0 {
            self.mark_cell_vacated(src.0);
            self.mark_cell_occupied(dst.0);
        }
        self.pending_moves.push((src.0, src.1, dst.0, dst.1));
    }

    /// Exchange two cells unconditionally (sand sinking through water).
    /// Both particles are flagged as updated.
    pub fn swap(&mut self, a: (u32, u32), b: (u32, u32)) {
        let a_idx = self.index(a.0, a.1);
        let b_idx = self.index(b.0, b.1);

        self.materials.swap(a_idx, b_idx);
        self.colors.swap(a_idx, b_idx);
        self.updated[a_idx] = 1;
        self.updated[b_idx] = 1;

        // Row counts only shift when exactly one side was Empty
        let a_empty = self.materials[a_idx] == Material::Empty;
        let b_empty = self.materials[b_idx] == Material::Empty;
        if a.0 != b.0 && a_empty != b_empty {
            let (from_row, to_row) = if a_empty { (a.0, b.0) } else { (b.0, a.0) };
            self.mark_cell_vacated(from_row);
            self.mark_cell_occupied(to_row);
        }
        self.pending_moves.push((a.0, a.1, b.0, b.1));
        self.pending_moves.push((b.0, b.1, a.0, a.1));
    }

    /// Forget the moves recorded by the previous tick
    #[inline]
    pub fn clear_moves(&mut self) {
        self.pending_moves.clear();
    }
}
