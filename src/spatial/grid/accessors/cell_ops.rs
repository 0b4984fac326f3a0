use super::super::*;

impl Grid {
    // === Place a particle with its color ===
    // New particles are NOT marked updated, so they take part in the next tick.
    pub fn set_cell(&mut self, row: u32, col: u32, material: Material, color: Rgb) {
        let idx = self.index(row, col);
        let prev = self.materials[idx];
        self.materials[idx] = material;
        self.colors[idx] = if material == Material::Empty { Rgb::BLACK } else { color };
        self.updated[idx] = 0;

        if prev == Material::Empty && material != Material::Empty {
            self.mark_cell_occupied(row);
        } else if prev != Material::Empty && material == Material::Empty {
            self.mark_cell_vacated(row);
        }
    }

    // === Reset a single cell to Empty ===
    pub fn clear_cell(&mut self, row: u32, col: u32) {
        let idx = self.index(row, col);
        let prev = self.materials[idx];
        self.materials[idx] = Material::Empty;
        self.colors[idx] = Rgb::BLACK;
        self.updated[idx] = 0;

        if prev != Material::Empty {
            self.mark_cell_vacated(row);
        }
    }

    // === Clear entire grid ===
    pub fn clear(&mut self) {
        self.materials.fill(Material::Empty);
        self.colors.fill(Rgb::BLACK);
        self.updated.fill(0);
        self.row_occupied.fill(0);
        self.pending_moves.clear();
    }
}
