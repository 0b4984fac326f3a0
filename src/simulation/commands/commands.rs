use crate::domain::errors::PaintError;
use crate::domain::materials::Material;

use super::WorldCore;

pub(super) fn paint(world: &mut WorldCore, row: i64, col: i64, material: Material) -> Result<(), PaintError> {
    let size = world.grid.size();
    if !world.grid.in_bounds(row, col) {
        let err = PaintError::OutOfBounds { row, col, size };
        log::debug!("paint rejected: {}", err);
        return Err(err);
    }

    if material == Material::Empty || !world.config.is_enabled(material) {
        let err = PaintError::InvalidMaterial(material);
        log::debug!("paint rejected: {}", err);
        return Err(err);
    }

    let (row, col) = (row as u32, col as u32);
    let existing = world.grid.material(row, col);
    if existing != Material::Empty {
        // Expected while a brush drags over existing particles
        let err = PaintError::AlreadyOccupied { row, col, existing };
        log::debug!("paint rejected: {}", err);
        return Err(err);
    }

    world.grid.set_cell(row, col, material, material.color());
    Ok(())
}

pub(super) fn paint_radius(world: &mut WorldCore, center_row: i64, center_col: i64, radius: i32, material: Material) -> u32 {
    if radius < 0 {
        return 0;
    }
    let r = radius as i64;
    let r2 = r * r;
    let mut placed = 0u32;
    for dr in -r..=r {
        for dc in -r..=r {
            if dr * dr + dc * dc <= r2 && paint(world, center_row + dr, center_col + dc, material).is_ok() {
                placed += 1;
            }
        }
    }
    placed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.clock.reset();
    world.frame = 0;
    world.render_buffer.clear();
}
