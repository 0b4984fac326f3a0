use serde::Serialize;

use crate::domain::materials::{Material, Rgb};

use super::WorldCore;

/// Words per cell in the packed render buffer: row, col, material id, ABGR color
pub const RENDER_WORDS_PER_CELL: usize = 4;

/// One occupied cell, copied out for the host's own geometry
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OccupiedCell {
    pub row: u32,
    pub col: u32,
    pub material: Material,
    pub color: Rgb,
}

pub(super) fn occupied_cells(world: &WorldCore) -> Vec<OccupiedCell> {
    let grid = &world.grid;
    let mut out = Vec::with_capacity(grid.occupied_count() as usize);
    for (idx, &material) in grid.materials.iter().enumerate() {
        if material == Material::Empty {
            continue;
        }
        let (row, col) = grid.coords(idx);
        out.push(OccupiedCell {
            row,
            col,
            material,
            color: grid.colors[idx],
        });
    }
    out
}

pub(super) fn extract_render_buffer(world: &mut WorldCore) -> usize {
    world.render_buffer.clear();
    let grid = &world.grid;
    let buffer = &mut world.render_buffer;

    let mut count = 0usize;
    for (idx, &material) in grid.materials.iter().enumerate() {
        if material == Material::Empty {
            continue;
        }
        let (row, col) = grid.coords(idx);
        buffer.extend_from_slice(&[row, col, material.id() as u32, grid.colors[idx].to_abgr()]);
        count += 1;
    }
    count
}
