use crate::grid::Grid;

/// Neighbor step as (d_row, d_col). Positive d_row is "down".
pub type Offset = (i32, i32);

/// First candidate, in the given priority order, that is an in-bounds Empty cell.
/// Cells past the perimeter are walls and never qualify.
#[inline]
pub fn first_empty(grid: &Grid, row: u32, col: u32, candidates: &[Offset]) -> Option<(u32, u32)> {
    candidates.iter().find_map(|&(dr, dc)| {
        let (r, c) = grid.offset(row, col, dr, dc)?;
        if grid.is_empty_idx(grid.index(r, c)) {
            Some((r, c))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::materials::Material;

    #[test]
    fn picks_first_in_priority_not_nearest() {
        let mut grid = Grid::new(3);
        grid.set_cell(1, 1, Material::Wood, Material::Wood.color());
        // Both diagonals are free; the left one is listed first.
        let picked = first_empty(&grid, 0, 1, &[(1, 0), (1, -1), (1, 1)]);
        assert_eq!(picked, Some((1, 0)));
    }

    #[test]
    fn perimeter_is_never_a_candidate() {
        let grid = Grid::new(2);
        assert_eq!(first_empty(&grid, 1, 0, &[(1, 0), (1, -1), (0, -1)]), None);
        assert_eq!(first_empty(&grid, 1, 0, &[(1, 0), (0, 1)]), Some((1, 1)));
    }
}
