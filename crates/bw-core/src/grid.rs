//! Remapping of the fixed-size exterior grids under a rotation step.
//!
//! Cell `(x, z)` lives at flat index `z * size + x`. Every destination cell
//! pulls from the source cell that [`rotate_grid`] names for it.

use crate::error::{BlockError, BlockResult};
use crate::geometry::{RotationStep, rotate_grid};
use crate::terrain::GroundTile;

/// Edge length of the terrain and scenery grids.
pub const TERRAIN_SIZE: usize = 16;
/// Edge length of the auto-map overview grid.
pub const AUTOMAP_SIZE: usize = 64;

/// Fail unless `cells` holds exactly `size * size` entries.
pub fn check_square<T>(grid: &'static str, cells: &[T], size: usize) -> BlockResult<()> {
    let expected = size * size;
    if cells.len() == expected {
        Ok(())
    } else {
        Err(BlockError::GridShape {
            grid,
            expected,
            found: cells.len(),
        })
    }
}

/// Fail unless `rows` is `size` rows of `size` cells each.
pub fn check_rows<T>(grid: &'static str, rows: &[Vec<T>], size: usize) -> BlockResult<()> {
    let found: usize = rows.iter().map(Vec::len).sum();
    if rows.len() == size && rows.iter().all(|row| row.len() == size) {
        Ok(())
    } else {
        Err(BlockError::GridShape {
            grid,
            expected: size * size,
            found,
        })
    }
}

/// Concatenate rows into a single flat list.
pub fn flatten<T: Clone>(rows: &[Vec<T>]) -> Vec<T> {
    rows.iter().flat_map(|row| row.iter().cloned()).collect()
}

/// Split a flat list into rows of `width` cells.
pub fn nest<T: Clone>(cells: &[T], width: usize) -> Vec<Vec<T>> {
    cells.chunks(width.max(1)).map(<[T]>::to_vec).collect()
}

/// Source flat index for destination cell `(x, z)`.
fn source_index(x: usize, z: usize, size: usize, step: RotationStep) -> usize {
    let (sx, sz) = rotate_grid(x as i32, z as i32, step, size as i32);
    sz as usize * size + sx as usize
}

/// Rotate a square grid of plain cells.
pub fn remap<T: Clone>(
    grid: &'static str,
    cells: &[T],
    size: usize,
    step: RotationStep,
) -> BlockResult<Vec<T>> {
    check_square(grid, cells, size)?;
    let mut out = Vec::with_capacity(cells.len());
    for z in 0..size {
        for x in 0..size {
            out.push(cells[source_index(x, z, size, step)].clone());
        }
    }
    Ok(out)
}

/// Rotate the terrain grid, recoding every tile's orientation flags.
pub fn remap_terrain(tiles: &[GroundTile], step: RotationStep) -> BlockResult<Vec<GroundTile>> {
    let moved = remap("terrain", tiles, TERRAIN_SIZE, step)?;
    Ok(moved.iter().map(|tile| tile.rotated(step)).collect())
}

/// Destination offset applied to scenery cells for each step.
pub fn scenery_offset(step: RotationStep) -> (usize, usize) {
    match step {
        RotationStep::Quarter => (1, 0),
        RotationStep::Half => (1, 1),
        RotationStep::ThreeQuarter => (0, 1),
    }
}

/// Rotate the scenery grid.
///
/// Each destination is shifted by [`scenery_offset`]. A shift past the end of
/// a row spills into the next one; writes past the end of the grid are
/// dropped and vacated cells stay empty.
pub fn remap_scenery<T: Clone + Default>(cells: &[T], step: RotationStep) -> BlockResult<Vec<T>> {
    let size = TERRAIN_SIZE;
    check_square("scenery", cells, size)?;
    let (dx, dz) = scenery_offset(step);
    let mut out = vec![T::default(); cells.len()];
    for z in 0..size {
        for x in 0..size {
            let dest = (z + dz) * size + x + dx;
            if dest < out.len() {
                out[dest] = cells[source_index(x, z, size, step)].clone();
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(size: usize) -> Vec<usize> {
        (0..size * size).collect()
    }

    #[test]
    fn remap_is_a_permutation() {
        for step in RotationStep::ALL {
            let mut out = remap("automap", &numbered(AUTOMAP_SIZE), AUTOMAP_SIZE, step).unwrap();
            out.sort_unstable();
            assert_eq!(out, numbered(AUTOMAP_SIZE));
        }
    }

    #[test]
    fn remap_quarter_turn_pulls_from_rotated_index() {
        let out = remap("terrain", &numbered(TERRAIN_SIZE), TERRAIN_SIZE, RotationStep::Quarter)
            .unwrap();
        // destination (0, 0) reads source (0, 15)
        assert_eq!(out[0], 15 * TERRAIN_SIZE);
        // destination (3, 5) reads source (5, 12)
        assert_eq!(out[5 * TERRAIN_SIZE + 3], 12 * TERRAIN_SIZE + 5);
    }

    #[test]
    fn quarter_then_three_quarter_restores() {
        let cells = numbered(TERRAIN_SIZE);
        let once = remap("terrain", &cells, TERRAIN_SIZE, RotationStep::Quarter).unwrap();
        let back = remap("terrain", &once, TERRAIN_SIZE, RotationStep::ThreeQuarter).unwrap();
        assert_eq!(back, cells);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let err = remap("automap", &[0u8; 10], AUTOMAP_SIZE, RotationStep::Half).unwrap_err();
        assert!(matches!(
            err,
            BlockError::GridShape {
                grid: "automap",
                expected: 4096,
                found: 10
            }
        ));
    }

    #[test]
    fn terrain_tiles_are_recoded() {
        let tiles = vec![GroundTile::from_bitfield(7); 256];
        let out = remap_terrain(&tiles, RotationStep::Quarter).unwrap();
        assert!(out.iter().all(|t| t.is_rotated && t.is_flipped && t.texture_record == 7));
    }

    #[test]
    fn scenery_drops_cells_pushed_off_the_end() {
        let cells: Vec<usize> = (1..=256).collect();
        let out = remap_scenery(&cells, RotationStep::Half).unwrap();
        // the shifted writes never reach the first cells
        assert_eq!(out[0], 0);
        assert_eq!(out[1], 0);
        // the last row and the final cell of the row before it fall off
        assert_eq!(out.iter().filter(|&&v| v != 0).count(), 256 - 17);
    }

    #[test]
    fn scenery_offset_shifts_destination() {
        let cells: Vec<usize> = (1..=256).collect();
        let out = remap_scenery(&cells, RotationStep::ThreeQuarter).unwrap();
        // destination (0, 0) is shifted to (0, 1); its source is rotate_grid(0, 0) = (15, 0)
        assert_eq!(out[TERRAIN_SIZE], 16);
    }

    #[test]
    fn nest_and_flatten() {
        let rows = nest(&numbered(4), 4);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec![4, 5, 6, 7]);
        assert_eq!(flatten(&rows), numbered(4));
        assert!(check_rows("terrain", &rows, 4).is_ok());
        assert!(check_rows("terrain", &rows[..3], 4).is_err());
    }
}
