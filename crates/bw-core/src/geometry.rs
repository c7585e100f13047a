//! Coordinate rotation primitives.
//!
//! Three transforms exist and they are not interchangeable. Grid indices and
//! absolute object positions turn in opposite senses of the same quarter
//! turn, and interior positions rotate about their local origin with no
//! bounding box at all.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BlockError, BlockResult};

/// Edge length of absolute exterior space, in world units.
pub const EXTERIOR_SIZE: i32 = 4096;

/// A clockwise rotation amount applied to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RotationStep {
    /// 90 degrees (step 0).
    Quarter,
    /// 180 degrees (step 1).
    Half,
    /// 270 degrees (step 2).
    ThreeQuarter,
}

impl RotationStep {
    /// Every valid step, in index order.
    pub const ALL: [RotationStep; 3] = [Self::Quarter, Self::Half, Self::ThreeQuarter];

    /// Parse a raw step index. Anything outside `{0, 1, 2}` is rejected.
    pub fn from_index(step: i64) -> BlockResult<Self> {
        match step {
            0 => Ok(Self::Quarter),
            1 => Ok(Self::Half),
            2 => Ok(Self::ThreeQuarter),
            other => Err(BlockError::InvalidRotationStep(other)),
        }
    }

    /// The raw step index (0, 1 or 2).
    pub fn index(self) -> u8 {
        match self {
            Self::Quarter => 0,
            Self::Half => 1,
            Self::ThreeQuarter => 2,
        }
    }

    /// Number of quarter turns this step represents.
    pub fn quarter_turns(self) -> i32 {
        i32::from(self.index()) + 1
    }

    /// The step that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::Quarter => Self::ThreeQuarter,
            Self::Half => Self::Half,
            Self::ThreeQuarter => Self::Quarter,
        }
    }

    /// The orientation digit a block name carries after this rotation.
    pub fn orientation_digit(self) -> char {
        char::from(b'1' + self.index())
    }
}

impl TryFrom<u8> for RotationStep {
    type Error = BlockError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(i64::from(value))
    }
}

impl From<RotationStep> for u8 {
    fn from(step: RotationStep) -> Self {
        step.index()
    }
}

impl fmt::Display for RotationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.quarter_turns() * 90)
    }
}

/// Rotate `|z|` and put the sign of `z` back on the output's z component.
fn signed_z(x: i32, z: i32, turn: impl FnOnce(i32, i32) -> (i32, i32)) -> (i32, i32) {
    let (rx, rz) = turn(x, z.wrapping_abs());
    if z < 0 { (rx, rz.wrapping_neg()) } else { (rx, rz) }
}

/// Rotate a zero-based index pair inside a `size`-wide grid.
///
/// Arithmetic wraps for coordinates far outside the grid, so extreme input
/// gives a meaningless result instead of a panic.
pub fn rotate_grid(x: i32, z: i32, step: RotationStep, size: i32) -> (i32, i32) {
    let n = size.wrapping_sub(1);
    signed_z(x, z, |x, z| match step {
        RotationStep::Quarter => (z, n.wrapping_sub(x)),
        RotationStep::Half => (n.wrapping_sub(x), n.wrapping_sub(z)),
        RotationStep::ThreeQuarter => (n.wrapping_sub(z), x),
    })
}

/// Rotate an absolute object position inside a `size`-wide space.
///
/// Positions are continuous and may sit on the far edge, so the span is
/// `size` itself rather than the last index. That holds for every step:
/// the half turn here maps `x` to `size - x`, one unit away from
/// [`rotate_grid`]'s `size - 1 - x`. Arithmetic wraps like [`rotate_grid`].
pub fn rotate_object(x: i32, z: i32, step: RotationStep, size: i32) -> (i32, i32) {
    let n = size;
    signed_z(x, z, |x, z| match step {
        RotationStep::Quarter => (n.wrapping_sub(z), x),
        RotationStep::Half => (n.wrapping_sub(x), n.wrapping_sub(z)),
        RotationStep::ThreeQuarter => (z, n.wrapping_sub(x)),
    })
}

/// Rotate a position relative to its owning sub-record's origin.
pub fn rotate_local(x: i32, z: i32, step: RotationStep) -> (i32, i32) {
    match step {
        RotationStep::Quarter => (z, x.wrapping_neg()),
        RotationStep::Half => (x.wrapping_neg(), z.wrapping_neg()),
        RotationStep::ThreeQuarter => (z.wrapping_neg(), x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_from_index_rejects_out_of_range() {
        assert_eq!(RotationStep::from_index(1).unwrap(), RotationStep::Half);
        assert!(matches!(
            RotationStep::from_index(3),
            Err(BlockError::InvalidRotationStep(3))
        ));
        assert!(matches!(
            RotationStep::from_index(-1),
            Err(BlockError::InvalidRotationStep(-1))
        ));
    }

    #[test]
    fn orientation_digits() {
        let digits: Vec<char> = RotationStep::ALL
            .iter()
            .map(|s| s.orientation_digit())
            .collect();
        assert_eq!(digits, vec!['1', '2', '3']);
    }

    #[test]
    fn grid_quarter_turn() {
        assert_eq!(rotate_grid(0, 0, RotationStep::Quarter, 16), (0, 15));
        assert_eq!(rotate_grid(3, 5, RotationStep::Quarter, 16), (5, 12));
        assert_eq!(rotate_grid(3, 5, RotationStep::Half, 16), (12, 10));
        assert_eq!(rotate_grid(3, 5, RotationStep::ThreeQuarter, 16), (10, 3));
    }

    #[test]
    fn object_position_example() {
        assert_eq!(
            rotate_object(100, 200, RotationStep::Quarter, EXTERIOR_SIZE),
            (3896, 100)
        );
        assert_eq!(
            rotate_object(100, 200, RotationStep::ThreeQuarter, EXTERIOR_SIZE),
            (200, 3996)
        );
    }

    #[test]
    fn grid_and_object_turn_in_opposite_senses() {
        let g = rotate_grid(3, 5, RotationStep::Quarter, 16);
        let o = rotate_object(3, 5, RotationStep::Quarter, 15);
        assert_ne!(g, o);
        assert_eq!(o, rotate_grid(3, 5, RotationStep::ThreeQuarter, 16));
    }

    #[test]
    fn negative_z_keeps_its_sign() {
        assert_eq!(rotate_grid(2, -4, RotationStep::Quarter, 16), (4, -13));
        assert_eq!(rotate_object(2, -4, RotationStep::Half, 4096), (4094, -4092));
    }

    #[test]
    fn local_rotation_has_no_bounds() {
        assert_eq!(rotate_local(10, 20, RotationStep::Quarter), (20, -10));
        assert_eq!(rotate_local(10, 20, RotationStep::Half), (-10, -20));
        assert_eq!(rotate_local(10, 20, RotationStep::ThreeQuarter), (-20, 10));
    }

    #[test]
    fn inverse_undoes_step() {
        for step in RotationStep::ALL {
            let (x, z) = rotate_grid(7, 2, step, 16);
            assert_eq!(rotate_grid(x, z, step.inverse(), 16), (7, 2));
            let (x, z) = rotate_object(700, 200, step, EXTERIOR_SIZE);
            assert_eq!(rotate_object(x, z, step.inverse(), EXTERIOR_SIZE), (700, 200));
            let (x, z) = rotate_local(-70, 20, step);
            assert_eq!(rotate_local(x, z, step.inverse()), (-70, 20));
        }
    }

    #[test]
    fn object_half_turn_spans_full_size() {
        assert_eq!(rotate_object(3, 5, RotationStep::Half, 16), (13, 11));
        assert_eq!(rotate_grid(3, 5, RotationStep::Half, 16), (12, 10));
    }

    #[test]
    fn extreme_coordinates_do_not_panic() {
        for step in RotationStep::ALL {
            for v in [i32::MIN, i32::MIN + 1, -1, i32::MAX] {
                let _ = rotate_grid(v, v, step, 16);
                let _ = rotate_object(v, v, step, EXTERIOR_SIZE);
                let _ = rotate_local(v, v, step);
            }
        }
    }
}
