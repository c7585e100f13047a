//! Orientation angles: 2048 units to a full turn.

use crate::geometry::RotationStep;

/// Units in one full turn.
pub const FULL_TURN: i32 = 2048;
/// Units in one quarter turn (one rotation step).
pub const QUARTER_TURN: i32 = FULL_TURN / 4;

/// Apply `step` to an orientation angle and wrap it back into `(-2048, 2048]`.
///
/// Input outside that range is first reduced into `[0, 2048)`, keeping its
/// value modulo a full turn.
pub fn normalize_angle(original: i32, step: RotationStep) -> i32 {
    let original = if (-FULL_TURN + 1..=FULL_TURN).contains(&original) {
        original
    } else {
        original.rem_euclid(FULL_TURN)
    };
    let mut angle = original - QUARTER_TURN * step.quarter_turns();
    if angle >= FULL_TURN {
        angle -= FULL_TURN;
    }
    if angle <= -FULL_TURN {
        angle += FULL_TURN;
    }
    angle
}
