//! Terrain tile orientation codec.
//!
//! A ground tile packs its texture and two orientation flags into a single
//! byte: bits 0-5 hold the texture record, bit 6 is `rotated` and bit 7 is
//! `flipped`. The two flags only reach four of the eight dihedral states, so
//! a quarter turn is a lookup in a fixed table rather than boolean algebra.

use serde::{Deserialize, Serialize};

use crate::geometry::RotationStep;

/// Bit set when the tile texture is rotated.
pub const ROTATED_BIT: u8 = 0x40;
/// Bit set when the tile texture is flipped.
pub const FLIPPED_BIT: u8 = 0x80;
/// Mask selecting the texture record.
pub const TEXTURE_MASK: u8 = 0x3F;

/// The four orientation states a ground tile can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileOrientation {
    /// Neither rotated nor flipped.
    Upright,
    /// Flipped only.
    Flipped,
    /// Rotated only.
    Rotated,
    /// Both rotated and flipped.
    RotatedFlipped,
}

use TileOrientation::{Flipped, Rotated, RotatedFlipped, Upright};

/// Target orientation, indexed by `[step][source as usize]`.
const TRANSITIONS: [[TileOrientation; 4]; 3] = [
    // 90°
    [RotatedFlipped, Rotated, Upright, Flipped],
    // 180°
    [Flipped, Upright, RotatedFlipped, Rotated],
    // 270°
    [Rotated, RotatedFlipped, Flipped, Upright],
];

impl TileOrientation {
    /// Build from the two stored flags.
    pub fn from_flags(rotated: bool, flipped: bool) -> Self {
        match (rotated, flipped) {
            (false, false) => Upright,
            (false, true) => Flipped,
            (true, false) => Rotated,
            (true, true) => RotatedFlipped,
        }
    }

    /// The `(rotated, flipped)` flag pair.
    pub fn flags(self) -> (bool, bool) {
        match self {
            Upright => (false, false),
            Flipped => (false, true),
            Rotated => (true, false),
            RotatedFlipped => (true, true),
        }
    }

    /// The orientation after turning the tile by `step`.
    pub fn rotate(self, step: RotationStep) -> Self {
        TRANSITIONS[usize::from(step.index())][self as usize]
    }
}

/// One cell of the 16×16 terrain grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTile {
    /// The packed byte as stored on disk.
    pub tile_bitfield: u8,
    /// Texture record (bits 0-5 of the bitfield).
    pub texture_record: u8,
    /// Whether the texture is rotated (bit 6).
    pub is_rotated: bool,
    /// Whether the texture is flipped (bit 7).
    pub is_flipped: bool,
}

impl GroundTile {
    /// Decode a packed byte.
    pub fn from_bitfield(bitfield: u8) -> Self {
        Self {
            tile_bitfield: bitfield,
            texture_record: bitfield & TEXTURE_MASK,
            is_rotated: bitfield & ROTATED_BIT != 0,
            is_flipped: bitfield & FLIPPED_BIT != 0,
        }
    }

    /// Build a tile from its texture and orientation, packing the bitfield.
    pub fn new(texture_record: u8, orientation: TileOrientation) -> Self {
        let (rotated, flipped) = orientation.flags();
        let mut bitfield = texture_record & TEXTURE_MASK;
        if rotated {
            bitfield += ROTATED_BIT;
        }
        if flipped {
            bitfield += FLIPPED_BIT;
        }
        Self {
            tile_bitfield: bitfield,
            texture_record: texture_record & TEXTURE_MASK,
            is_rotated: rotated,
            is_flipped: flipped,
        }
    }

    /// The current orientation state.
    pub fn orientation(&self) -> TileOrientation {
        TileOrientation::from_flags(self.is_rotated, self.is_flipped)
    }

    /// The same texture with its orientation recoded for `step`.
    pub fn rotated(&self, step: RotationStep) -> Self {
        Self::new(self.texture_record, self.orientation().rotate(step))
    }
}
