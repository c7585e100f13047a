//! Core block model for Blockwright.
//!
//! A block is one unit of world data: an exterior lot with terrain, buildings
//! and props, or a dungeon layout. This crate rotates exterior blocks by
//! quarter turns and converts blocks between the nested schema A and the
//! flattened schema B. It never touches storage; callers decode a document,
//! hand the value in, and persist what comes back.

/// Orientation angles and their normalization.
pub mod angle;
/// Schema A: nested block representation.
pub mod block;
/// Building categories and the merchant set.
pub mod building;
/// JSON encode/decode for both schemas.
pub mod codec;
/// Schema A ↔ schema B conversion.
pub mod convert;
/// Error types used throughout the crate.
pub mod error;
/// Schema B: flattened block representation.
pub mod flat;
/// Rotation steps and the three coordinate rotation primitives.
pub mod geometry;
/// Remapping of the terrain, scenery and auto-map grids.
pub mod grid;
/// Block name parsing and normalization.
pub mod name;
/// Leaf records shared by both schemas.
pub mod record;
/// Whole-block rotation.
pub mod rotate;
/// Terrain tile orientation codec.
pub mod terrain;

/// Re-export schema types.
pub use block::{Block, ExteriorBody, GroundData};
/// Re-export conversion entry points.
pub use convert::{ConvertConfig, Converter, convert_a_to_b, convert_b_to_a};
/// Re-export error types.
pub use error::{BlockError, BlockResult};
/// Re-export schema B types.
pub use flat::{FlatBlock, FlatExterior};
/// Re-export the rotation step.
pub use geometry::RotationStep;
/// Re-export name normalization.
pub use name::{BlockName, normalize_name};
/// Re-export the block kind.
pub use record::BlockKind;
/// Re-export rotation entry points.
pub use rotate::{RotateConfig, Rotator, rotate, rotate_batch};
