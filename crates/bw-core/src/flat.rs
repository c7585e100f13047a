//! Schema B: the flattened block representation.
//!
//! Every grid is a single list in row-major order and terrain cells are
//! kept as their packed bytes. The exterior and dungeon bodies live under
//! `rmb` and `rdb`.

use serde::{Deserialize, Serialize};

use crate::record::{
    BlockKind, BuildingData, DungeonBody, FlatPlacement, Footprint, ModelPlacement, SceneryTile,
    SubRecord,
};

/// One map unit in schema B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatBlock {
    /// Category code, orientation digit, subcode and progressive number.
    pub name: String,
    /// Signed offset key.
    pub position: i64,
    /// Unique integer key.
    pub index: i32,
    /// Which of the bodies below is meaningful.
    pub kind: BlockKind,
    /// Present for exterior blocks.
    pub rmb: Option<FlatExterior>,
    /// Present for dungeon blocks.
    pub rdb: Option<DungeonBody>,
}

/// The body of an exterior block in schema B.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatExterior {
    /// 256 packed terrain bytes, row-major.
    pub ground_tiles: Vec<u8>,
    /// 256 scenery cells, row-major.
    pub ground_scenery: Vec<SceneryTile>,
    /// 4096 auto-map bytes, row-major.
    pub automap: Vec<u8>,
    /// Metadata for each building lot, merchant overrides applied.
    pub buildings: Vec<BuildingData>,
    /// Footprint placement for each building lot.
    pub footprints: Vec<Footprint>,
    /// The building lots.
    pub sub_records: Vec<SubRecord>,
    /// Loose 3-D props, absolute.
    pub misc_models: Vec<ModelPlacement>,
    /// Loose flat sprites, absolute.
    pub misc_flats: Vec<FlatPlacement>,
}
