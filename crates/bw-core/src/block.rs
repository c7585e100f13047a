//! Schema A: the nested block representation.
//!
//! Ground data is stored as rows of cells, one `Vec` per row. This is the
//! shape the rotation engine works on.

use serde::{Deserialize, Serialize};

use crate::grid::{AUTOMAP_SIZE, TERRAIN_SIZE};
use crate::record::{
    BlockKind, BuildingData, DungeonBody, FlatPlacement, Footprint, ModelPlacement, SceneryTile,
    SubRecord,
};
use crate::terrain::GroundTile;

/// One map unit in schema A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    /// Category code, orientation digit, subcode and progressive number.
    pub name: String,
    /// Signed offset key.
    pub position: i64,
    /// Unique integer key.
    pub index: i32,
    /// Which of the bodies below is meaningful.
    pub kind: BlockKind,
    /// Present for exterior blocks.
    pub exterior: Option<ExteriorBody>,
    /// Present for dungeon blocks.
    pub dungeon: Option<DungeonBody>,
}

impl Block {
    /// An exterior block carrying `body`.
    pub fn exterior(name: impl Into<String>, body: ExteriorBody) -> Self {
        Self {
            name: name.into(),
            position: 0,
            index: 0,
            kind: BlockKind::Exterior,
            exterior: Some(body),
            dungeon: None,
        }
    }

    /// A dungeon block carrying `body`.
    pub fn dungeon(name: impl Into<String>, body: DungeonBody) -> Self {
        Self {
            name: name.into(),
            position: 0,
            index: 0,
            kind: BlockKind::Dungeon,
            exterior: None,
            dungeon: Some(body),
        }
    }

    /// The exterior body, but only when the kind says there should be one.
    pub fn exterior_body(&self) -> Option<&ExteriorBody> {
        match self.kind {
            BlockKind::Exterior => self.exterior.as_ref(),
            _ => None,
        }
    }

    /// The dungeon body, but only when the kind says there should be one.
    pub fn dungeon_body(&self) -> Option<&DungeonBody> {
        match self.kind {
            BlockKind::Dungeon => self.dungeon.as_ref(),
            _ => None,
        }
    }
}

/// Terrain and scenery, 16 rows of 16 cells each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundData {
    /// Terrain tiles, indexed `[z][x]`.
    pub tiles: Vec<Vec<GroundTile>>,
    /// Scenery cells, indexed `[z][x]`.
    pub scenery: Vec<Vec<SceneryTile>>,
}

impl Default for GroundData {
    fn default() -> Self {
        Self {
            tiles: vec![vec![GroundTile::default(); TERRAIN_SIZE]; TERRAIN_SIZE],
            scenery: vec![vec![SceneryTile::default(); TERRAIN_SIZE]; TERRAIN_SIZE],
        }
    }
}

/// The body of an exterior block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExteriorBody {
    /// Terrain and scenery grids.
    pub ground: GroundData,
    /// Auto-map overview, 64 rows of 64 bytes, indexed `[z][x]`.
    pub automap: Vec<Vec<u8>>,
    /// Metadata for each building lot.
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

impl Default for ExteriorBody {
    fn default() -> Self {
        Self {
            ground: GroundData::default(),
            automap: vec![vec![0; AUTOMAP_SIZE]; AUTOMAP_SIZE],
            buildings: Vec::new(),
            footprints: Vec::new(),
            sub_records: Vec::new(),
            misc_models: Vec::new(),
            misc_flats: Vec::new(),
        }
    }
}
