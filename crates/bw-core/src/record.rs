//! Leaf records shared by both block schemas.
//!
//! Positions are world units. `x_pos`/`z_pos` span the ground plane and
//! `y_pos` is altitude, which no rotation touches. Angles are yaw in
//! 2048-unit turns.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::building::BuildingCategory;

/// Which kind-specific body a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A town or wilderness block with terrain, buildings and lots.
    Exterior,
    /// A dungeon block made of model references and object roots.
    Dungeon,
    /// Anything else; carries no body.
    Other,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exterior => write!(f, "exterior"),
            Self::Dungeon => write!(f, "dungeon"),
            Self::Other => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// Exterior records
// ---------------------------------------------------------------------------

/// Metadata for one building lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingData {
    /// Seed used to generate the building's display name.
    pub name_seed: u16,
    /// Owning faction.
    pub faction_id: u16,
    /// Map sector the building belongs to.
    pub sector: i16,
    /// Location-wide building id.
    pub location_id: u16,
    /// What the building is used for.
    pub building_type: BuildingCategory,
    /// Quality rating (1-20).
    pub quality: u8,
}

/// Where a building's footprint sits in absolute block space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    /// East-west position.
    pub x_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Yaw of the footprint.
    pub y_rotation: i32,
}

/// One cell of the 16×16 scenery grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneryTile {
    /// The packed byte as stored on disk.
    pub tile_bitfield: u8,
    /// Scenery texture record; 0 leaves the cell empty.
    pub texture_record: u8,
}

/// A placed 3-D model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPlacement {
    /// Model archive id.
    pub model_id: u32,
    /// Object type tag as stored.
    pub object_type: u8,
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Pitch.
    pub x_rotation: i32,
    /// Yaw; the only angle a rotation changes.
    pub y_rotation: i32,
    /// Roll.
    pub z_rotation: i32,
}

/// A placed billboard sprite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPlacement {
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Texture archive the sprite is drawn from.
    pub texture_archive: u16,
    /// Record within the archive.
    pub texture_record: u16,
    /// Owning faction.
    pub faction_id: u16,
    /// Flags as stored.
    pub flags: u8,
}

/// A section marker. Stored and copied, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Section number as stored.
    pub section_id: u16,
}

/// An NPC placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonPlacement {
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Texture archive of the NPC sprite.
    pub texture_archive: u16,
    /// Record within the archive.
    pub texture_record: u16,
    /// Faction the NPC belongs to.
    pub faction_id: u16,
    /// Flags as stored.
    pub flags: u8,
}

/// A door placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorPlacement {
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// Index of the door model within the owning building.
    pub door_model_index: u8,
    /// Angle the door swings to when opened.
    pub open_rotation: i16,
}

/// The placements of one side (exterior or interior) of a building lot.
///
/// Positions are relative to the owning [`SubRecord`]'s origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailBody {
    /// 3-D models.
    pub models: Vec<ModelPlacement>,
    /// Billboard sprites.
    pub flats: Vec<FlatPlacement>,
    /// Section markers.
    pub sections: Vec<SectionRecord>,
    /// NPCs.
    pub people: Vec<PersonPlacement>,
    /// Doors.
    pub doors: Vec<DoorPlacement>,
}

impl DetailBody {
    /// Total number of placements across every list.
    pub fn placement_count(&self) -> usize {
        self.models.len()
            + self.flats.len()
            + self.sections.len()
            + self.people.len()
            + self.doors.len()
    }
}

/// A building lot inside an exterior block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    /// Lot origin, absolute.
    pub x_pos: i32,
    /// Lot origin, absolute.
    pub z_pos: i32,
    /// Yaw of the lot.
    pub y_rotation: i32,
    /// What stands outside.
    pub exterior: DetailBody,
    /// What is inside.
    pub interior: DetailBody,
}

// ---------------------------------------------------------------------------
// Dungeon records
// ---------------------------------------------------------------------------

/// An entry in a dungeon block's model table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelReference {
    /// Model name as stored.
    pub model_id: String,
    /// Numeric model archive index.
    pub model_index: u32,
}

/// What a dungeon object is. Exactly one payload per object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectPayload {
    /// A 3-D model drawn from the block's model table.
    Model {
        /// Index into [`DungeonBody::model_references`].
        model_index: u16,
        /// Pitch.
        x_rotation: i32,
        /// Yaw.
        y_rotation: i32,
        /// Roll.
        z_rotation: i32,
        /// Action flags as stored.
        action_flags: u8,
    },
    /// A point light.
    Light {
        /// Light radius.
        radius: u16,
    },
    /// A billboard sprite.
    Flat {
        /// Texture archive.
        texture_archive: u16,
        /// Texture record.
        texture_record: u16,
        /// Owning faction.
        faction_id: u16,
        /// Flags as stored.
        flags: u8,
    },
}

/// One object under a dungeon object root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonObject {
    /// East-west position.
    pub x_pos: i32,
    /// Altitude.
    pub y_pos: i32,
    /// North-south position.
    pub z_pos: i32,
    /// The typed content of the object.
    pub payload: ObjectPayload,
}

/// A slot holding zero or more dungeon objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRoot {
    /// Objects in this slot, in stored order.
    pub objects: Vec<DungeonObject>,
}

/// The body of a dungeon block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonBody {
    /// Model table referenced by [`ObjectPayload::Model`] entries.
    pub model_references: Vec<ModelReference>,
    /// Object slots.
    pub object_roots: Vec<ObjectRoot>,
}

impl DungeonBody {
    /// Total number of objects across every root.
    pub fn object_count(&self) -> usize {
        self.object_roots.iter().map(|r| r.objects.len()).sum()
    }
}
