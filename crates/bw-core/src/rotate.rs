//! Rotation of a whole exterior block.
//!
//! Each positional field is turned with the primitive matching its
//! coordinate space and each yaw goes through [`normalize_angle`]. Fields
//! with no geometric meaning are copied as they are. The input block is
//! never modified; a failed rotation returns nothing.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::angle::normalize_angle;
use crate::block::{Block, ExteriorBody, GroundData};
use crate::error::{BlockError, BlockResult};
use crate::geometry::{EXTERIOR_SIZE, RotationStep, rotate_local, rotate_object};
use crate::grid::{
    AUTOMAP_SIZE, TERRAIN_SIZE, check_rows, flatten, nest, remap, remap_scenery, remap_terrain,
};
use crate::name::BlockName;
use crate::record::{
    BlockKind, DetailBody, FlatPlacement, Footprint, ModelPlacement, SubRecord,
};

/// Options for a rotation run.
#[derive(Debug, Clone)]
pub struct RotateConfig {
    /// Also rotate the models and flats inside each lot's detail bodies.
    pub rotate_detail_bodies: bool,
    /// Edge length of absolute exterior space.
    pub exterior_size: i32,
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            rotate_detail_bodies: false,
            exterior_size: EXTERIOR_SIZE,
        }
    }
}

impl RotateConfig {
    /// Enable or disable rotation of detail-body placements.
    pub fn with_detail_bodies(mut self, enabled: bool) -> Self {
        self.rotate_detail_bodies = enabled;
        self
    }

    /// Set the edge length of absolute exterior space.
    pub fn with_exterior_size(mut self, size: i32) -> Self {
        self.exterior_size = size;
        self
    }
}

/// The record kinds found in an exterior block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Building footprint placements.
    Footprint,
    /// The origin and yaw of each building lot.
    SubRecordOrigin,
    /// Loose 3-D props on the block.
    MiscModel,
    /// Loose flat sprites on the block.
    MiscFlat,
    /// 3-D models inside a lot's detail bodies.
    DetailModel,
    /// Flat sprites inside a lot's detail bodies.
    DetailFlat,
    /// Section markers inside a lot's detail bodies.
    Section,
    /// NPC placements inside a lot's detail bodies.
    Person,
    /// Doors inside a lot's detail bodies.
    Door,
}

impl RecordKind {
    /// Every record kind.
    pub const ALL: [RecordKind; 9] = [
        Self::Footprint,
        Self::SubRecordOrigin,
        Self::MiscModel,
        Self::MiscFlat,
        Self::DetailModel,
        Self::DetailFlat,
        Self::Section,
        Self::Person,
        Self::Door,
    ];
}

/// Which record kinds a rotation actually transforms.
///
/// Sections, people and doors are always copied unrotated; their geometry
/// is not modelled yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationCoverage {
    detail_bodies: bool,
}

impl RotationCoverage {
    /// Coverage for a given configuration.
    pub fn for_config(config: &RotateConfig) -> Self {
        Self {
            detail_bodies: config.rotate_detail_bodies,
        }
    }

    /// Whether records of `kind` are transformed.
    pub fn transforms(&self, kind: RecordKind) -> bool {
        match kind {
            RecordKind::Footprint
            | RecordKind::SubRecordOrigin
            | RecordKind::MiscModel
            | RecordKind::MiscFlat => true,
            RecordKind::DetailModel | RecordKind::DetailFlat => self.detail_bodies,
            RecordKind::Section | RecordKind::Person | RecordKind::Door => false,
        }
    }

    /// Record kinds copied through unrotated.
    pub fn untransformed(&self) -> Vec<RecordKind> {
        RecordKind::ALL
            .into_iter()
            .filter(|kind| !self.transforms(*kind))
            .collect()
    }
}

/// Rotates exterior blocks.
#[derive(Debug, Clone, Default)]
pub struct Rotator {
    config: RotateConfig,
}

impl Rotator {
    /// A rotator using `config`.
    pub fn new(config: RotateConfig) -> Self {
        Self { config }
    }

    /// What this rotator transforms.
    pub fn coverage(&self) -> RotationCoverage {
        RotationCoverage::for_config(&self.config)
    }

    /// Rotate `block` by `step` and return the renamed copy.
    pub fn rotate(&self, block: &Block, step: RotationStep) -> BlockResult<Block> {
        if block.kind != BlockKind::Exterior {
            return Err(BlockError::UnsupportedKind(block.kind));
        }
        let body = block
            .exterior
            .as_ref()
            .ok_or(BlockError::MissingBody(block.kind))?;
        let name = BlockName::parse(&block.name)?.rotated(step).to_string();
        let exterior = self.rotate_exterior(body, step)?;

        debug!(
            from = %block.name,
            to = %name,
            %step,
            lots = exterior.sub_records.len(),
            "rotated block"
        );

        Ok(Block {
            name,
            position: block.position,
            index: block.index,
            kind: block.kind,
            exterior: Some(exterior),
            dungeon: block.dungeon.clone(),
        })
    }

    fn rotate_exterior(&self, body: &ExteriorBody, step: RotationStep) -> BlockResult<ExteriorBody> {
        check_rows("terrain", &body.ground.tiles, TERRAIN_SIZE)?;
        check_rows("scenery", &body.ground.scenery, TERRAIN_SIZE)?;
        check_rows("automap", &body.automap, AUTOMAP_SIZE)?;

        let tiles = remap_terrain(&flatten(&body.ground.tiles), step)?;
        let scenery = remap_scenery(&flatten(&body.ground.scenery), step)?;
        let automap = remap("automap", &flatten(&body.automap), AUTOMAP_SIZE, step)?;

        trace!(
            footprints = body.footprints.len(),
            models = body.misc_models.len(),
            flats = body.misc_flats.len(),
            "rotating placements"
        );

        Ok(ExteriorBody {
            ground: GroundData {
                tiles: nest(&tiles, TERRAIN_SIZE),
                scenery: nest(&scenery, TERRAIN_SIZE),
            },
            automap: nest(&automap, AUTOMAP_SIZE),
            buildings: body.buildings.clone(),
            footprints: body
                .footprints
                .iter()
                .map(|f| self.rotate_footprint(f, step))
                .collect(),
            sub_records: body
                .sub_records
                .iter()
                .map(|s| self.rotate_sub_record(s, step))
                .collect(),
            misc_models: body
                .misc_models
                .iter()
                .map(|m| self.rotate_absolute_model(m, step))
                .collect(),
            misc_flats: body
                .misc_flats
                .iter()
                .map(|f| self.rotate_absolute_flat(f, step))
                .collect(),
        })
    }

    fn rotate_footprint(&self, footprint: &Footprint, step: RotationStep) -> Footprint {
        let (x_pos, z_pos) = rotate_object(
            footprint.x_pos,
            footprint.z_pos,
            step,
            self.config.exterior_size,
        );
        Footprint {
            x_pos,
            z_pos,
            y_rotation: normalize_angle(footprint.y_rotation, step),
        }
    }

    fn rotate_sub_record(&self, lot: &SubRecord, step: RotationStep) -> SubRecord {
        let (x_pos, z_pos) = rotate_object(lot.x_pos, lot.z_pos, step, self.config.exterior_size);
        SubRecord {
            x_pos,
            z_pos,
            y_rotation: normalize_angle(lot.y_rotation, step),
            exterior: self.rotate_detail(&lot.exterior, step),
            interior: self.rotate_detail(&lot.interior, step),
        }
    }

    fn rotate_absolute_model(&self, model: &ModelPlacement, step: RotationStep) -> ModelPlacement {
        let (x_pos, z_pos) = rotate_object(model.x_pos, model.z_pos, step, self.config.exterior_size);
        ModelPlacement {
            x_pos,
            z_pos,
            y_rotation: normalize_angle(model.y_rotation, step),
            ..*model
        }
    }

    fn rotate_absolute_flat(&self, flat: &FlatPlacement, step: RotationStep) -> FlatPlacement {
        let (x_pos, z_pos) = rotate_object(flat.x_pos, flat.z_pos, step, self.config.exterior_size);
        FlatPlacement {
            x_pos,
            z_pos,
            ..*flat
        }
    }

    fn rotate_detail(&self, body: &DetailBody, step: RotationStep) -> DetailBody {
        if !self.config.rotate_detail_bodies {
            return body.clone();
        }
        DetailBody {
            models: body
                .models
                .iter()
                .map(|m| {
                    let (x_pos, z_pos) = rotate_local(m.x_pos, m.z_pos, step);
                    ModelPlacement {
                        x_pos,
                        z_pos,
                        y_rotation: normalize_angle(m.y_rotation, step),
                        ..*m
                    }
                })
                .collect(),
            flats: body
                .flats
                .iter()
                .map(|f| {
                    let (x_pos, z_pos) = rotate_local(f.x_pos, f.z_pos, step);
                    FlatPlacement { x_pos, z_pos, ..*f }
                })
                .collect(),
            sections: body.sections.clone(),
            people: body.people.clone(),
            doors: body.doors.clone(),
        }
    }
}

/// Rotate `block` by a raw step index with the default configuration.
pub fn rotate(block: &Block, step: i64) -> BlockResult<Block> {
    let step = RotationStep::from_index(step)?;
    Rotator::default().rotate(block, step)
}

/// Rotate many independent blocks in parallel.
///
/// Results come back in input order; one block failing does not affect the
/// others.
pub fn rotate_batch(
    blocks: &[Block],
    step: RotationStep,
    config: &RotateConfig,
) -> Vec<BlockResult<Block>> {
    let rotator = Rotator::new(config.clone());
    blocks.par_iter().map(|b| rotator.rotate(b, step)).collect()
}
