//! Conversion between the nested (A) and flattened (B) block schemas.
//!
//! Every field maps one-to-one. The only content change is the merchant
//! faction override, applied when flattening and never undone. A body whose
//! slot does not match the block's kind is not carried over: the output
//! holds `None` there.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::block::{Block, ExteriorBody, GroundData};
use crate::building::MerchantCategories;
use crate::flat::{FlatBlock, FlatExterior};
use crate::grid::{AUTOMAP_SIZE, TERRAIN_SIZE, flatten, nest};
use crate::name::ensure_orientation_digit;
use crate::record::{BlockKind, BuildingData};
use crate::terrain::GroundTile;

/// Faction assigned to merchant buildings in schema B.
pub const MERCHANT_FACTION_ID: u16 = 510;

/// Options for schema conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Faction id forced onto merchant buildings when flattening.
    pub merchant_faction_id: u16,
    /// Building categories that count as merchants.
    pub merchant_categories: MerchantCategories,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            merchant_faction_id: MERCHANT_FACTION_ID,
            merchant_categories: MerchantCategories::default(),
        }
    }
}

impl ConvertConfig {
    /// Set the faction id forced onto merchants.
    pub fn with_faction_id(mut self, faction_id: u16) -> Self {
        self.merchant_faction_id = faction_id;
        self
    }

    /// Replace the merchant category set.
    pub fn with_categories(mut self, categories: MerchantCategories) -> Self {
        self.merchant_categories = categories;
        self
    }
}

/// Converts blocks between schema A and schema B.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// A converter using `config`.
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Schema A to schema B.
    pub fn to_flat(&self, block: &Block) -> FlatBlock {
        let flat = FlatBlock {
            name: normalized_name(&block.name),
            position: block.position,
            index: block.index,
            kind: block.kind,
            rmb: block.exterior_body().map(|body| self.flatten_exterior(body)),
            rdb: block.dungeon_body().cloned(),
        };
        debug!(name = %flat.name, kind = %flat.kind, "flattened block");
        flat
    }

    /// Schema B to schema A.
    pub fn to_nested(&self, flat: &FlatBlock) -> Block {
        let exterior = match flat.kind {
            BlockKind::Exterior => flat.rmb.as_ref().map(nest_exterior),
            _ => None,
        };
        let dungeon = match flat.kind {
            BlockKind::Dungeon => flat.rdb.clone(),
            _ => None,
        };
        let block = Block {
            name: normalized_name(&flat.name),
            position: flat.position,
            index: flat.index,
            kind: flat.kind,
            exterior,
            dungeon,
        };
        debug!(name = %block.name, kind = %block.kind, "nested block");
        block
    }

    fn flatten_exterior(&self, body: &ExteriorBody) -> FlatExterior {
        FlatExterior {
            ground_tiles: flatten(&body.ground.tiles)
                .iter()
                .map(|tile| tile.tile_bitfield)
                .collect(),
            ground_scenery: flatten(&body.ground.scenery),
            automap: flatten(&body.automap),
            buildings: body
                .buildings
                .iter()
                .map(|b| self.enrich_building(b))
                .collect(),
            footprints: body.footprints.clone(),
            sub_records: body.sub_records.clone(),
            misc_models: body.misc_models.clone(),
            misc_flats: body.misc_flats.clone(),
        }
    }

    fn enrich_building(&self, building: &BuildingData) -> BuildingData {
        if !self
            .config
            .merchant_categories
            .contains(building.building_type)
        {
            return building.clone();
        }
        if building.faction_id != self.config.merchant_faction_id {
            warn!(
                category = %building.building_type,
                from = building.faction_id,
                to = self.config.merchant_faction_id,
                "merchant faction override"
            );
        }
        BuildingData {
            faction_id: self.config.merchant_faction_id,
            ..building.clone()
        }
    }
}

fn normalized_name(name: &str) -> String {
    let out = ensure_orientation_digit(name);
    if out != name {
        warn!(from = name, to = %out, "synthesized orientation digit");
    }
    out
}

fn nest_exterior(flat: &FlatExterior) -> ExteriorBody {
    let tiles: Vec<GroundTile> = flat
        .ground_tiles
        .iter()
        .map(|&bits| GroundTile::from_bitfield(bits))
        .collect();
    ExteriorBody {
        ground: GroundData {
            tiles: nest(&tiles, TERRAIN_SIZE),
            scenery: nest(&flat.ground_scenery, TERRAIN_SIZE),
        },
        automap: nest(&flat.automap, AUTOMAP_SIZE),
        buildings: flat.buildings.clone(),
        footprints: flat.footprints.clone(),
        sub_records: flat.sub_records.clone(),
        misc_models: flat.misc_models.clone(),
        misc_flats: flat.misc_flats.clone(),
    }
}

/// Schema A to schema B with the default merchant rules.
pub fn convert_a_to_b(block: &Block) -> FlatBlock {
    Converter::default().to_flat(block)
}

/// Schema B to schema A.
pub fn convert_b_to_a(flat: &FlatBlock) -> Block {
    Converter::default().to_nested(flat)
}
