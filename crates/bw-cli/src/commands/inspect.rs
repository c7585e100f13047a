use std::path::Path;

use bw_core::codec::{decode_block, decode_flat};
use bw_core::{Block, BlockName, convert_b_to_a};
use comfy_table::{ContentArrangement, Table};

pub fn run(input: &Path) -> Result<(), String> {
    let text = super::read_file(input)?;
    let (block, schema) = match decode_block(&text) {
        Ok(block) => (block, "nested"),
        Err(_) => {
            let flat = decode_flat(&text).map_err(|e| format!("{}: {e}", input.display()))?;
            (convert_b_to_a(&flat), "flat")
        }
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["name".to_string(), block.name.clone()]);
    match BlockName::parse(&block.name) {
        Ok(name) => {
            table.add_row(vec!["category".to_string(), name.category]);
            table.add_row(vec!["orientation".to_string(), name.orientation.to_string()]);
            table.add_row(vec!["subcode".to_string(), name.subcode]);
            table.add_row(vec!["number".to_string(), name.number]);
        }
        Err(e) => {
            table.add_row(vec!["name fields".to_string(), e.to_string()]);
        }
    }
    table.add_row(vec!["schema".to_string(), schema.to_string()]);
    table.add_row(vec!["kind".to_string(), block.kind.to_string()]);
    table.add_row(vec!["position".to_string(), block.position.to_string()]);
    table.add_row(vec!["index".to_string(), block.index.to_string()]);
    for (label, count) in body_counts(&block) {
        table.add_row(vec![label.to_string(), count]);
    }

    println!("{table}");
    Ok(())
}

fn body_counts(block: &Block) -> Vec<(&'static str, String)> {
    if let Some(body) = block.exterior_body() {
        let details: usize = body
            .sub_records
            .iter()
            .map(|lot| lot.exterior.placement_count() + lot.interior.placement_count())
            .sum();
        return vec![
            ("buildings", body.buildings.len().to_string()),
            ("footprints", body.footprints.len().to_string()),
            ("lots", body.sub_records.len().to_string()),
            ("lot placements", details.to_string()),
            ("misc models", body.misc_models.len().to_string()),
            ("misc flats", body.misc_flats.len().to_string()),
        ];
    }
    if let Some(body) = block.dungeon_body() {
        return vec![
            ("model references", body.model_references.len().to_string()),
            ("object roots", body.object_roots.len().to_string()),
            ("objects", body.object_count().to_string()),
        ];
    }
    vec![("body", "none".to_string())]
}
