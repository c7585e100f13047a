use std::path::Path;

use bw_core::codec::{encode_block, encode_flat};
use bw_core::{ConvertConfig, Converter};
use clap::ValueEnum;
use tracing::info;

/// The schema a document is converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Schema {
    /// Schema A: grids as rows.
    Nested,
    /// Schema B: grids as single lists.
    Flat,
}

pub fn run(
    input: &Path,
    to: Schema,
    output: Option<&Path>,
    config: Option<&Path>,
) -> Result<(), String> {
    let converter = Converter::new(load_config(config)?);
    info!(input = %input.display(), target = ?to, "converting");

    let content = match to {
        Schema::Flat => {
            let block = super::read_block(input)?;
            encode_flat(&converter.to_flat(&block))
        }
        Schema::Nested => {
            let flat = super::read_flat(input)?;
            encode_block(&converter.to_nested(&flat))
        }
    }
    .map_err(|e| e.to_string())?;

    super::write_output(&content, output)
}

fn load_config(path: Option<&Path>) -> Result<ConvertConfig, String> {
    let Some(path) = path else {
        return Ok(ConvertConfig::default());
    };
    let text = super::read_file(path)?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}
