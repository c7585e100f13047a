//! JSON wire format for both schemas.
//!
//! Absent bodies are written as `null` so every field name survives a
//! decode/encode cycle.

use crate::block::Block;
use crate::error::BlockResult;
use crate::flat::FlatBlock;

/// Decode a schema A document.
pub fn decode_block(json: &str) -> BlockResult<Block> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a schema A document, pretty-printed.
pub fn encode_block(block: &Block) -> BlockResult<String> {
    Ok(serde_json::to_string_pretty(block)?)
}

/// Decode a schema B document.
pub fn decode_flat(json: &str) -> BlockResult<FlatBlock> {
    Ok(serde_json::from_str(json)?)
}

/// Encode a schema B document, pretty-printed.
pub fn encode_flat(block: &FlatBlock) -> BlockResult<String> {
    Ok(serde_json::to_string_pretty(block)?)
}
