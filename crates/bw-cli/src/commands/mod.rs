pub mod convert;
pub mod inspect;
pub mod rotate;

use std::path::Path;

use bw_core::codec::{decode_block, decode_flat};
use bw_core::{Block, FlatBlock};

/// Read a file into a string, naming the path on failure.
fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))
}

/// Read and decode a schema A document.
fn read_block(path: &Path) -> Result<Block, String> {
    let text = read_file(path)?;
    decode_block(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Read and decode a schema B document.
fn read_flat(path: &Path) -> Result<FlatBlock, String> {
    let text = read_file(path)?;
    decode_flat(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Write `content` to `output`, or to stdout when no path is given.
fn write_output(content: &str, output: Option<&Path>) -> Result<(), String> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Wrote {}", path.display());
    } else {
        println!("{content}");
    }
    Ok(())
}
