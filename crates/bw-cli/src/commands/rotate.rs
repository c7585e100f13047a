use std::path::{Path, PathBuf};

use bw_core::codec::encode_block;
use bw_core::{RotateConfig, RotationStep, rotate_batch};
use tracing::info;

pub fn run(
    inputs: &[PathBuf],
    step: i64,
    out_dir: Option<&Path>,
    detail_bodies: bool,
) -> Result<(), String> {
    let step = RotationStep::from_index(step).map_err(|e| e.to_string())?;
    if out_dir.is_none() && inputs.len() > 1 {
        return Err("rotating more than one block requires --out-dir".into());
    }

    let blocks = inputs
        .iter()
        .map(|path| super::read_block(path))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(dir) = out_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create {}: {e}", dir.display()))?;
    }

    let config = RotateConfig::default().with_detail_bodies(detail_bodies);
    info!(blocks = blocks.len(), %step, detail_bodies, "rotating");
    let results = rotate_batch(&blocks, step, &config);

    let mut failed = 0;
    for (path, result) in inputs.iter().zip(results) {
        let block = match result {
            Ok(block) => block,
            Err(e) => {
                eprintln!("  {}: {e}", path.display());
                failed += 1;
                continue;
            }
        };
        let json = encode_block(&block).map_err(|e| e.to_string())?;
        match out_dir {
            Some(dir) => {
                let dest = dir.join(format!("{}.json", block.name));
                std::fs::write(&dest, json)
                    .map_err(|e| format!("cannot write to {}: {e}", dest.display()))?;
                println!("  {} -> {} ({step})", path.display(), dest.display());
            }
            None => println!("{json}"),
        }
    }

    if failed > 0 {
        Err(format!(
            "{failed} block{} could not be rotated",
            if failed == 1 { "" } else { "s" }
        ))
    } else {
        Ok(())
    }
}
