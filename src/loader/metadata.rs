use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::Metadata;

pub fn load_metadata(path: &Path) -> Result<Metadata> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata file: {path:?}"))?;

    let metadata: Metadata = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse metadata JSON from: {path:?}"))?;

    debug!(
        "Loaded metadata: {} categories, {} $defs, {} $contextDefs, {} $unitDefs",
        metadata.parameters.len(),
        metadata.defs.len(),
        metadata.context_defs.len(),
        metadata.unit_defs.len()
    );

    Ok(metadata)
}
