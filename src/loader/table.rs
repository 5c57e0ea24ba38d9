use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::Row;

/// Read the whole CDF table. The file must carry the header row
/// `Category,VariableName,VariableContext,Value,unit`; a record that does not
/// deserialize is a fatal load error, not a finding.
pub fn load_table(path: &Path) -> Result<Vec<Row>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open CDF table: {path:?}"))?;

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize().enumerate() {
        // Display numbering matches spreadsheets: header is line 1.
        let row: Row =
            record.with_context(|| format!("Failed to parse row {} of {path:?}", index + 2))?;
        rows.push(row);
    }

    debug!("Loaded {} rows from {path:?}", rows.len());
    Ok(rows)
}
