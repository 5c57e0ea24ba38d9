use anyhow::Result;
use tracing::{debug, info};

use super::error::Finding;
use super::row::RowValidator;
use crate::models::{Metadata, Row};

/// Validate every row in input order and collect the findings. Only schema
/// compilation can fail here; per-row problems come back as findings.
pub fn validate_table(metadata: &Metadata, rows: &[Row]) -> Result<Vec<Finding>> {
    let validator = RowValidator::new(metadata)?;

    let mut findings = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        debug!(
            "Validating row {} ({} → {})",
            index + 2,
            row.category,
            row.variable
        );
        findings.extend(validator.validate_row(index, row));
    }

    info!("Checked {} rows, {} findings", rows.len(), findings.len());
    Ok(findings)
}

/// Render the final report: a single success line, or one line per finding
/// with spreadsheet-style row numbers.
pub fn render_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "✅ All rows passed validation.".to_string();
    }

    findings
        .iter()
        .map(|finding| format!("Row {}: ❌ {}", finding.display_row(), finding.kind))
        .collect::<Vec<_>>()
        .join("\n")
}
