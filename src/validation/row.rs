use anyhow::Result;
use std::collections::BTreeSet;

use super::error::{Finding, FindingKind};
use super::refs;
use super::types::TypeChecker;
use crate::models::{Metadata, Row};

/// Validates single rows against the metadata. The checks run in a fixed
/// order: category lookup, variable lookup, context membership, value type,
/// unit membership. A failed lookup stops the row; everything after that
/// accumulates.
pub struct RowValidator<'a> {
    metadata: &'a Metadata,
    type_checker: TypeChecker,
}

impl<'a> RowValidator<'a> {
    pub fn new(metadata: &'a Metadata) -> Result<Self> {
        Ok(Self {
            metadata,
            type_checker: TypeChecker::new(&metadata.defs)?,
        })
    }

    /// Check one row. Problems are returned as findings, never as errors —
    /// a malformed row must not abort the run.
    pub fn validate_row(&self, index: usize, row: &Row) -> Vec<Finding> {
        let mut findings = Vec::new();
        let category = &row.category;
        let variable = &row.variable;

        let Some(variables) = self.metadata.parameters.get(category) else {
            findings.push(Finding::new(
                index,
                FindingKind::UnknownCategory {
                    category: category.clone(),
                },
            ));
            return findings;
        };

        let Some(param) = variables.get(variable) else {
            let mut available: Vec<&str> = variables.keys().map(String::as_str).collect();
            available.sort_unstable();
            findings.push(Finding::new(
                index,
                FindingKind::UnknownVariable {
                    category: category.clone(),
                    variable: variable.clone(),
                    available: available.join(", "),
                },
            ));
            return findings;
        };

        // A blank context still has to be declared to pass
        let contexts = refs::resolve(&param.contexts, &self.metadata.context_defs);
        let context = row.context_or_blank();
        if !contexts.contains(context) {
            findings.push(Finding::new(
                index,
                FindingKind::ContextNotAllowed {
                    category: category.clone(),
                    variable: variable.clone(),
                    context: context.to_string(),
                    available: render_set(&contexts),
                },
            ));
        }

        let raw = row.trimmed_value();
        let value = TypeChecker::decode(raw);
        let outcome = self.type_checker.check(&value, &param.types);
        for detail in outcome.schema_violations {
            findings.push(Finding::new(
                index,
                FindingKind::SchemaViolation {
                    category: category.clone(),
                    variable: variable.clone(),
                    detail,
                    value: raw.to_string(),
                },
            ));
        }
        if !outcome.matched {
            findings.push(Finding::new(
                index,
                FindingKind::TypeMismatch {
                    category: category.clone(),
                    variable: variable.clone(),
                    value: raw.to_string(),
                    expected: param.types.join(", "),
                },
            ));
        }

        // Units are only constrained when the row carries one
        let unit = row.unit_or_blank();
        if !unit.is_empty() {
            let units = refs::resolve(&param.units, &self.metadata.unit_defs);
            if !units.contains(unit) {
                findings.push(Finding::new(
                    index,
                    FindingKind::UnitNotAllowed {
                        category: category.clone(),
                        variable: variable.clone(),
                        unit: unit.to_string(),
                        available: render_set(&units),
                    },
                ));
            }
        }

        findings
    }
}

fn render_set(set: &BTreeSet<String>) -> String {
    let joined = set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    format!("{{{joined}}}")
}
