use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashMap;

// The $defs entries are authored as JSON Schema draft-07
use jsonschema::draft7 as schema_draft;

const DEFS_PREFIX: &str = "$defs:";

/// Checks a decoded value against a parameter's declared type descriptors.
/// Named `$defs` schemas are compiled once up front and reused for every row.
pub struct TypeChecker {
    schemas: HashMap<String, jsonschema::Validator>,
}

/// Result of scanning one `types` list.
#[derive(Debug)]
pub struct TypeOutcome {
    /// Whether any descriptor accepted the value.
    pub matched: bool,
    /// One violation message per failed `$defs` attempt, in descriptor
    /// order. These are reported even when a later descriptor matched.
    pub schema_violations: Vec<String>,
}

impl TypeChecker {
    pub fn new(defs: &HashMap<String, Value>) -> Result<Self> {
        let mut schemas = HashMap::new();
        for (name, schema) in defs {
            let validator = schema_draft::options()
                .build(schema)
                .with_context(|| format!("Failed to compile $defs schema '{name}'"))?;
            schemas.insert(name.clone(), validator);
        }
        Ok(Self { schemas })
    }

    /// Best-effort decode of a raw textual value; anything that is not valid
    /// JSON stays a string.
    pub fn decode(raw: &str) -> Value {
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
    }

    /// Scan `types` in declared order; the first descriptor that accepts the
    /// value wins. A failed `$defs` attempt records its violation message
    /// and the scan continues with the next descriptor.
    pub fn check(&self, value: &Value, types: &[String]) -> TypeOutcome {
        let mut schema_violations = Vec::new();

        for descriptor in types {
            match descriptor.as_str() {
                "number" | "string" | "array" | "object" => {
                    if primitive_matches(value, descriptor) {
                        return TypeOutcome {
                            matched: true,
                            schema_violations,
                        };
                    }
                }
                other => {
                    let name = other.strip_prefix(DEFS_PREFIX).unwrap_or(other);
                    let Some(validator) = self.schemas.get(name) else {
                        continue;
                    };
                    // Schema descriptors only ever apply to object values
                    if !value.is_object() {
                        continue;
                    }
                    match validator.validate(value) {
                        Ok(()) => {
                            return TypeOutcome {
                                matched: true,
                                schema_violations,
                            };
                        }
                        Err(error) => schema_violations.push(error.to_string()),
                    }
                }
            }
        }

        TypeOutcome {
            matched: false,
            schema_violations,
        }
    }
}

fn primitive_matches(value: &Value, tag: &str) -> bool {
    match tag {
        // serde_json keeps booleans out of Number, so `true` is not a number
        "number" => value.is_number(),
        "string" => value.is_string(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => false,
    }
}
