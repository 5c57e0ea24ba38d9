use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// The metadata document a CDF table is validated against.
///
/// Loaded once per run and never mutated. `$defs` entries are kept as raw
/// JSON and compiled into schema validators when the run starts.
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    /// category name -> variable name -> parameter definition
    pub parameters: HashMap<String, HashMap<String, ParameterDef>>,

    /// Named JSON Schemas referenced from `types` entries as `$defs:<name>`
    #[serde(rename = "$defs", default)]
    pub defs: HashMap<String, Value>,

    /// Named groups of allowed context strings, referenced as `$refs:<name>`
    #[serde(rename = "$contextDefs", default)]
    pub context_defs: HashMap<String, Vec<String>>,

    /// Named groups of allowed unit strings, referenced as `$refs:<name>`
    #[serde(rename = "$unitDefs", default)]
    pub unit_defs: HashMap<String, Vec<String>>,
}

impl Metadata {
    pub fn parameter(&self, category: &str, variable: &str) -> Option<&ParameterDef> {
        self.parameters.get(category)?.get(variable)
    }
}

/// One parameter definition: which value types a row may carry, and which
/// contexts and units are allowed for it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterDef {
    /// Ordered type descriptors: `number`, `string`, `array`, `object`, or
    /// `$defs:<name>`. First match wins.
    #[serde(default)]
    pub types: Vec<String>,

    #[serde(rename = "VariableContext", default)]
    pub contexts: ValueSpec,

    #[serde(default)]
    pub units: ValueSpec,
}

/// A context/unit specification as authored in metadata: either a single
/// literal, or a list whose elements are literals or `$refs:<name>` markers.
/// A single literal may itself be a JSON-encoded list of such elements
/// (legacy encoding); the reference resolver unpacks that case.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueSpec {
    One(String),
    Many(Vec<Value>),
}

impl Default for ValueSpec {
    fn default() -> Self {
        ValueSpec::Many(Vec::new())
    }
}
