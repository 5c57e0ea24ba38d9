use serde::Deserialize;

/// One record of a CDF table, as read from the CSV input.
///
/// `VariableContext` and `unit` are blankable; the csv reader maps empty
/// fields to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "VariableName")]
    pub variable: String,

    #[serde(rename = "VariableContext")]
    pub context: Option<String>,

    #[serde(rename = "Value")]
    pub value: String,

    #[serde(rename = "unit")]
    pub unit: Option<String>,
}

impl Row {
    /// The row's context, with a blank field treated as the empty string.
    pub fn context_or_blank(&self) -> &str {
        self.context.as_deref().unwrap_or("")
    }

    pub fn unit_or_blank(&self) -> &str {
        self.unit.as_deref().unwrap_or("")
    }

    /// Raw value with surrounding whitespace removed, as it is decoded and
    /// reported.
    pub fn trimmed_value(&self) -> &str {
        self.value.trim()
    }
}
