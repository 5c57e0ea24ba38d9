use thiserror::Error;

/// One reported validation problem: the zero-based input row it concerns and
/// what went wrong. Findings only accumulate; none is ever withdrawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub row: usize,
    pub kind: FindingKind,
}

impl Finding {
    pub fn new(row: usize, kind: FindingKind) -> Self {
        Self { row, kind }
    }

    /// Spreadsheet-style row number: 1-based, counting the header as line 1.
    pub fn display_row(&self) -> usize {
        self.row + 2
    }
}

/// Everything the validator can report about a row. The `Display` impl is
/// the message shown in the report; `available` fields arrive pre-rendered
/// so a finding stays plain comparable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FindingKind {
    #[error("Category '{category}' not found.")]
    UnknownCategory { category: String },

    #[error("Variable '{variable}' not found in category '{category}'. Available: {available}")]
    UnknownVariable {
        category: String,
        variable: String,
        available: String,
    },

    #[error("VariableContext '{context}' not listed for {category} → {variable}. Available: {available}")]
    ContextNotAllowed {
        category: String,
        variable: String,
        context: String,
        available: String,
    },

    #[error("Object value error for {category} → {variable}: {detail}. Value: {value}")]
    SchemaViolation {
        category: String,
        variable: String,
        detail: String,
        value: String,
    },

    #[error("Value type mismatch for {category} → {variable}. Value: {value}, expected types: [{expected}]")]
    TypeMismatch {
        category: String,
        variable: String,
        value: String,
        expected: String,
    },

    #[error("Units '{unit}' not listed for {category} → {variable}. Available: {available}")]
    UnitNotAllowed {
        category: String,
        variable: String,
        unit: String,
        available: String,
    },
}
