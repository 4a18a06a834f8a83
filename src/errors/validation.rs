use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row-level or schema-level violation found by `ConstraintValidator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Dotted field path, e.g. `designParts[3].length`.
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Input schema or row-level limit violations (spec §7 `VALIDATION_ERROR`).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("design part catalog is empty")]
    EmptyDesignParts,

    #[error("module bar catalog is empty")]
    EmptyModuleBars,

    #[error("{} row-level violation(s) found", .0.len())]
    RowViolations(Vec<Violation>),

    #[error("input exceeds configured data limits: {message}")]
    DataLimitExceeded { message: String },
}
