//! Error taxonomy for the optimization core, organized by domain:
//! core/runtime errors, input validation, welding-budget feasibility, and
//! mid-run algorithm invariants. Mirrors the teacher's
//! `errors/{core,task,computation,service}.rs` domain split, generalized to
//! the kinds spec §7 enumerates.

mod algorithm;
mod constraint;
mod core;
mod validation;

pub use algorithm::AlgorithmError;
pub use constraint::ConstraintError;
pub use core::CoreError;
pub use validation::{ValidationError, Violation};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// The four string codes spec §7 defines. `TIMEOUT_WARNING` is intentionally
/// absent: a timed-out run does not abort, so it never becomes an `AppError`
/// — it is represented as data (see `statistics::RequirementValidation`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    ValidationError,
    ConstraintError,
    AlgorithmError,
    InternalError,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::ValidationError => "VALIDATION_ERROR",
            ErrorType::ConstraintError => "CONSTRAINT_ERROR",
            ErrorType::AlgorithmError => "ALGORITHM_ERROR",
            ErrorType::InternalError => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl AppError {
    pub fn error_type(&self) -> ErrorType {
        match self {
            AppError::Core(_) => ErrorType::InternalError,
            AppError::Validation(_) => ErrorType::ValidationError,
            AppError::Constraint(_) => ErrorType::ConstraintError,
            AppError::Algorithm(_) => ErrorType::AlgorithmError,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AppError::Core(_) => Severity::Error,
            AppError::Validation(_) | AppError::Constraint(_) | AppError::Algorithm(_) => {
                Severity::Warning
            }
        }
    }
}

/// The `{ success:false, error, errorType, suggestions, severity }` envelope
/// of spec §6/§7.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub error_type: String,
    pub suggestions: Vec<String>,
    pub severity: String,
}

impl ErrorEnvelope {
    pub fn new(error: &AppError, suggestions: Vec<String>) -> Self {
        let severity = match error.severity() {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        Self {
            success: false,
            error: error.to_string(),
            error_type: error.error_type().as_str().to_string(),
            suggestions,
            severity: severity.to_string(),
        }
    }

    /// Builds the envelope from a rejected `ConstraintValidator` report
    /// (spec §7: row-level validation failures abort before work starts).
    /// Welding-feasibility violations are `CONSTRAINT_ERROR`; every other
    /// row/schema violation is `VALIDATION_ERROR`.
    pub fn from_validation_report(report: &crate::validation::ValidationReport) -> Self {
        let error = report
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ");
        let error_type = if report.is_constraint_violation {
            ErrorType::ConstraintError
        } else {
            ErrorType::ValidationError
        };
        Self {
            success: false,
            error,
            error_type: error_type.as_str().to_string(),
            suggestions: report.suggestions.clone(),
            severity: "warning".to_string(),
        }
    }
}
