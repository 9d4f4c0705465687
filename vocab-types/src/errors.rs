use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

/// Uniform error taxonomy for the engine. Read and write paths both
/// surface these; no path silently degrades to an empty result.
#[derive(Debug, Clone, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EngineError {
    #[error("store unavailable: {message}")]
    StoreUnavailable { message: String },
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
    #[error("concurrent update detected on {entity} ({key})")]
    ConcurrencyConflict { entity: String, key: String },
    #[error("student not found: {student_id}")]
    StudentNotFound { student_id: Uuid },
}

impl EngineError {
    /// Wrap a persistence-layer failure at the repository boundary.
    pub fn store(err: impl std::fmt::Display) -> Self {
        EngineError::StoreUnavailable {
            message: err.to_string(),
        }
    }

    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn conflict(entity: &str, key: impl Into<String>) -> Self {
        EngineError::ConcurrencyConflict {
            entity: entity.to_string(),
            key: key.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
