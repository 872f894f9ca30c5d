//! Core error types for fitapp-core.
//!
//! The questionnaire engine, the coercion helpers and the progress evaluator
//! are total and never return errors. The fallible edges are catalog
//! construction and configuration I/O, each with its own thiserror enum.

use std::path::PathBuf;
use thiserror::Error;

use crate::profile::{FieldKind, ProfileField};
use crate::questionnaire::AnswerKind;

/// Core error type for fitapp-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Catalog construction errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Question catalog validation errors.
///
/// Raised once, when a catalog is built. A catalog that constructs
/// successfully can never produce an ill-typed draft value at runtime.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Catalog has no questions
    #[error("Question catalog must contain at least one question")]
    Empty,

    /// Two questions share an id
    #[error("Duplicate question id: {0}")]
    DuplicateId(String),

    /// Choice question without choices
    #[error("Question '{id}' is a {kind:?} question but has no choices")]
    MissingChoices { id: String, kind: AnswerKind },

    /// Free-form question with choices attached
    #[error("Question '{id}' is a {kind:?} question and must not list choices")]
    UnexpectedChoices { id: String, kind: AnswerKind },

    /// Answer kind cannot be written into the target field
    #[error("Question '{id}' ({kind:?}) cannot populate {field} which holds {field_kind:?} values")]
    IncompatibleField {
        id: String,
        kind: AnswerKind,
        field: ProfileField,
        field_kind: FieldKind,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
