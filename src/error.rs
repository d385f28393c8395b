//! Error types for beam analysis

use thiserror::Error;

/// Main error type for beam operations
#[derive(Error, Debug)]
pub enum BeamError {
    #[error("Span '{0}' not found in beam")]
    SpanNotFound(u32),

    #[error("Duplicate span id '{0}' already exists")]
    DuplicateSpan(u32),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Load at offset {offset} lies outside its span of length {length}")]
    LoadOutsideSpan { offset: f64, length: f64 },

    #[error("Span ordering fault: {0}")]
    SpanOrdering(String),

    #[error("Three-moment system is singular - check span lengths and inertias")]
    SingularSystem,

    #[error("Solver produced a non-finite value: {0}")]
    NonFiniteResult(String),

    #[error("Invalid search bounds: {0}")]
    InvalidSearchBounds(String),

    #[error("No feasible cross-section found within the search bounds")]
    NoFeasibleSection,

    #[error("Beam not analyzed - run analyze() first")]
    NotAnalyzed,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for beam operations
pub type BeamResult<T> = Result<T, BeamError>;
