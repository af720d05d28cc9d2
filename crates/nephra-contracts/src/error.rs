//! Error types for the NEPHRA engine boundary.
//!
//! The computation core is total over validated input and never fails —
//! these variants exist only at the edges: intake validation, reference-data
//! loading, and the ranker's pool bound.

use thiserror::Error;

/// The unified error type for the NEPHRA crates.
#[derive(Debug, Error)]
pub enum NephraError {
    /// An intake field is non-finite, negative where impossible, or missing.
    ///
    /// Raised at the boundary, before any value reaches the metrics
    /// calculator — the engine itself performs no internal validation.
    #[error("invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// A reference-data document (lexicon or interaction table) is malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// An intake document failed structural JSON Schema validation.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// The ranker was given more candidate treatments than the supported bound.
    ///
    /// Subset enumeration is cubic in the pool size; the bound keeps the
    /// worst case predictable.
    #[error("treatment pool of {count} exceeds the supported limit of {limit}")]
    PoolTooLarge { count: usize, limit: usize },
}

/// Convenience alias used throughout the NEPHRA crates.
pub type NephraResult<T> = Result<T, NephraError>;
