//! Error types for the clinic workspace.
//!
//! The list processor itself is infallible. Errors only arise at the edges:
//! loading screen profiles and decoding fetched payloads.

use thiserror::Error;

/// The unified error type for the clinic crates.
#[derive(Debug, Error)]
pub enum ClinicError {
    /// A screen profile document is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A fetched payload could not be turned into a record list.
    #[error("intake error: {reason}")]
    Intake { reason: String },

    /// A JSON Schema document failed to compile.
    #[error("schema validation error: {reason}")]
    SchemaValidation { reason: String },

    /// A file could not be read.
    #[error("i/o error on '{path}': {reason}")]
    Io { path: String, reason: String },
}

/// Convenience alias used throughout the clinic crates.
pub type ClinicResult<T> = Result<T, ClinicError>;
