//! Error types for the authorization crate.
//!
//! Access decisions themselves never fail: a missing user or a denied
//! permission is an ordinary [`crate::types::Decision`] or `false`. These errors
//! only cover loading inputs (backend user payloads and guard configuration).

use thiserror::Error;

/// Errors raised while loading authorization inputs.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The backend user object is not shaped as expected.
    #[error("Invalid user payload: {0}")]
    InvalidPayload(String),

    /// The guard configuration file could not be read.
    #[error("Failed to read guard configuration: {0}")]
    ConfigLoad(String),

    /// The guard configuration file is not valid YAML for `GuardConfig`.
    #[error("Failed to parse guard configuration: {0}")]
    ConfigParse(String),
}

/// A specialized Result type for authorization operations.
pub type Result<T> = std::result::Result<T, AuthzError>;
