//! Shared error types for the engine

use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// A scope operation arrived with no open scope. The traversal driver
    /// invoked the engine out of structural order; the run aborts rather
    /// than guessing a default scope.
    #[error("scope stack underflow: {operation} with no open scope, at node {node}")]
    StackUnderflow {
        operation: &'static str,
        node: String,
    },

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// TOML parse errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, EngineError>;
