//! Error types for nbsim.
//!
//! The kernel does no I/O, so the only failures are configurations rejected
//! before a run starts. Non-finite forces from coincident bodies are not errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("body count {requested} exceeds capacity of {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, ConfigurationError>;
