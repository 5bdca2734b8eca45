//! Core error types for nudge-core.
//!
//! Queue misses (empty pops, unknown ids) are modeled as errors so callers
//! must acknowledge them, but the notifier handles both locally -- neither
//! ever propagates out of the engine as a host-visible failure.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Core error type for nudge-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Pop attempted on an empty queue. Callers treat this as
    /// "nothing to show", never as a fault.
    #[error("notification queue is empty")]
    EmptyQueue,

    /// Cancel/snooze referenced an id no longer in the queue.
    #[error("no pending notification with id {0}")]
    NotFound(Uuid),

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

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
