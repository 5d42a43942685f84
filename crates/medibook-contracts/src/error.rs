//! Error types for the medibook admin core.
//!
//! All fallible operations in the save pipeline return `MedibookResult<T>`.
//! The reconciler itself is infallible — only configuration loading, the
//! API boundary, and cache invalidation can fail.

use thiserror::Error;

/// The unified error type for the medibook crates.
#[derive(Debug, Error)]
pub enum MedibookError {
    /// A form payload failed schema validation and the save was not attempted.
    #[error("form validation failed: {reason}")]
    ValidationFailed { reason: String },

    /// The backend request could not be delivered or returned a transport error.
    #[error("backend request failed: {reason}")]
    RequestFailed { reason: String },

    /// A cache tag could not be invalidated after a successful save.
    #[error("cache invalidation failed for tag '{tag}': {reason}")]
    InvalidationFailed { tag: String, reason: String },

    /// A form schema document is missing or malformed.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the medibook crates.
pub type MedibookResult<T> = Result<T, MedibookError>;
