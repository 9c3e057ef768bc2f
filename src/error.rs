//! Unified error handling for the vuoro crate
//!
//! Domain errors live next to the code that raises them
//! ([`SourceError`], [`PublishError`], [`StoreError`]); this module
//! wraps them in a single [`Error`] enum for use across module
//! boundaries.
//!
//! Note what is *not* here: an unparseable stored snapshot. That case
//! is recovered inside the store (treated as snapshot-absent) and never
//! surfaces as an error value.

use std::io;
use thiserror::Error;

pub use crate::discord::PublishError;
pub use crate::source::SourceError;
pub use crate::store::StoreError;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A venue scraper failed; the run aborts before any publishing
    Source,
    /// Message delivery failed; the sibling publish step still runs
    Publish,
    /// Snapshot store transport failed
    Store,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

/// Unified error type for the vuoro crate
#[derive(Error, Debug)]
pub enum Error {
    /// Venue scraping errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Discord delivery errors
    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    /// Snapshot store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Source(_) => ErrorCategory::Source,
            Self::Publish(_) => ErrorCategory::Publish,
            Self::Store(_) => ErrorCategory::Store,
            Self::Config(_) => ErrorCategory::Config,
            Self::Io(_) | Self::Json(_) => ErrorCategory::Other,
        }
    }

    /// Whether the next scheduled run can plausibly succeed unchanged.
    ///
    /// Transient transport failures are; credential and configuration
    /// problems are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Source(SourceError::LoginFailed { .. }) => false,
            Self::Source(_) | Self::Publish(_) | Self::Store(_) | Self::Io(_) => true,
            Self::Json(_) | Self::Config(_) => false,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
