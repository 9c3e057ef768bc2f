//! Snapshot storage
//!
//! The previous run's rare schedule is the only state the watcher
//! carries between invocations. It lives behind [`SnapshotStore`] so
//! the channel-backed production store and the file-backed store used
//! in tests and local runs are interchangeable.
//!
//! A payload that exists but does not parse is reported as `Ok(None)`,
//! never as an error: a garbled snapshot must not fail the run, it just
//! removes the comparison baseline. Transport failures do error, since
//! proceeding without knowing whether a baseline exists would re-notify
//! every slot.

pub mod channel;
pub mod file;

use async_trait::async_trait;
use thiserror::Error;

use crate::discord::PublishError;
use crate::models::DaySchedule;

pub use channel::ChannelStore;
pub use file::FileStore;

/// Errors raised by snapshot stores
#[derive(Error, Debug)]
pub enum StoreError {
    /// Channel transport error
    #[error("channel store error: {0}")]
    Channel(#[from] PublishError),

    /// Snapshot could not be serialized
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// File store I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable holder of the single most recent rare-slot snapshot
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Read the stored snapshot; `None` when absent or unparseable
    async fn get(&self) -> Result<Option<DaySchedule>, StoreError>;

    /// Replace the stored snapshot with `schedule`
    async fn put(&self, schedule: &DaySchedule) -> Result<(), StoreError>;
}
