//! File-backed snapshot store
//!
//! Same contract as the channel store, holding the payload in a single
//! file. Used by tests and local runs.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{SnapshotStore, StoreError};
use crate::engine::{parse_snapshot, serialize_snapshot};
use crate::models::DaySchedule;

/// Snapshot store backed by a single file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn get(&self) -> Result<Option<DaySchedule>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(payload) => Ok(parse_snapshot(&payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn put(&self, schedule: &DaySchedule) -> Result<(), StoreError> {
        let payload = serialize_snapshot(schedule)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, payload).await?;
        Ok(())
    }
}
