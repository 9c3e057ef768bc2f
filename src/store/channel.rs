//! Channel-backed snapshot store
//!
//! The snapshot is the body of the single message in a dedicated
//! history channel. Reads fetch the most recent message; writes edit it
//! in place, or create it on the very first run, so the channel never
//! accumulates a second record.
//!
//! The read-then-overwrite cycle is not locked. The external scheduler
//! is assumed not to overlap invocations; overlapping runs can lose an
//! update.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{SnapshotStore, StoreError};
use crate::discord::DiscordClient;
use crate::engine::{parse_snapshot, serialize_snapshot};
use crate::models::DaySchedule;

/// Snapshot store backed by a Discord history channel
pub struct ChannelStore {
    client: DiscordClient,
    channel_id: String,

    /// Message id seen by the last `get`, reused by `put` to edit in place
    live_message: Mutex<Option<String>>,
}

impl ChannelStore {
    pub fn new(client: DiscordClient, channel_id: impl Into<String>) -> Self {
        Self {
            client,
            channel_id: channel_id.into(),
            live_message: Mutex::new(None),
        }
    }

    async fn find_live_message(&self) -> Result<Option<(String, String)>, StoreError> {
        let messages = self.client.latest_messages(&self.channel_id, 1).await?;
        Ok(messages
            .into_iter()
            .next()
            .map(|message| (message.id, message.content)))
    }
}

#[async_trait]
impl SnapshotStore for ChannelStore {
    async fn get(&self) -> Result<Option<DaySchedule>, StoreError> {
        match self.find_live_message().await? {
            Some((id, content)) => {
                *self.live_message.lock().await = Some(id);
                Ok(parse_snapshot(&content))
            }
            None => {
                *self.live_message.lock().await = None;
                Ok(None)
            }
        }
    }

    async fn put(&self, schedule: &DaySchedule) -> Result<(), StoreError> {
        let payload = serialize_snapshot(schedule)?;

        let known = self.live_message.lock().await.clone();
        let existing = match known {
            Some(id) => Some(id),
            None => self.find_live_message().await?.map(|(id, _)| id),
        };

        match existing {
            Some(id) => {
                self.client
                    .edit_message(&self.channel_id, &id, &payload)
                    .await?;
            }
            None => {
                let message = self.client.send_message(&self.channel_id, &payload).await?;
                *self.live_message.lock().await = Some(message.id);
            }
        }
        Ok(())
    }
}
