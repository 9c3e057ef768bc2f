//! Discord delivery
//!
//! A minimal REST client plus the two message builders the watcher
//! needs: the availability table (one message, edited in place so the
//! server never gets pinged for routine refreshes) and the rare-slot
//! notification (a fresh message, only when something new appeared).

pub mod notify;
pub mod table;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub use notify::format_notification;
pub use table::render_table;

const API_BASE: &str = "https://discord.com/api/v10";

/// Errors raised while delivering messages
#[derive(Error, Debug)]
pub enum PublishError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Discord rejected the request
    #[error("Discord API error {status}: {body}")]
    Api { status: u16, body: String },
}

/// A channel message, reduced to what the watcher reads back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    content: &'a str,
}

/// Minimal Discord REST client (bot token auth)
#[derive(Clone)]
pub struct DiscordClient {
    http: Client,
    token: String,
    api_base: String,
}

impl DiscordClient {
    /// Create a client with the default API endpoint.
    ///
    /// # Errors
    ///
    /// Returns `PublishError::Http` if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, PublishError> {
        Self::with_api_base(token, API_BASE)
    }

    /// Create a client against a custom endpoint (mock server in tests)
    pub fn with_api_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, PublishError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
            api_base: api_base.into(),
        })
    }

    /// Post a new message to a channel
    pub async fn send_message(
        &self,
        channel_id: &str,
        content: &str,
    ) -> Result<Message, PublishError> {
        let url = format!("{}/channels/{channel_id}/messages", self.api_base);
        let response = self
            .http
            .post(url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&MessagePayload { content })
            .send()
            .await?;
        Self::into_message(response).await
    }

    /// Edit an existing message in place
    pub async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        content: &str,
    ) -> Result<Message, PublishError> {
        let url = format!(
            "{}/channels/{channel_id}/messages/{message_id}",
            self.api_base
        );
        let response = self
            .http
            .patch(url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&MessagePayload { content })
            .send()
            .await?;
        Self::into_message(response).await
    }

    /// Fetch the most recent messages of a channel, newest first
    pub async fn latest_messages(
        &self,
        channel_id: &str,
        limit: u8,
    ) -> Result<Vec<Message>, PublishError> {
        let url = format!("{}/channels/{channel_id}/messages", self.api_base);
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bot {}", self.token))
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }

    async fn into_message(response: reqwest::Response) -> Result<Message, PublishError> {
        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(response.json().await?)
    }
}
