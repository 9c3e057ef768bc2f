//! Tests for the Discord REST client and the channel-backed snapshot store

mod common;

use common::schedule_for;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vuoro::discord::{DiscordClient, PublishError};
use vuoro::models::Venue;
use vuoro::store::{ChannelStore, SnapshotStore};

async fn client_for(server: &MockServer) -> DiscordClient {
    DiscordClient::with_api_base("test-token", server.uri()).unwrap()
}

#[tokio::test]
async fn test_send_message_posts_content_with_bot_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/channels/c1/messages"))
        .and(header("Authorization", "Bot test-token"))
        .and(body_partial_json(json!({"content": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "content": "hello"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client.send_message("c1", "hello").await.unwrap();
    assert_eq!(message.id, "42");
}

#[tokio::test]
async fn test_edit_message_patches_in_place() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/channels/c1/messages/42"))
        .and(body_partial_json(json!({"content": "updated"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "content": "updated"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let message = client.edit_message("c1", "42", "updated").await.unwrap();
    assert_eq!(message.content, "updated");
}

#[tokio::test]
async fn test_latest_messages_passes_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels/c1/messages"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "9", "content": "{}"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let messages = client.latest_messages("c1", 1).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, "9");
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/channels/c1/messages"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Missing Access"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.send_message("c1", "hello").await.unwrap_err();
    assert!(matches!(err, PublishError::Api { status: 403, .. }));
}

#[tokio::test]
async fn test_channel_store_absent_then_create() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels/history/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/channels/history/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "h1",
            "content": "{}"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = ChannelStore::new(client_for(&server).await, "history");
    assert_eq!(store.get().await.unwrap(), None);

    let rare = schedule_for("2024-06-03", &[(Venue::Talihalli, "17:00")]);
    store.put(&rare).await.unwrap();
}

#[tokio::test]
async fn test_channel_store_edits_existing_record() {
    let rare = schedule_for("2024-06-03", &[(Venue::Talihalli, "17:00")]);
    let payload = serde_json::to_string(&rare).unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels/history/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "h1", "content": payload}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/channels/history/messages/h1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "h1",
            "content": "{}"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = ChannelStore::new(client_for(&server).await, "history");
    assert_eq!(store.get().await.unwrap(), Some(rare));

    // Never a second history record: the existing message is edited
    store.put(&vuoro::models::DaySchedule::new()).await.unwrap();
}

#[tokio::test]
async fn test_channel_store_garbled_snapshot_is_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/channels/history/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "h1", "content": "edited out-of-band"}
        ])))
        .mount(&server)
        .await;

    let store = ChannelStore::new(client_for(&server).await, "history");
    assert_eq!(store.get().await.unwrap(), None);
}
