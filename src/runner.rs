//! One poll cycle
//!
//! Control flow of a run, in order: scrape every venue (any failure
//! aborts before anything is published or stored), normalize, classify,
//! read the previous snapshot, compute the delta, then attempt the
//! table publish and the rare-slot notification as independent failure
//! domains. The snapshot is written after both attempts, whether or not
//! they succeeded and whether or not the delta was empty; only then is
//! a publish failure reported.

use chrono::Utc;

use crate::config::Config;
use crate::discord::{format_notification, render_table, DiscordClient, PublishError};
use crate::engine::{delta, merge_schedules, rare_slots};
use crate::error::Result;
use crate::models::DaySchedule;
use crate::source::SlotSource;
use crate::store::SnapshotStore;

/// Outcome of one poll cycle
#[derive(Debug)]
pub struct RunReport {
    /// Merged availability across venues
    pub canonical: DaySchedule,

    /// High-demand subset, persisted as the next baseline
    pub rare: DaySchedule,

    /// Rare slots that newly appeared this run
    pub delta: DaySchedule,

    /// Whether a notification message was sent
    pub notified: bool,
}

/// Execute one full poll cycle
pub async fn run_once(
    config: &Config,
    sources: &[Box<dyn SlotSource>],
    client: &DiscordClient,
    store: &dyn SnapshotStore,
) -> Result<RunReport> {
    let mut per_venue = Vec::with_capacity(sources.len());
    for source in sources {
        tracing::info!(venue = %source.venue(), "scraping open slots");
        let schedule = source
            .open_slots(&config.scraper.desired_times, config.scraper.days_ahead)
            .await?;
        per_venue.push(schedule);
    }

    let canonical = merge_schedules(per_venue);
    let rare = rare_slots(&canonical, &config.rarity.rules);
    let previous = store.get().await?;
    if previous.is_none() {
        tracing::info!(policy = ?config.rarity.first_run_policy, "no snapshot baseline");
    }
    let fresh = delta(previous.as_ref(), &rare, config.rarity.first_run_policy);

    // Independent failure domains: both publishes are attempted before
    // either failure is reported, and the snapshot is written either way.
    let table_result = publish_table(client, &config.discord.table_channel_id, &canonical).await;
    let notify_result =
        send_notification(client, &config.discord.notification_channel_id, &fresh).await;
    let notified = matches!(&notify_result, Ok(true));

    store.put(&rare).await?;

    table_result?;
    notify_result?;

    Ok(RunReport {
        canonical,
        rare,
        delta: fresh,
        notified,
    })
}

/// Create or edit the single table message
async fn publish_table(
    client: &DiscordClient,
    channel_id: &str,
    canonical: &DaySchedule,
) -> std::result::Result<(), PublishError> {
    let content = render_table(canonical, Utc::now());
    let existing = client
        .latest_messages(channel_id, 1)
        .await?
        .into_iter()
        .next();

    match existing {
        // Edit instead of re-sending so server members are not pinged
        // on every refresh
        Some(message) => {
            client.edit_message(channel_id, &message.id, &content).await?;
            tracing::info!("table message updated");
        }
        None => {
            client.send_message(channel_id, &content).await?;
            tracing::info!("table message created");
        }
    }
    Ok(())
}

/// Send the rare-slot notification when the delta is non-empty
async fn send_notification(
    client: &DiscordClient,
    channel_id: &str,
    fresh: &DaySchedule,
) -> std::result::Result<bool, PublishError> {
    match format_notification(fresh) {
        Some(content) => {
            client.send_message(channel_id, &content).await?;
            tracing::info!(
                slots = fresh.values().map(Vec::len).sum::<usize>(),
                "rare-slot notification sent"
            );
            Ok(true)
        }
        None => {
            tracing::info!("no newly appeared rare slots");
            Ok(false)
        }
    }
}
