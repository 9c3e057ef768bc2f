//! Common test utilities

use chrono::NaiveDate;
use vuoro::config::Config;
use vuoro::models::{DaySchedule, Slot, Venue};

/// Parse an ISO date, panicking on bad test input
#[allow(dead_code)]
pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// Build a one-date schedule from (venue, time) pairs
#[allow(dead_code)]
pub fn schedule_for(day: &str, slots: &[(Venue, &str)]) -> DaySchedule {
    DaySchedule::from([(
        date(day),
        slots
            .iter()
            .map(|(venue, time)| Slot::new(*venue, *time))
            .collect(),
    )])
}

/// Config wired to mock endpoints, with dummy credentials
#[allow(dead_code)]
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.scraper.email = "user@example.com".to_string();
    config.scraper.password = "hunter2".to_string();
    config.scraper.days_ahead = 1;
    config.discord.token = "test-token".to_string();
    config.discord.table_channel_id = "table".to_string();
    config.discord.notification_channel_id = "notify".to_string();
    config.discord.history_channel_id = "history".to_string();
    config
}
