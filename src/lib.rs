//! vuoro - Tali badminton slot watcher
//!
//! Polls the two Tali booking sites for open badminton courts, publishes
//! the combined availability as a table message on Discord, and notifies
//! a second channel when high-demand slots newly open up. The only state
//! carried between runs is the previous rare-slot snapshot, stored as a
//! single message in a history channel.
//!
//! # Architecture
//!
//! - [`config`] - Configuration from environment variables or TOML
//! - [`models`] - Venues, slots, schedules, weekday arithmetic
//! - [`engine`] - Normalize / classify / diff transforms and the
//!   snapshot codec (pure, the only part with idempotence concerns)
//! - [`source`] - Booking-site scrapers
//! - [`discord`] - REST client, table rendering, notification text
//! - [`store`] - Snapshot persistence behind a trait
//! - [`runner`] - One poll cycle wiring it all together
//!
//! # Example
//!
//! ```no_run
//! use vuoro::config::Config;
//! use vuoro::engine::{merge_schedules, rare_slots};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! let canonical = merge_schedules(std::iter::empty::<vuoro::DaySchedule>());
//! let rare = rare_slots(&canonical, &config.rarity.rules);
//! # let _ = rare;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod discord;
pub mod engine;
pub mod error;
pub mod models;
pub mod runner;
pub mod source;
pub mod store;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::discord::DiscordClient;
    pub use crate::engine::{
        delta, merge_schedules, parse_snapshot, rare_slots, serialize_snapshot, FirstRunPolicy,
        RarityRules,
    };
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{weekday_of, DaySchedule, Slot, Venue, Weekday};
    pub use crate::runner::{run_once, RunReport};
    pub use crate::source::{CintoiaSource, SlotSource};
    pub use crate::store::{ChannelStore, FileStore, SnapshotStore};
}

// Direct re-exports for convenience
pub use models::{DaySchedule, Slot, Venue, Weekday};
