//! Availability-diffing and slot-classification engine
//!
//! The engine is the stateful heart of the watcher, implemented as three
//! pure transforms plus a snapshot codec:
//!
//! - [`normalize`] - merge per-venue results into one canonical schedule
//! - [`rarity`] - filter the canonical schedule down to high-demand slots
//! - [`delta`] - compare against the previous run's snapshot and keep
//!   only newly appeared slots
//! - [`snapshot`] - (de)serialize the rare-slot snapshot carried between
//!   runs
//!
//! Nothing here performs I/O or suspends; scraping, publishing, and
//! snapshot storage live in [`crate::source`], [`crate::discord`], and
//! [`crate::store`].

pub mod delta;
pub mod normalize;
pub mod rarity;
pub mod snapshot;

pub use delta::{delta, FirstRunPolicy};
pub use normalize::merge_schedules;
pub use rarity::{rare_slots, RarityRules};
pub use snapshot::{parse_snapshot, serialize_snapshot};
