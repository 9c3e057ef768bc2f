//! Slot sources
//!
//! A slot source answers one question per venue: which of the desired
//! times are open on each day of the scan window. Any source failure is
//! fatal for the whole run; the caller publishes nothing and leaves the
//! stored snapshot untouched so the next scheduled run starts from a
//! clean baseline.

pub mod cintoia;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{DaySchedule, Venue};

pub use cintoia::CintoiaSource;

/// Errors raised while scraping a booking site
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP request error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Login rejected by the booking site
    #[error("login rejected at {venue}")]
    LoginFailed { venue: Venue },

    /// Server returned a non-success status
    #[error("server error {status} from {venue}")]
    ServerError { venue: Venue, status: u16 },

    /// The page did not contain what the extractor expects
    #[error("unexpected page structure at {venue}: {detail}")]
    PageStructure { venue: Venue, detail: String },
}

/// A per-venue provider of open slots.
///
/// `open_slots` returns a schedule covering `days_ahead` days starting
/// today. Days the venue has nothing open on are present with an empty
/// slot list, mirroring what the booking calendar shows.
#[async_trait]
pub trait SlotSource: Send + Sync {
    /// The venue this source scrapes
    fn venue(&self) -> Venue;

    /// Fetch open slots for the scan window
    async fn open_slots(
        &self,
        desired_times: &[String],
        days_ahead: u32,
    ) -> Result<DaySchedule, SourceError>;
}
