//! Cintoia booking-site adapter
//!
//! Both Tali venues run on the Cintoia reservation platform. The
//! adapter logs in with the shared account, then walks the horizontal
//! day calendar forward from today, one page per day. Open courts are
//! the cells the calendar paints with the booking-blue background; a
//! desired time counts as open when any open cell's text mentions it.

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;

use super::{SlotSource, SourceError};
use crate::models::{DaySchedule, Slot, Venue};

/// CSS marker the calendar uses for a free court cell
const OPEN_CELL_SELECTOR: &str = r#"td[style*="background: none rgb(0, 123, 255);"]"#;

/// Scraper for one Cintoia-hosted venue
pub struct CintoiaSource {
    client: Client,
    venue: Venue,
    email: String,
    password: String,

    /// Base URL override for tests with a mock server
    base_url: Option<String>,
}

impl CintoiaSource {
    /// Create a source for the given venue.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Http` if the HTTP client cannot be built.
    pub fn new(
        venue: Venue,
        email: impl Into<String>,
        password: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            venue,
            email: email.into(),
            password: password.into(),
            base_url: None,
        })
    }

    /// Point the source at a mock server instead of the live site
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn base(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.venue.booking_url())
    }

    /// Log in and leave the session cookie in the cookie store
    async fn login(&self) -> Result<(), SourceError> {
        let response = self
            .client
            .post(format!("{}/login", self.base()))
            .form(&[
                ("email", self.email.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SourceError::LoginFailed { venue: self.venue });
        }
        if !status.is_success() && !status.is_redirection() {
            return Err(SourceError::ServerError {
                venue: self.venue,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Fetch the day-calendar page for one date
    async fn fetch_day(&self, date: NaiveDate) -> Result<String, SourceError> {
        let response = self
            .client
            .get(format!("{}/reservations", self.base()))
            .query(&[("date", date.to_string().as_str()), ("view", "day")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::ServerError {
                venue: self.venue,
                status: status.as_u16(),
            });
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl SlotSource for CintoiaSource {
    fn venue(&self) -> Venue {
        self.venue
    }

    async fn open_slots(
        &self,
        desired_times: &[String],
        days_ahead: u32,
    ) -> Result<DaySchedule, SourceError> {
        self.login().await?;

        let today = Local::now().date_naive();
        let mut schedule = DaySchedule::new();
        for offset in 0..days_ahead {
            let date = today + Days::new(u64::from(offset));
            let html = self.fetch_day(date).await?;
            let times = extract_open_times(self.venue, &html, desired_times)?;
            if times.is_empty() {
                tracing::debug!(venue = %self.venue, %date, "no open slots");
            }
            schedule.insert(
                date,
                times
                    .into_iter()
                    .map(|time| Slot::new(self.venue, time))
                    .collect(),
            );
        }
        Ok(schedule)
    }
}

/// Which desired times have at least one open cell on this day page.
///
/// Returned in the order of `desired_times`, each at most once; a time
/// appearing in several courts' cells is still one open slot entry.
fn extract_open_times(
    venue: Venue,
    html: &str,
    desired_times: &[String],
) -> Result<Vec<String>, SourceError> {
    let selector = Selector::parse(OPEN_CELL_SELECTOR).map_err(|e| SourceError::PageStructure {
        venue,
        detail: e.to_string(),
    })?;

    let document = Html::parse_document(html);
    let cell_texts: Vec<String> = document
        .select(&selector)
        .map(|cell| cell.text().collect::<String>())
        .collect();

    Ok(desired_times
        .iter()
        .filter(|time| cell_texts.iter().any(|text| text.contains(time.as_str())))
        .cloned()
        .collect())
}
