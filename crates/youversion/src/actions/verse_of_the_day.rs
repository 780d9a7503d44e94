//! Verse of the day actions.
//!
//! # Example
//!
//! ```no_run
//! use youversion::{Language, YouVersionClient};
//!
//! # async fn example() -> youversion::Result<()> {
//! let client = YouVersionClient::new("my-token", Language::English)?;
//!
//! let today = client.verse_of_the_day().today().await?;
//! println!("{}", today.verse.text);
//!
//! // Christmas in a non-leap year
//! let christmas = client.verse_of_the_day().day(359).await?;
//! println!("{}", christmas.verse.reference);
//! # Ok(())
//! # }
//! ```

use tracing::debug;

use crate::client::YouVersionClient;
use crate::day::{check_day, current_day_of_year};
use crate::error::Result;
use crate::request::{VerseOfTheDayData, VerseOfTheDayListResponse, VersionQuery};
use crate::types::{VerseOfTheDay, VerseOfTheDayPage};

/// Provides access to verse of the day operations.
///
/// Obtained via [`YouVersionClient::verse_of_the_day()`]. Requests use the
/// client's selected Bible version; a version selected by code is resolved
/// first, which fails with [`Error::NotFound`](crate::Error::NotFound) for
/// an unknown code.
#[derive(Debug)]
pub struct VerseOfTheDayActions<'a> {
    pub(crate) client: &'a YouVersionClient,
}

impl<'a> VerseOfTheDayActions<'a> {
    /// Get the verse of the day for the current local day of the year.
    pub async fn today(&self) -> Result<VerseOfTheDay> {
        self.day(current_day_of_year()).await
    }

    /// Get the verse of the day for a day of the year.
    ///
    /// Days outside `1..=366` fail with
    /// [`Error::DayOutOfBounds`](crate::Error::DayOutOfBounds) before any
    /// request is sent.
    pub async fn day(&self, day: u16) -> Result<VerseOfTheDay> {
        let day = check_day(day)?;
        let version = self.client.resolved_bible_version().await?;
        debug!(day, version = %version.abbreviation, "Fetching verse of the day");

        let query = VersionQuery::for_version(&version)?;
        let data: VerseOfTheDayData = self
            .client
            .get_with_query(&format!("verse_of_the_day/{}", day), Some(&query))
            .await?;

        Ok(data.into_verse_of_the_day(&version))
    }

    /// List verses of the day.
    ///
    /// The service currently returns every day in a single page.
    pub async fn all(&self) -> Result<VerseOfTheDayPage> {
        let version = self.client.resolved_bible_version().await?;

        let query = VersionQuery::for_version(&version)?;
        let response: VerseOfTheDayListResponse = self
            .client
            .get_with_query("verse_of_the_day", Some(&query))
            .await?;

        Ok(response.into_page(&version))
    }
}
