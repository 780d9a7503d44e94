//! Internal request and response types for the YouVersion REST API.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{BibleVersion, Image, Verse, VerseOfTheDay, VerseOfTheDayPage};

/// Query parameters for verse of the day requests.
#[derive(Debug, Serialize)]
pub(crate) struct VersionQuery {
    pub version_id: u64,
}

impl VersionQuery {
    /// Query for a version; fails if the service never gave it an id.
    pub fn for_version(version: &BibleVersion) -> Result<Self> {
        let version_id = version.id.ok_or_else(|| {
            Error::Config(format!("bible version {} has no id", version.abbreviation))
        })?;
        Ok(Self { version_id })
    }
}

/// A `{"data": [...]}` list envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataResponse<T> {
    pub data: Vec<T>,
}

/// Image as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct ImageData {
    pub url: String,
    #[serde(default)]
    pub attribution: String,
}

/// A verse of the day as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(crate) struct VerseOfTheDayData {
    #[serde(default)]
    pub day: Option<u16>,
    pub verse: Verse,
    pub image: ImageData,
}

impl VerseOfTheDayData {
    /// Attach the requested version and link the image to its verse.
    pub fn into_verse_of_the_day(self, bible_version: &BibleVersion) -> VerseOfTheDay {
        let image = Image::new(
            self.image.url,
            self.image.attribution,
            self.verse.reference.clone(),
        );

        VerseOfTheDay {
            day: self.day,
            bible_version: bible_version.clone(),
            verse: self.verse,
            image,
        }
    }
}

/// The verse of the day listing. `data` may be absent entirely.
#[derive(Debug, Deserialize)]
pub(crate) struct VerseOfTheDayListResponse {
    #[serde(default)]
    pub data: Option<Vec<VerseOfTheDayData>>,
    #[serde(default)]
    pub next_page: Option<bool>,
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl VerseOfTheDayListResponse {
    pub fn into_page(self, bible_version: &BibleVersion) -> VerseOfTheDayPage {
        let verses: Vec<VerseOfTheDay> = self
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|data| data.into_verse_of_the_day(bible_version))
            .collect();

        VerseOfTheDayPage {
            next_page: self.next_page.unwrap_or(false),
            page_size: self.page_size.unwrap_or(verses.len()),
            verses,
        }
    }
}
