//! Verse and verse of the day types.

use serde::{Deserialize, Serialize};

use super::{BibleVersion, Image};

/// A Bible verse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Human readable reference, e.g. "John 3:16".
    #[serde(default, rename = "human_reference")]
    pub reference: String,
    /// Plain text of the verse.
    pub text: String,
    /// HTML rendering of the verse.
    #[serde(default)]
    pub html: String,
    /// Link to the verse on bible.com.
    #[serde(default)]
    pub url: String,
    /// USFM identifiers, e.g. `["JHN.3.16"]`.
    #[serde(default)]
    pub usfms: Vec<String>,
}

/// The verse of the day for a given day of the year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseOfTheDay {
    /// Day of the year (1-366).
    pub day: Option<u16>,
    /// The version the verse was requested in.
    pub bible_version: BibleVersion,
    /// The verse itself.
    pub verse: Verse,
    /// The image accompanying the verse.
    pub image: Image,
}

/// A listing of verses of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseOfTheDayPage {
    /// Whether the service reports another page.
    pub next_page: bool,
    /// Page size reported by the service, or the entry count when absent.
    pub page_size: usize,
    /// The entries on this page.
    pub verses: Vec<VerseOfTheDay>,
}

impl VerseOfTheDayPage {
    /// Number of entries on this page.
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// Whether the page has no entries.
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }
}
