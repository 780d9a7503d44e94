//! Domain types for the YouVersion API.
//!
//! This module contains the data structures used to represent languages,
//! Bible versions, verses, and verse images.

mod image;
mod language;
mod verse;
mod version;

pub use image::{DownloadOptions, Image};
pub use language::Language;
pub use verse::{Verse, VerseOfTheDay, VerseOfTheDayPage};
pub use version::{BibleVersion, BibleVersionOption};
