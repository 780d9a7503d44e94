//! Action modules for YouVersion API operations.
//!
//! Each module provides a set of related operations grouped by resource.

mod images;
mod verse_of_the_day;
mod versions;

pub use images::ImageActions;
pub use verse_of_the_day::VerseOfTheDayActions;
pub use versions::VersionActions;
