//! An async Rust client for the YouVersion public Bible API.
//!
//! This crate lists Bible versions, fetches the verse of the day, and builds
//! and downloads the images that accompany it.
//!
//! # Quick Start
//!
//! ```no_run
//! use youversion::{Language, YouVersionClient};
//!
//! # async fn example() -> youversion::Result<()> {
//! // Create a client; KJV is selected by default
//! let client = YouVersionClient::new("my-developer-token", Language::English)?;
//!
//! let votd = client.get_verse_of_the_day().await?;
//! println!("{} ({})", votd.verse.text, votd.verse.reference);
//! println!("{}", votd.image.square_url(640)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use youversion::{Language, YouVersionClient};
//!
//! # fn example() -> youversion::Result<()> {
//! let client = YouVersionClient::builder()
//!     .token("my-developer-token")
//!     .language(Language::German)
//!     .bible_version("LUT")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`YouVersionClient::versions()`] - List and look up Bible versions
//! - [`YouVersionClient::verse_of_the_day()`] - Verse of the day by day of year
//! - [`YouVersionClient::images()`] - Download verse images
//!
//! The most common calls are also available directly on the client, such as
//! [`YouVersionClient::get_verse_of_the_day()`].
//!
//! # Requirements
//!
//! A YouVersion developer token. Requests go to
//! `https://developers.youversionapi.com/1.0` unless another URL is configured.

pub mod actions;
pub mod client;
pub mod day;
pub mod error;
mod request;
pub mod types;

pub use client::{ClientBuilder, YouVersionClient};
pub use error::{Error, Result};
pub use types::{
    BibleVersion, BibleVersionOption, DownloadOptions, Image, Language, Verse, VerseOfTheDay,
    VerseOfTheDayPage,
};
