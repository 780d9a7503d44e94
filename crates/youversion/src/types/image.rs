//! Verse image type.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An image accompanying a verse of the day.
///
/// The service returns a URL template with `{width}` and `{height}`
/// placeholders; [`Image::url`] and [`Image::square_url`] fill them in.
/// Downloads go through [`ImageActions`](crate::actions::ImageActions).
///
/// ```
/// use youversion::Image;
///
/// let image = Image::new(
///     "//imageproxy.youversionapi.com/{width}x{height}/votd.jpg",
///     "© YouVersion",
///     "John 3:16",
/// );
///
/// let url = image.square_url(256).unwrap();
/// assert_eq!(url, "https://imageproxy.youversionapi.com/256x256/votd.jpg");
/// assert!(image.square_url(2048).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    template: String,
    /// Attribution text for the image.
    pub attribution: String,
    /// Reference of the verse the image illustrates.
    pub reference: String,
}

impl Image {
    /// Largest width or height the image service accepts.
    pub const MAX_SIZE: u32 = 1280;

    /// Create an image from a URL template.
    ///
    /// Protocol-relative templates (`//host/...`) are given an `https:` scheme.
    pub fn new(
        template: impl Into<String>,
        attribution: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        let template = template.into();
        let template = if template.starts_with("//") {
            format!("https:{}", template)
        } else {
            template
        };

        Self {
            template,
            attribution: attribution.into(),
            reference: reference.into(),
        }
    }

    /// The raw URL template.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// URL for the image at the given dimensions.
    ///
    /// Both dimensions must be within `1..=MAX_SIZE`.
    pub fn url(&self, width: u32, height: u32) -> Result<String> {
        check_size(width)?;
        check_size(height)?;

        Ok(self
            .template
            .replace("{width}", &width.to_string())
            .replace("{height}", &height.to_string()))
    }

    /// URL for a square image of the given size.
    pub fn square_url(&self, size: u32) -> Result<String> {
        self.url(size, size)
    }

    /// File name used when downloading without an explicit destination.
    ///
    /// The verse reference reduced to lowercase alphanumerics, plus `.jpg`.
    pub fn default_file_name(&self) -> String {
        format!("{}.jpg", slugify(&self.reference))
    }
}

/// Parameters for downloading an [`Image`].
///
/// Defaults to the largest square size, saved as
/// [`Image::default_file_name`] in the current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Full path of the file to write.
    pub path: Option<PathBuf>,
    /// Directory to write the default file name into, when `path` is unset.
    pub directory: Option<PathBuf>,
}

impl DownloadOptions {
    /// Options for a full size image in the current directory.
    pub fn new() -> Self {
        Self {
            width: Image::MAX_SIZE,
            height: Image::MAX_SIZE,
            path: None,
            directory: None,
        }
    }

    /// Set both dimensions.
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Download a square image.
    pub fn square(self, size: u32) -> Self {
        self.size(size, size)
    }

    /// Write to this exact path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Write the default file name into this directory.
    pub fn directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directory = Some(dir.into());
        self
    }
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self::new()
    }
}

fn check_size(size: u32) -> Result<()> {
    if size == 0 || size > Image::MAX_SIZE {
        return Err(Error::InvalidImageSize(size));
    }
    Ok(())
}

fn slugify(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
