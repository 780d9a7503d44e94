//! Verse image actions.
//!
//! # Example
//!
//! ```no_run
//! use youversion::{DownloadOptions, Language, YouVersionClient};
//!
//! # async fn example() -> youversion::Result<()> {
//! let client = YouVersionClient::new("my-token", Language::English)?;
//! let votd = client.get_verse_of_the_day().await?;
//!
//! // Full size into the current directory, named after the verse
//! let path = client.images().download(&votd.image, DownloadOptions::new()).await?;
//! println!("Saved {}", path.display());
//!
//! // A 512px thumbnail at an explicit path
//! let options = DownloadOptions::new().square(512).path("/tmp/votd-thumb.jpg");
//! client.images().download(&votd.image, options).await?;
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::client::YouVersionClient;
use crate::error::{Error, Result};
use crate::types::{DownloadOptions, Image};

/// Provides access to image operations.
///
/// Obtained via [`YouVersionClient::images()`].
#[derive(Debug)]
pub struct ImageActions<'a> {
    pub(crate) client: &'a YouVersionClient,
}

impl<'a> ImageActions<'a> {
    /// Download an image and return the path it was written to.
    ///
    /// The body is streamed into a temporary file next to the destination,
    /// which is renamed into place once complete. On any failure the
    /// temporary file is removed and the destination is left untouched.
    pub async fn download(&self, image: &Image, options: DownloadOptions) -> Result<PathBuf> {
        let url = image.url(options.width, options.height)?;
        let path = match options.path {
            Some(path) => path,
            None => {
                let dir = match options.directory {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                dir.join(image.default_file_name())
            }
        };

        // Fail on an unwritable destination before touching the network.
        let mut file = NamedTempFile::new_in(parent_dir(&path))?;

        let mut response = self.client.fetch(&url).await?;
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk)?;
            written += chunk.len() as u64;
        }
        file.flush()?;
        file.persist(&path).map_err(|e| Error::Io(e.error))?;

        info!(path = %path.display(), bytes = written, "Image downloaded");
        Ok(path)
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
