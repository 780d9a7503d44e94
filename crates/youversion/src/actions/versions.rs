//! Bible version actions.
//!
//! # Example
//!
//! ```no_run
//! use youversion::{Language, YouVersionClient};
//!
//! # async fn example() -> youversion::Result<()> {
//! let client = YouVersionClient::new("my-token", Language::English)?;
//!
//! for version in client.versions().list().await? {
//!     println!("{:>8}  {}", version.abbreviation, version.title);
//! }
//!
//! let asv = client.versions().get("ASV").await?;
//! println!("ASV has id {:?}", asv.id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;

use crate::client::YouVersionClient;
use crate::error::{Error, Result};
use crate::request::DataResponse;
use crate::types::BibleVersion;

/// Provides access to Bible version operations.
///
/// Obtained via [`YouVersionClient::versions()`].
#[derive(Debug)]
pub struct VersionActions<'a> {
    pub(crate) client: &'a YouVersionClient,
}

impl<'a> VersionActions<'a> {
    /// List the Bible versions available in the client's language.
    ///
    /// Versions keep the service's order. When the service lists an
    /// abbreviation more than once, the first entry wins.
    pub async fn list(&self) -> Result<Vec<BibleVersion>> {
        let response: DataResponse<BibleVersion> = self.client.get("versions").await?;

        let mut seen = HashSet::new();
        Ok(response
            .data
            .into_iter()
            .filter(|version| seen.insert(version.abbreviation.clone()))
            .collect())
    }

    /// Get the Bible version with the given code (abbreviation).
    ///
    /// Returns [`Error::NotFound`] if the service does not list it.
    pub async fn get(&self, code: &str) -> Result<BibleVersion> {
        self.list()
            .await?
            .into_iter()
            .find(|version| version.abbreviation == code)
            .ok_or_else(|| Error::NotFound(format!("bible version {}", code)))
    }

    /// Get a Bible version by its numeric id.
    pub async fn by_id(&self, id: u64) -> Result<BibleVersion> {
        self.client.get(&format!("versions/{}", id)).await
    }

    /// Check whether a Bible version code is offered.
    ///
    /// Only [`Error::NotFound`] maps to `false`; other failures propagate.
    pub async fn supports(&self, code: &str) -> Result<bool> {
        match self.get(code).await {
            Ok(_) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
