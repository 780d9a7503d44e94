//! Bible version (translation) types.

use serde::{Deserialize, Serialize};

/// Information about a Bible version as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibleVersion {
    /// Numeric version id, sent as `version_id` on verse of the day requests.
    ///
    /// Some listing entries omit it; such versions can be listed but not
    /// used for verse of the day requests.
    #[serde(default)]
    pub id: Option<u64>,
    /// Full title, e.g. "King James Version".
    #[serde(default)]
    pub title: String,
    /// Short code, e.g. "KJV".
    #[serde(default)]
    pub abbreviation: String,
    /// Title in the version's own language.
    #[serde(default)]
    pub local_title: String,
    /// Abbreviation in the version's own language.
    #[serde(default)]
    pub local_abbreviation: String,
    /// Short copyright notice.
    #[serde(default, rename = "copyright_short")]
    pub copyright: String,
}

impl BibleVersion {
    /// The King James Version, the client's default selection.
    pub fn kjv() -> Self {
        Self {
            id: Some(1),
            title: "King James Version".to_string(),
            abbreviation: "KJV".to_string(),
            local_title: "King James Version".to_string(),
            local_abbreviation: "KJV".to_string(),
            copyright: "Crown Copyright in UK".to_string(),
        }
    }

    /// The code identifying this version (its abbreviation).
    pub fn code(&self) -> &str {
        &self.abbreviation
    }
}

/// A Bible version selection: either a bare code or a fetched version.
///
/// Accepted by [`YouVersionClient::set_bible_version`](crate::YouVersionClient::set_bible_version)
/// through `From` conversions, so callers can pass `"ASV"` or a
/// [`BibleVersion`] directly.
///
/// A code is stored verbatim and only resolved against the service when a
/// request needs the version id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BibleVersionOption {
    /// A translation code such as "ASV".
    Code(String),
    /// A version already fetched from the service.
    Version(BibleVersion),
}

impl BibleVersionOption {
    /// The selected translation code.
    pub fn code(&self) -> &str {
        match self {
            BibleVersionOption::Code(code) => code,
            BibleVersionOption::Version(version) => version.code(),
        }
    }
}

impl Default for BibleVersionOption {
    fn default() -> Self {
        BibleVersionOption::Version(BibleVersion::kjv())
    }
}

impl From<BibleVersion> for BibleVersionOption {
    fn from(version: BibleVersion) -> Self {
        BibleVersionOption::Version(version)
    }
}

impl From<&BibleVersion> for BibleVersionOption {
    fn from(version: &BibleVersion) -> Self {
        BibleVersionOption::Version(version.clone())
    }
}

impl From<String> for BibleVersionOption {
    fn from(code: String) -> Self {
        BibleVersionOption::Code(code)
    }
}

impl From<&str> for BibleVersionOption {
    fn from(code: &str) -> Self {
        BibleVersionOption::Code(code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_version() {
        let json = r#"{
            "id": 12,
            "title": "American Standard Version",
            "abbreviation": "ASV",
            "local_title": "American Standard Version",
            "local_abbreviation": "ASV",
            "copyright_short": "Public Domain"
        }"#;

        let version: BibleVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.id, Some(12));
        assert_eq!(version.code(), "ASV");
        assert_eq!(version.copyright, "Public Domain");
    }

    #[test]
    fn test_deserialize_sparse_version() {
        let version: BibleVersion = serde_json::from_str(r#"{"id": 59}"#).unwrap();
        assert_eq!(version.id, Some(59));
        assert!(version.abbreviation.is_empty());

        let version: BibleVersion = serde_json::from_str(r#"{"abbreviation": "KJV"}"#).unwrap();
        assert_eq!(version.id, None);
    }

    #[test]
    fn test_option_code() {
        assert_eq!(BibleVersionOption::default().code(), "KJV");
        assert_eq!(BibleVersionOption::from("NIV").code(), "NIV");

        let mut asv = BibleVersion::kjv();
        asv.abbreviation = "ASV".to_string();
        assert_eq!(BibleVersionOption::from(&asv).code(), "ASV");
    }
}
