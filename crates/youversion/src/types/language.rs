//! Languages supported by the YouVersion API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A language supported by the YouVersion API.
///
/// The language is sent as the `accept-language` header on every request
/// and determines which translations the service lists.
///
/// Parses from either the language name or its wire code:
///
/// ```
/// use youversion::Language;
///
/// assert_eq!("Spanish".parse::<Language>().unwrap(), Language::Spanish);
/// assert_eq!("es".parse::<Language>().unwrap(), Language::Spanish);
/// assert_eq!("chinese simplified".parse::<Language>().unwrap(), Language::ChineseSimplified);
/// assert!("Klingon".parse::<Language>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    Afrikaans,
    ChineseSimplified,
    ChineseTraditional,
    Dutch,
    #[default]
    English,
    French,
    German,
    Greek,
    Indonesian,
    Italian,
    Khmer,
    Korean,
    Portuguese,
    Romanian,
    Russian,
    Spanish,
    Swahili,
    Swedish,
    /// Tagalog, also accepted as "Filipino".
    Tagalog,
    Ukrainian,
    Vietnamese,
    Zulu,
}

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 22] = [
        Language::Afrikaans,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Dutch,
        Language::English,
        Language::French,
        Language::German,
        Language::Greek,
        Language::Indonesian,
        Language::Italian,
        Language::Khmer,
        Language::Korean,
        Language::Portuguese,
        Language::Romanian,
        Language::Russian,
        Language::Spanish,
        Language::Swahili,
        Language::Swedish,
        Language::Tagalog,
        Language::Ukrainian,
        Language::Vietnamese,
        Language::Zulu,
    ];

    /// The code sent to the service.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Afrikaans => "af",
            Language::ChineseSimplified => "zh_CN",
            Language::ChineseTraditional => "zh_TW",
            Language::Dutch => "nl",
            Language::English => "en",
            Language::French => "fr",
            Language::German => "de",
            Language::Greek => "el",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Khmer => "km",
            Language::Korean => "ko",
            Language::Portuguese => "pt",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Swahili => "sw",
            Language::Swedish => "sv",
            Language::Tagalog => "tl",
            Language::Ukrainian => "uk",
            Language::Vietnamese => "vi",
            Language::Zulu => "zu",
        }
    }

    /// The English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Afrikaans => "Afrikaans",
            Language::ChineseSimplified => "Chinese (Simplified)",
            Language::ChineseTraditional => "Chinese (Traditional)",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Indonesian => "Indonesian",
            Language::Italian => "Italian",
            Language::Khmer => "Khmer",
            Language::Korean => "Korean",
            Language::Portuguese => "Portuguese",
            Language::Romanian => "Romanian",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swahili => "Swahili",
            Language::Swedish => "Swedish",
            Language::Tagalog => "Tagalog",
            Language::Ukrainian => "Ukrainian",
            Language::Vietnamese => "Vietnamese",
            Language::Zulu => "Zulu",
        }
    }

    /// Look up a language by its wire code.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// Lowercase and drop everything but letters, so "Chinese_Simplified",
/// "chinese simplified" and "Chinese (Simplified)" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(lang) = Language::from_code(s) {
            return Ok(lang);
        }

        let wanted = normalize(s);
        if wanted == "filipino" {
            return Ok(Language::Tagalog);
        }

        Language::ALL
            .into_iter()
            .find(|lang| normalize(lang.name()) == wanted)
            .ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
