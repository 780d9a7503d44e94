//! The YouVersion API client and builder.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::actions::{ImageActions, VerseOfTheDayActions, VersionActions};
use crate::error::{Error, Result};
use crate::types::{BibleVersion, BibleVersionOption, Language, VerseOfTheDay};

/// Default base URL of the YouVersion developer API.
const DEFAULT_URL: &str = "https://developers.youversionapi.com/1.0";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the developer token.
const TOKEN_HEADER: &str = "x-youversion-developer-token";

/// The main client for interacting with the YouVersion API.
///
/// Holds the developer token, the language, and the selected Bible version.
/// Creating a client makes no network calls.
///
/// # Example
///
/// ```no_run
/// use youversion::{Language, YouVersionClient};
///
/// # async fn example() -> youversion::Result<()> {
/// let mut client = YouVersionClient::new("my-token", Language::English)?;
/// assert_eq!(client.bible_version(), "KJV");
///
/// client.set_bible_version("ASV");
/// let votd = client.get_verse_of_the_day().await?;
/// println!("{}: {}", votd.verse.reference, votd.verse.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct YouVersionClient {
    http_client: Client,
    base_url: String,
    token: String,
    language: Language,
    bible_version: BibleVersionOption,
}

impl YouVersionClient {
    /// Create a client with a developer token and language.
    ///
    /// Fails with [`Error::Config`] if the token is empty.
    pub fn new(token: impl Into<String>, language: Language) -> Result<Self> {
        Self::builder().token(token).language(language).build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access Bible version operations.
    pub fn versions(&self) -> VersionActions<'_> {
        VersionActions { client: self }
    }

    /// Access verse of the day operations.
    pub fn verse_of_the_day(&self) -> VerseOfTheDayActions<'_> {
        VerseOfTheDayActions { client: self }
    }

    /// Access image operations.
    pub fn images(&self) -> ImageActions<'_> {
        ImageActions { client: self }
    }

    /// The configured language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the language sent with subsequent requests.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Code of the selected Bible version, "KJV" unless changed.
    pub fn bible_version(&self) -> &str {
        self.bible_version.code()
    }

    /// The selected Bible version, as it was set.
    pub fn bible_version_option(&self) -> &BibleVersionOption {
        &self.bible_version
    }

    /// Select a Bible version by code or by value.
    ///
    /// The selection is stored as given; an unknown code is only reported
    /// by the next request that needs it.
    ///
    /// ```no_run
    /// # use youversion::{Language, YouVersionClient};
    /// # async fn example() -> youversion::Result<()> {
    /// let mut client = YouVersionClient::new("my-token", Language::English)?;
    ///
    /// client.set_bible_version("ASV");
    ///
    /// let niv = client.get_bible_version("NIV").await?;
    /// client.set_bible_version(niv);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_bible_version(&mut self, version: impl Into<BibleVersionOption>) {
        self.bible_version = version.into();
    }

    /// Select a Bible version by its code.
    pub fn set_bible_version_by_code(&mut self, code: impl Into<String>) {
        self.bible_version = BibleVersionOption::Code(code.into());
    }

    /// List the Bible versions available in the configured language.
    pub async fn bible_versions(&self) -> Result<Vec<BibleVersion>> {
        self.versions().list().await
    }

    /// Look up a Bible version by code.
    pub async fn get_bible_version(&self, code: &str) -> Result<BibleVersion> {
        self.versions().get(code).await
    }

    /// Check whether the service offers a Bible version with this code.
    pub async fn supports_bible_version(&self, code: &str) -> Result<bool> {
        self.versions().supports(code).await
    }

    /// Get today's verse of the day in the selected Bible version.
    pub async fn get_verse_of_the_day(&self) -> Result<VerseOfTheDay> {
        self.verse_of_the_day().today().await
    }

    /// Get the verse of the day for a day of the year (1-366).
    pub async fn get_verse_of_the_day_for(&self, day: u16) -> Result<VerseOfTheDay> {
        self.verse_of_the_day().day(day).await
    }

    /// Resolve the selected Bible version to a full [`BibleVersion`].
    ///
    /// A code selection is looked up against the service.
    pub(crate) async fn resolved_bible_version(&self) -> Result<BibleVersion> {
        match &self.bible_version {
            BibleVersionOption::Version(version) => Ok(version.clone()),
            BibleVersionOption::Code(code) => self.versions().get(code).await,
        }
    }

    /// GET an API resource without query parameters.
    pub(crate) async fn get<R>(&self, resource: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.get_with_query::<(), R>(resource, None).await
    }

    /// GET an API resource and decode the JSON body.
    pub(crate) async fn get_with_query<Q, R>(&self, resource: &str, query: Option<&Q>) -> Result<R>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        );

        let mut request = self
            .http_client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header(TOKEN_HEADER, &self.token)
            .header(header::ACCEPT_LANGUAGE, self.language.code());
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = check_status(request.send().await?, resource)?;

        // Read the body first so a bad payload is reported as a decode
        // error rather than a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET an arbitrary URL without API headers, for image bytes.
    pub(crate) async fn fetch(&self, url: &str) -> Result<Response> {
        let response = self.http_client.get(url).send().await?;
        check_status(response, url)
    }
}

/// Map 404 to [`Error::NotFound`] and other non-success codes to
/// [`Error::Status`].
fn check_status(response: Response, resource: &str) -> Result<Response> {
    let status = response.status();
    debug!(resource, status = status.as_u16(), "GET");

    if status == StatusCode::NOT_FOUND {
        return Err(Error::NotFound(resource.to_string()));
    }
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response)
}

/// Builder for creating a customized [`YouVersionClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use youversion::{Language, YouVersionClient};
///
/// # fn example() -> youversion::Result<()> {
/// let client = YouVersionClient::builder()
///     .token("my-token")
///     .language(Language::Spanish)
///     .bible_version("RVR1960")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    token: Option<String>,
    language: Language,
    bible_version: BibleVersionOption,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            token: None,
            language: Language::default(),
            bible_version: BibleVersionOption::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://developers.youversionapi.com/1.0`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the developer token. Required.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the language. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the initial Bible version. Defaults to KJV.
    pub fn bible_version(mut self, version: impl Into<BibleVersionOption>) -> Self {
        self.bible_version = version.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] if no token (or an empty one) was set.
    pub fn build(self) -> Result<YouVersionClient> {
        let token = match self.token {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(Error::Config("developer token is required".to_string())),
        };

        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(YouVersionClient {
            http_client,
            base_url: self.base_url,
            token,
            language: self.language,
            bible_version: self.bible_version,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
