//! Async pastebin client
//!
//! Mirrors [`crate::Pastebin`] call for call on top of the async `reqwest`
//! client. Each method suspends only while its single request is in flight.

use crate::config::{ClientConfig, USER_AGENT};
use crate::error::PastebinError;
use crate::options::{DEFAULT_LIMIT, NewPaste, RecentPastes};
use crate::parser::ResponseParser;
use crate::record::PasteRecord;
use crate::request::{ApiRequest, Credentials, Endpoints, Method};
use crate::user::UserRecord;
use std::path::Path;
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

/// The async pastebin client
///
/// The client is cheap to clone and `Send + Sync`, so independent calls can
/// run concurrently from different tasks.
///
/// # Example
///
/// ```no_run
/// use pastebin_client::{AsyncPastebin, RecentPastes};
///
/// # async fn run() -> Result<(), pastebin_client::PastebinError> {
/// let client = AsyncPastebin::new()?;
///
/// let pastes = client.get_recent_pastes(&RecentPastes::new().limit(10)).await?;
/// for paste in &pastes {
///     if let Some(text) = client.get_raw_text(paste).await? {
///         println!("{}", text);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AsyncPastebin {
    client: reqwest::Client,
    endpoints: Endpoints,
    credentials: Credentials,
    parser: ResponseParser,
}

impl AsyncPastebin {
    /// Create a client without a developer key
    ///
    /// # Errors
    ///
    /// Returns `PastebinError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, PastebinError> {
        Self::builder().build()
    }

    /// Create a client that can use the developer API
    pub fn with_dev_key(dev_key: impl Into<String>) -> Result<Self, PastebinError> {
        Self::builder().dev_key(dev_key).build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> AsyncPastebinBuilder {
        AsyncPastebinBuilder::new()
    }

    /// Whether `authenticate` has stored a user key
    pub fn is_authenticated(&self) -> bool {
        self.credentials.user_key.is_some()
    }

    /// Fetch the text of a record through the public raw endpoint
    ///
    /// Resolves to `Ok(None)` without touching the network when the record
    /// has no key.
    pub async fn get_raw_text(&self, paste: &PasteRecord) -> Result<Option<String>, PastebinError> {
        let Some(key) = paste.key() else {
            debug!("paste record has no key, skipping raw fetch");
            return Ok(None);
        };
        self.get_raw_paste(key).await.map(Some)
    }

    /// Fetch the text of a record through the scraping API
    ///
    /// Resolves to `Ok(None)` without touching the network when the record
    /// has no key.
    pub async fn scrape_raw_text(
        &self,
        paste: &PasteRecord,
    ) -> Result<Option<String>, PastebinError> {
        let Some(key) = paste.key() else {
            debug!("paste record has no key, skipping scrape");
            return Ok(None);
        };
        let request = self.endpoints.scrape_item(key)?;
        self.send(&request).await.map(Some)
    }

    /// Fetch the raw text of a paste by its id
    ///
    /// # Errors
    ///
    /// * `PastebinError::Request` - Network error, including a body cut short
    /// * `PastebinError::InvalidStatus` - HTTP error (e.g., 404 for unknown pastes)
    /// * `PastebinError::Encoding` - The paste body is not valid UTF-8
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pastebin_client::AsyncPastebin;
    ///
    /// # async fn run() -> Result<(), pastebin_client::PastebinError> {
    /// let client = AsyncPastebin::new()?;
    /// let text = client.get_raw_paste("0b42rwhf").await?;
    /// println!("{}", text);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_raw_paste(&self, paste_id: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.raw_paste(paste_id)?;
        self.send(&request).await
    }

    /// Fetch the URLs of the pastes listed on the public archive page
    pub async fn get_archive(&self) -> Result<Vec<String>, PastebinError> {
        let request = self.endpoints.archive()?;
        let html = self.send(&request).await?;
        self.parser.parse_archive(&html, &self.endpoints)
    }

    /// List recent public pastes through the scraping API
    ///
    /// # Errors
    ///
    /// * `PastebinError::Decode` - The body is not a JSON array of objects,
    ///   which is what the service answers to IPs without scraping access
    pub async fn get_recent_pastes(
        &self,
        params: &RecentPastes,
    ) -> Result<Vec<PasteRecord>, PastebinError> {
        let request = self.endpoints.recent_pastes(params)?;
        let body = self.send(&request).await?;
        self.parser.parse_recent_pastes(&body)
    }

    /// Log in and keep the returned user key for later calls
    ///
    /// # Errors
    ///
    /// * `PastebinError::MissingDevKey` - No developer key configured
    /// * `PastebinError::Api` - Wrong credentials or invalid developer key
    /// * `PastebinError::Parse` - The service answered with an empty user key
    pub async fn authenticate(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<(), PastebinError> {
        let request = self.endpoints.login(&self.credentials, username, password)?;
        let mut body = self.send_api(&request).await?;
        let user_key = Zeroizing::new(body.trim().to_string());
        body.zeroize();
        if user_key.is_empty() {
            warn!("pastebin login returned an empty user key");
            return Err(PastebinError::Parse("empty user key in login response"));
        }
        self.credentials.user_key = Some(user_key);
        debug!("pastebin user key stored");
        Ok(())
    }

    /// Create a paste and return its URL
    ///
    /// Owned by the account once `authenticate` has succeeded, a guest paste
    /// otherwise.
    pub async fn create_paste(&self, paste: &NewPaste) -> Result<String, PastebinError> {
        let request = self.endpoints.create_paste(&self.credentials, paste)?;
        Ok(self.send_api(&request).await?.trim().to_string())
    }

    /// Create a paste from a file's contents, other fields from `template`
    ///
    /// The file is read on tokio's blocking pool.
    ///
    /// # Errors
    ///
    /// * `PastebinError::Io` - The file cannot be read as UTF-8 text
    pub async fn create_paste_from_file(
        &self,
        path: impl AsRef<Path>,
        template: NewPaste,
    ) -> Result<String, PastebinError> {
        let code = tokio::fs::read_to_string(path).await?;
        self.create_paste(&NewPaste { code, ..template }).await
    }

    /// Fetch the authenticated account's details
    pub async fn get_user_details(&self) -> Result<UserRecord, PastebinError> {
        let request = self.endpoints.user_details(&self.credentials)?;
        let xml = self.send_api(&request).await?;
        self.parser.parse_user(&xml)
    }

    /// List trending pastes
    pub async fn get_trending(&self) -> Result<Vec<PasteRecord>, PastebinError> {
        let request = self.endpoints.trending(&self.credentials)?;
        let xml = self.send_api(&request).await?;
        Ok(self.parser.parse_paste_list(&xml))
    }

    /// List the authenticated account's pastes, 50 when `limit` is `None`
    pub async fn get_user_pastes(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<PasteRecord>, PastebinError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let request = self.endpoints.user_pastes(&self.credentials, limit)?;
        let xml = self.send_api(&request).await?;
        Ok(self.parser.parse_paste_list(&xml))
    }

    /// Delete one of the authenticated account's pastes
    pub async fn delete_user_paste(&self, paste_key: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.delete_paste(&self.credentials, paste_key)?;
        self.send_api(&request).await
    }

    /// Fetch the raw text of one of the account's pastes, private ones included
    pub async fn get_user_raw_paste(&self, paste_key: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.user_raw_paste(&self.credentials, paste_key)?;
        self.send_api(&request).await
    }

    /// Execute a request and return the body of a successful response
    async fn send(&self, request: &ApiRequest) -> Result<String, PastebinError> {
        request.trace();

        let builder = match request.method {
            Method::Get => self.client.get(request.url.clone()),
            Method::Post => self.client.post(request.url.clone()).form(&request.form),
        };
        let response = builder.send().await?;
        request.check_status(response.status())?;

        let body = response.bytes().await?;
        String::from_utf8(body.to_vec()).map_err(|_| PastebinError::Encoding)
    }

    async fn send_api(&self, request: &ApiRequest) -> Result<String, PastebinError> {
        let body = self.send(request).await?;
        self.parser.check_api_body(body).inspect_err(|err| {
            warn!(operation = request.operation, error = %err, "pastebin API rejected request");
        })
    }
}

/// Builder for configuring an async pastebin client
///
/// Same options as [`crate::PastebinBuilder`], taking an async
/// `reqwest::ClientBuilder`.
#[derive(Debug)]
pub struct AsyncPastebinBuilder {
    config: ClientConfig,
    client_builder: Option<reqwest::ClientBuilder>,
}

impl AsyncPastebinBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            client_builder: None,
        }
    }

    /// Set the developer key used by the developer API calls
    pub fn dev_key(mut self, key: impl Into<String>) -> Self {
        self.config.set_dev_key(key);
        self
    }

    /// Set a custom base URL for the public site and developer API
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, PastebinError> {
        self.config.set_base_url(url)?;
        Ok(self)
    }

    /// Set a custom base URL for the scraping API
    pub fn scrape_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, PastebinError> {
        self.config.set_scrape_url(url)?;
        Ok(self)
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    pub fn client_builder(mut self, builder: reqwest::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized or a base
    /// URL cannot be used as a base.
    pub fn build(self) -> Result<AsyncPastebin, PastebinError> {
        let (endpoints, credentials) = self.config.into_parts()?;

        let client = self
            .client_builder
            .unwrap_or_else(|| reqwest::Client::builder().use_rustls_tls())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PastebinError::ClientInit(e.to_string()))?;

        Ok(AsyncPastebin {
            client,
            endpoints,
            credentials,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for AsyncPastebinBuilder {
    fn default() -> Self {
        Self::new()
    }
}
