//! Settings shared by the blocking and async client builders

use crate::error::PastebinError;
use crate::request::{Credentials, DEFAULT_BASE_URL, DEFAULT_SCRAPE_URL, Endpoints};
use reqwest::Url;
use std::fmt;
use zeroize::Zeroizing;

/// User agent sent with every request
pub(crate) const USER_AGENT: &str = concat!("pastebin-client/", env!("CARGO_PKG_VERSION"));

/// Endpoint and key configuration collected by a builder
#[derive(Default)]
pub(crate) struct ClientConfig {
    base_url: Option<Url>,
    scrape_url: Option<Url>,
    dev_key: Option<Zeroizing<String>>,
}

impl ClientConfig {
    pub fn set_base_url(&mut self, url: impl reqwest::IntoUrl) -> Result<(), PastebinError> {
        self.base_url = Some(url.into_url()?);
        Ok(())
    }

    pub fn set_scrape_url(&mut self, url: impl reqwest::IntoUrl) -> Result<(), PastebinError> {
        self.scrape_url = Some(url.into_url()?);
        Ok(())
    }

    pub fn set_dev_key(&mut self, key: impl Into<String>) {
        self.dev_key = Some(Zeroizing::new(key.into()));
    }

    /// Resolve the configured endpoints, falling back to pastebin.com
    pub fn into_parts(self) -> Result<(Endpoints, Credentials), PastebinError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => parse_default(DEFAULT_BASE_URL)?,
        };
        let scrape_url = match self.scrape_url {
            Some(url) => url,
            None => parse_default(DEFAULT_SCRAPE_URL)?,
        };
        let credentials = Credentials {
            dev_key: self.dev_key,
            user_key: None,
        };
        Ok((Endpoints::new(base_url, scrape_url)?, credentials))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("scrape_url", &self.scrape_url)
            .field("dev_key", &self.dev_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn parse_default(url: &str) -> Result<Url, PastebinError> {
    Url::parse(url).map_err(|e| PastebinError::ClientInit(e.to_string()))
}
