//! Request descriptions shared by the blocking and async clients
//!
//! Every operation is first described as an [`ApiRequest`] (method, URL with
//! query, form fields). The clients only execute these, so both variants send
//! exactly the same requests.

use crate::error::PastebinError;
use crate::options::{NewPaste, RecentPastes};
use reqwest::{StatusCode, Url};
use std::fmt;
use tracing::{debug, warn};
use zeroize::{Zeroize, Zeroizing};

/// Default location of the public site and the developer API
pub const DEFAULT_BASE_URL: &str = "https://pastebin.com";

/// Default location of the scraping API
pub const DEFAULT_SCRAPE_URL: &str = "https://scrape.pastebin.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
}

/// One HTTP request described as plain data
///
/// Form values may hold the developer key, user key or password; they are
/// zeroized when the request is dropped.
pub(crate) struct ApiRequest {
    pub operation: &'static str,
    pub method: Method,
    pub url: Url,
    pub form: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Emit the debug event for this request; form values are never logged
    pub fn trace(&self) {
        debug!(
            operation = self.operation,
            method = ?self.method,
            url = %self.url,
            "sending pastebin request"
        );
    }

    /// Turn a non-2xx status into [`PastebinError::InvalidStatus`]
    pub fn check_status(&self, status: StatusCode) -> Result<(), PastebinError> {
        if status.is_success() {
            return Ok(());
        }
        warn!(operation = self.operation, %status, "pastebin request failed");
        Err(PastebinError::InvalidStatus { status })
    }
}

impl Drop for ApiRequest {
    fn drop(&mut self) {
        for (_, value) in &mut self.form {
            value.zeroize();
        }
    }
}

/// API keys held by a client
#[derive(Clone, Default)]
pub(crate) struct Credentials {
    pub dev_key: Option<Zeroizing<String>>,
    pub user_key: Option<Zeroizing<String>>,
}

impl Credentials {
    fn dev_key(&self) -> Result<&str, PastebinError> {
        self.dev_key
            .as_deref()
            .map(String::as_str)
            .ok_or(PastebinError::MissingDevKey)
    }

    fn user_key(&self) -> Result<&str, PastebinError> {
        self.user_key
            .as_deref()
            .map(String::as_str)
            .ok_or(PastebinError::MissingUserKey)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<Zeroizing<String>>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("dev_key", &redact(&self.dev_key))
            .field("user_key", &redact(&self.user_key))
            .finish()
    }
}

/// Base URLs of the two pastebin hosts
#[derive(Debug, Clone)]
pub(crate) struct Endpoints {
    pub base_url: Url,
    pub scrape_url: Url,
}

impl Endpoints {
    pub fn new(base_url: Url, scrape_url: Url) -> Result<Self, PastebinError> {
        for url in [&base_url, &scrape_url] {
            if url.cannot_be_a_base() {
                return Err(PastebinError::ClientInit(format!(
                    "URL cannot be used as a base: {url}"
                )));
            }
        }
        Ok(Self {
            base_url,
            scrape_url,
        })
    }

    /// Public page of a paste, as listed in the archive
    pub fn paste_url(&self, id: &str) -> Result<Url, PastebinError> {
        join(&self.base_url, &[id])
    }

    pub fn raw_paste(&self, id: &str) -> Result<ApiRequest, PastebinError> {
        Ok(get("raw_paste", join(&self.base_url, &["raw", id])?))
    }

    pub fn scrape_item(&self, key: &str) -> Result<ApiRequest, PastebinError> {
        let mut url = join(&self.scrape_url, &["api_scrape_item.php"])?;
        url.query_pairs_mut().append_pair("i", key);
        Ok(get("scrape_item", url))
    }

    pub fn archive(&self) -> Result<ApiRequest, PastebinError> {
        Ok(get("archive", join(&self.base_url, &["archive"])?))
    }

    pub fn recent_pastes(&self, params: &RecentPastes) -> Result<ApiRequest, PastebinError> {
        let mut url = join(&self.scrape_url, &["api_scraping.php"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &params.limit.to_string());
            if let Some(lang) = &params.lang {
                query.append_pair("lang", lang);
            }
        }
        Ok(get("recent_pastes", url))
    }

    pub fn login(
        &self,
        credentials: &Credentials,
        username: &str,
        password: &str,
    ) -> Result<ApiRequest, PastebinError> {
        let form = vec![
            ("api_dev_key", credentials.dev_key()?.to_string()),
            ("api_user_name", username.to_string()),
            ("api_user_password", password.to_string()),
        ];
        self.api_call("login", "api_login.php", form)
    }

    /// `api_user_key` is attached when available so the paste belongs to the
    /// account; otherwise the paste is created as a guest.
    pub fn create_paste(
        &self,
        credentials: &Credentials,
        paste: &NewPaste,
    ) -> Result<ApiRequest, PastebinError> {
        let mut form = vec![
            ("api_dev_key", credentials.dev_key()?.to_string()),
            ("api_option", "paste".to_string()),
            ("api_paste_code", paste.code.clone()),
            ("api_paste_private", paste.visibility.as_flag().to_string()),
        ];
        if let Some(name) = &paste.name {
            form.push(("api_paste_name", name.clone()));
        }
        if let Some(expiration) = paste.expiration {
            form.push(("api_paste_expire_date", expiration.as_str().to_string()));
        }
        if let Some(format) = &paste.format {
            form.push(("api_paste_format", format.clone()));
        }
        if let Ok(user_key) = credentials.user_key() {
            form.push(("api_user_key", user_key.to_string()));
        }
        self.api_call("create_paste", "api_post.php", form)
    }

    pub fn user_details(&self, credentials: &Credentials) -> Result<ApiRequest, PastebinError> {
        let form = account_form(credentials, "userdetails")?;
        self.api_call("user_details", "api_post.php", form)
    }

    pub fn trending(&self, credentials: &Credentials) -> Result<ApiRequest, PastebinError> {
        let form = vec![
            ("api_dev_key", credentials.dev_key()?.to_string()),
            ("api_option", "trends".to_string()),
        ];
        self.api_call("trending", "api_post.php", form)
    }

    pub fn user_pastes(
        &self,
        credentials: &Credentials,
        limit: u32,
    ) -> Result<ApiRequest, PastebinError> {
        let mut form = account_form(credentials, "list")?;
        form.push(("api_results_limit", limit.to_string()));
        self.api_call("user_pastes", "api_post.php", form)
    }

    pub fn delete_paste(
        &self,
        credentials: &Credentials,
        paste_key: &str,
    ) -> Result<ApiRequest, PastebinError> {
        let mut form = account_form(credentials, "delete")?;
        form.push(("api_paste_key", paste_key.to_string()));
        self.api_call("delete_paste", "api_post.php", form)
    }

    pub fn user_raw_paste(
        &self,
        credentials: &Credentials,
        paste_key: &str,
    ) -> Result<ApiRequest, PastebinError> {
        let mut form = account_form(credentials, "show_paste")?;
        form.push(("api_paste_key", paste_key.to_string()));
        self.api_call("user_raw_paste", "api_raw.php", form)
    }

    fn api_call(
        &self,
        operation: &'static str,
        script: &str,
        form: Vec<(&'static str, String)>,
    ) -> Result<ApiRequest, PastebinError> {
        Ok(ApiRequest {
            operation,
            method: Method::Post,
            url: join(&self.base_url, &["api", script])?,
            form,
        })
    }
}

/// Form for calls acting on the authenticated account
fn account_form(
    credentials: &Credentials,
    option: &str,
) -> Result<Vec<(&'static str, String)>, PastebinError> {
    Ok(vec![
        ("api_dev_key", credentials.dev_key()?.to_string()),
        ("api_user_key", credentials.user_key()?.to_string()),
        ("api_option", option.to_string()),
    ])
}

fn get(operation: &'static str, url: Url) -> ApiRequest {
    ApiRequest {
        operation,
        method: Method::Get,
        url,
        form: Vec::new(),
    }
}

/// Replace the path of `base` with `segments`, percent-encoding each one
fn join(base: &Url, segments: &[&str]) -> Result<Url, PastebinError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| PastebinError::ClientInit("Cannot modify base URL path".to_string()))?
        .clear()
        .extend(segments);
    Ok(url)
}
