//! Response parsing utilities

use crate::error::PastebinError;
use crate::record::PasteRecord;
use crate::request::Endpoints;
use crate::user::UserRecord;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use std::sync::OnceLock;

/// Prefix of every error message the developer API answers with
const API_ERROR_PREFIX: &str = "Bad API request";

/// Parser for pastebin responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    paste_link_regex: OnceLock<Regex>,
    archive_link_selector: OnceLock<Selector>,
    paste_selector: OnceLock<Selector>,
    user_selector: OnceLock<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            paste_link_regex: OnceLock::new(),
            archive_link_selector: OnceLock::new(),
            paste_selector: OnceLock::new(),
            user_selector: OnceLock::new(),
        }
    }

    /// Get or compile the regex matching a link to a paste page
    fn paste_link_regex(&self) -> &Regex {
        self.paste_link_regex
            .get_or_init(|| Regex::new(r"^/([A-Za-z0-9]{8})$").unwrap())
    }

    /// Get or compile the selector for links in the archive table
    fn archive_link_selector(&self) -> &Selector {
        self.archive_link_selector
            .get_or_init(|| Selector::parse("table.maintable a[href]").unwrap())
    }

    fn paste_selector(&self) -> &Selector {
        self.paste_selector
            .get_or_init(|| Selector::parse("paste").unwrap())
    }

    fn user_selector(&self) -> &Selector {
        self.user_selector
            .get_or_init(|| Selector::parse("user").unwrap())
    }

    /// Extract paste ids linked from the archive table, in document order
    pub fn extract_archive_ids(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let regex = self.paste_link_regex();

        document
            .select(self.archive_link_selector())
            .filter_map(|link| link.value().attr("href"))
            .filter_map(|href| regex.captures(href))
            .filter_map(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
            .collect()
    }

    /// Turn the archive page into full paste URLs
    pub fn parse_archive(
        &self,
        html: &str,
        endpoints: &Endpoints,
    ) -> Result<Vec<String>, PastebinError> {
        self.extract_archive_ids(html)
            .iter()
            .map(|id| endpoints.paste_url(id).map(String::from))
            .collect()
    }

    /// Decode the JSON array returned by the scraping API
    pub fn parse_recent_pastes(&self, body: &str) -> Result<Vec<PasteRecord>, PastebinError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Parse the `<paste>` list returned by the trends and list options
    ///
    /// Each child tag becomes a field with its `paste_` prefix removed. An
    /// empty body is an empty list.
    pub fn parse_paste_list(&self, xml: &str) -> Vec<PasteRecord> {
        let fragment = Html::parse_fragment(xml);

        fragment
            .select(self.paste_selector())
            .map(|paste| PasteRecord::from_fields(child_fields(paste, "paste_")))
            .collect()
    }

    /// Parse the `<user>` element returned by the userdetails option
    pub fn parse_user(&self, xml: &str) -> Result<UserRecord, PastebinError> {
        let fragment = Html::parse_fragment(xml);

        let user = fragment
            .select(self.user_selector())
            .next()
            .ok_or(PastebinError::Parse("missing <user> element"))?;

        Ok(UserRecord::from_fields(child_fields(user, "user_")))
    }

    /// Surface `Bad API request` bodies as errors, pass everything else on
    pub fn check_api_body(&self, body: String) -> Result<String, PastebinError> {
        if body.trim_start().starts_with(API_ERROR_PREFIX) {
            return Err(PastebinError::Api(body.trim().to_string()));
        }
        Ok(body)
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Child elements of `element` as string fields, `prefix` stripped from names
fn child_fields(element: ElementRef<'_>, prefix: &str) -> Vec<(String, Value)> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| {
            let tag = child.value().name();
            let name = tag.strip_prefix(prefix).unwrap_or(tag).to_string();
            let text = child.text().collect::<String>();
            (name, Value::String(text))
        })
        .collect()
}
