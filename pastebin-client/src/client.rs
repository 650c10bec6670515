//! Blocking pastebin client

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

/// The blocking pastebin client
///
/// Every method performs exactly one HTTP round trip (or none, when a record
/// has no key or a required key is missing) and never retries.
///
/// # Example
///
/// ```no_run
/// use pastebin_client::{Pastebin, RecentPastes};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Pastebin::new()?;
///
/// // Public archive
/// for url in client.get_archive()? {
///     println!("{}", url);
/// }
///
/// // Scraping API (requires a whitelisted IP)
/// for paste in client.get_recent_pastes(&RecentPastes::default())? {
///     if let Some(text) = client.scrape_raw_text(&paste)? {
///         println!("{}: {} bytes", paste.key().unwrap_or("?"), text.len());
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Pastebin {
    client: reqwest::blocking::Client,
    endpoints: Endpoints,
    credentials: Credentials,
    parser: ResponseParser,
}

impl Pastebin {
    /// Create a client without a developer key
    ///
    /// Enough for the raw, archive and scraping calls.
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
    pub fn builder() -> PastebinBuilder {
        PastebinBuilder::new()
    }

    /// Whether `authenticate` has stored a user key
    pub fn is_authenticated(&self) -> bool {
        self.credentials.user_key.is_some()
    }

    /// Fetch the text of a record through the public raw endpoint
    ///
    /// Returns `Ok(None)` without touching the network when the record has
    /// no key.
    pub fn get_raw_text(&self, paste: &PasteRecord) -> Result<Option<String>, PastebinError> {
        let Some(key) = paste.key() else {
            debug!("paste record has no key, skipping raw fetch");
            return Ok(None);
        };
        self.get_raw_paste(key).map(Some)
    }

    /// Fetch the text of a record through the scraping API
    ///
    /// Returns `Ok(None)` without touching the network when the record has
    /// no key.
    pub fn scrape_raw_text(&self, paste: &PasteRecord) -> Result<Option<String>, PastebinError> {
        let Some(key) = paste.key() else {
            debug!("paste record has no key, skipping scrape");
            return Ok(None);
        };
        let request = self.endpoints.scrape_item(key)?;
        self.send(&request).map(Some)
    }

    /// Fetch the raw text of a paste by its id
    ///
    /// # Errors
    ///
    /// * `PastebinError::Request` - Network error, including a body cut short
    /// * `PastebinError::InvalidStatus` - HTTP error (e.g., 404 for unknown pastes)
    /// * `PastebinError::Encoding` - The paste body is not valid UTF-8
    pub fn get_raw_paste(&self, paste_id: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.raw_paste(paste_id)?;
        self.send(&request)
    }

    /// Fetch the URLs of the pastes listed on the public archive page
    pub fn get_archive(&self) -> Result<Vec<String>, PastebinError> {
        let request = self.endpoints.archive()?;
        let html = self.send(&request)?;
        self.parser.parse_archive(&html, &self.endpoints)
    }

    /// List recent public pastes through the scraping API
    ///
    /// # Errors
    ///
    /// * `PastebinError::Decode` - The body is not a JSON array of objects,
    ///   which is what the service answers to IPs without scraping access
    pub fn get_recent_pastes(
        &self,
        params: &RecentPastes,
    ) -> Result<Vec<PasteRecord>, PastebinError> {
        let request = self.endpoints.recent_pastes(params)?;
        let body = self.send(&request)?;
        self.parser.parse_recent_pastes(&body)
    }

    /// Log in and keep the returned user key for later calls
    ///
    /// # Errors
    ///
    /// * `PastebinError::MissingDevKey` - No developer key configured
    /// * `PastebinError::Api` - Wrong credentials or invalid developer key
    /// * `PastebinError::Parse` - The service answered with an empty user key
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<(), PastebinError> {
        let request = self.endpoints.login(&self.credentials, username, password)?;
        let mut body = self.send_api(&request)?;
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
    /// The paste is owned by the account when the client is authenticated,
    /// otherwise it is created as a guest paste.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pastebin_client::{Expiration, NewPaste, Pastebin};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Pastebin::with_dev_key("your_dev_key")?;
    /// let url = client.create_paste(
    ///     &NewPaste::new("hello").with_expiration(Expiration::TenMinutes),
    /// )?;
    /// println!("{}", url);
    /// # Ok(())
    /// # }
    /// ```
    pub fn create_paste(&self, paste: &NewPaste) -> Result<String, PastebinError> {
        let request = self.endpoints.create_paste(&self.credentials, paste)?;
        Ok(self.send_api(&request)?.trim().to_string())
    }

    /// Create a paste from a file's contents, other fields from `template`
    pub fn create_paste_from_file(
        &self,
        path: impl AsRef<Path>,
        template: NewPaste,
    ) -> Result<String, PastebinError> {
        let code = std::fs::read_to_string(path)?;
        self.create_paste(&NewPaste { code, ..template })
    }

    /// Fetch the authenticated account's details
    pub fn get_user_details(&self) -> Result<UserRecord, PastebinError> {
        let request = self.endpoints.user_details(&self.credentials)?;
        let xml = self.send_api(&request)?;
        self.parser.parse_user(&xml)
    }

    /// List trending pastes
    pub fn get_trending(&self) -> Result<Vec<PasteRecord>, PastebinError> {
        let request = self.endpoints.trending(&self.credentials)?;
        let xml = self.send_api(&request)?;
        Ok(self.parser.parse_paste_list(&xml))
    }

    /// List the authenticated account's pastes, at most `limit` of them
    ///
    /// `None` uses the service default of 50.
    pub fn get_user_pastes(&self, limit: Option<u32>) -> Result<Vec<PasteRecord>, PastebinError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let request = self.endpoints.user_pastes(&self.credentials, limit)?;
        let xml = self.send_api(&request)?;
        Ok(self.parser.parse_paste_list(&xml))
    }

    /// Delete one of the authenticated account's pastes
    ///
    /// Returns the confirmation message sent by the service.
    pub fn delete_user_paste(&self, paste_key: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.delete_paste(&self.credentials, paste_key)?;
        self.send_api(&request)
    }

    /// Fetch the raw text of one of the authenticated account's pastes,
    /// including private ones
    pub fn get_user_raw_paste(&self, paste_key: &str) -> Result<String, PastebinError> {
        let request = self.endpoints.user_raw_paste(&self.credentials, paste_key)?;
        self.send_api(&request)
    }

    /// Execute a request and return the body of a successful response
    fn send(&self, request: &ApiRequest) -> Result<String, PastebinError> {
        request.trace();

        let builder = match request.method {
            Method::Get => self.client.get(request.url.clone()),
            Method::Post => self.client.post(request.url.clone()).form(&request.form),
        };
        let response = builder.send()?;
        request.check_status(response.status())?;

        let body = response.bytes()?;
        String::from_utf8(body.to_vec()).map_err(|_| PastebinError::Encoding)
    }

    /// Like `send`, but for the developer API which reports errors in the body
    fn send_api(&self, request: &ApiRequest) -> Result<String, PastebinError> {
        let body = self.send(request)?;
        self.parser.check_api_body(body).inspect_err(|err| {
            warn!(operation = request.operation, error = %err, "pastebin API rejected request");
        })
    }
}

/// Builder for configuring a blocking pastebin client
///
/// # Example
///
/// ```no_run
/// use pastebin_client::Pastebin;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Pastebin::builder()
///     .dev_key("your_dev_key")
///     .base_url("http://localhost:1234")?
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PastebinBuilder {
    config: ClientConfig,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl PastebinBuilder {
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
    /// This is useful for testing with mock servers. The URL is parsed and
    /// validated at builder time.
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
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client with the configured settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP client cannot be initialized
    /// - A base URL cannot be used as a base (e.g. `mailto:` URLs)
    pub fn build(self) -> Result<Pastebin, PastebinError> {
        let (endpoints, credentials) = self.config.into_parts()?;

        let client = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PastebinError::ClientInit(e.to_string()))?;

        Ok(Pastebin {
            client,
            endpoints,
            credentials,
            parser: ResponseParser::new(),
        })
    }
}

impl Default for PastebinBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use proptest::prelude::*;
    use serde_json::json;

    fn client_for(server: &mockito::ServerGuard) -> Pastebin {
        Pastebin::builder()
            .dev_key("dev123")
            .base_url(server.url())
            .unwrap()
            .scrape_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    fn record(value: serde_json::Value) -> PasteRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_urls() {
        let client = Pastebin::new().unwrap();
        assert_eq!(client.endpoints.base_url.as_str(), "https://pastebin.com/");
        assert_eq!(
            client.endpoints.scrape_url.as_str(),
            "https://scrape.pastebin.com/"
        );
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(Pastebin::builder().base_url("not a valid url").is_err());
    }

    #[test]
    fn test_debug_hides_dev_key() {
        let client = Pastebin::with_dev_key("super_secret_key").unwrap();
        assert!(!format!("{client:?}").contains("super_secret_key"));
    }

    #[test]
    fn test_get_raw_paste() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/raw/0b42rwhf")
            .with_status(200)
            .with_body("console.log('hi');")
            .expect(1)
            .create();

        let text = client_for(&server).get_raw_paste("0b42rwhf").unwrap();
        assert_eq!(text, "console.log('hi');");
        mock.assert();
    }

    #[test]
    fn test_raw_text_without_key_makes_no_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", Matcher::Any)
            .with_status(200)
            .expect(0)
            .create();

        let client = client_for(&server);
        let paste = record(json!({"title": "no key here"}));
        assert_eq!(client.get_raw_text(&paste).unwrap(), None);
        assert_eq!(client.scrape_raw_text(&paste).unwrap(), None);
        mock.assert();
    }

    #[test]
    fn test_raw_text_with_key() {
        let mut server = mockito::Server::new();
        let raw = server
            .mock("GET", "/raw/abcd1234")
            .with_body("public text")
            .expect(1)
            .create();
        let scrape = server
            .mock("GET", "/api_scrape_item.php")
            .match_query(Matcher::UrlEncoded("i".into(), "abcd1234".into()))
            .with_body("scraped text")
            .expect(1)
            .create();

        let client = client_for(&server);
        let paste = record(json!({"key": "abcd1234"}));
        assert_eq!(
            client.get_raw_text(&paste).unwrap().as_deref(),
            Some("public text")
        );
        assert_eq!(
            client.scrape_raw_text(&paste).unwrap().as_deref(),
            Some("scraped text")
        );
        raw.assert();
        scrape.assert();
    }

    #[test]
    fn test_recent_pastes_default_params() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api_scraping.php")
            .match_query(Matcher::Exact("limit=50".into()))
            .with_header("content-type", "application/json")
            .with_body(r#"[{"key":"a1"},{"key":"b2"}]"#)
            .expect(1)
            .create();

        let pastes = client_for(&server)
            .get_recent_pastes(&RecentPastes::default())
            .unwrap();
        let keys: Vec<_> = pastes.iter().map(|p| p.key()).collect();
        assert_eq!(keys, vec![Some("a1"), Some("b2")]);
        mock.assert();
    }

    #[test]
    fn test_recent_pastes_with_lang() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api_scraping.php")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("lang".into(), "python".into()),
            ]))
            .with_body("[]")
            .expect(1)
            .create();

        let pastes = client_for(&server)
            .get_recent_pastes(&RecentPastes::new().limit(10).lang("python"))
            .unwrap();
        assert!(pastes.is_empty());
        mock.assert();
    }

    #[test]
    fn test_archive() {
        let mut server = mockito::Server::new();
        let html = r#"<html><body><table class="maintable">
<tr><th>Name / Title</th></tr>
<tr><td><a href="/AAAAaaaa">one</a></td><td><a href="/archive/c">C</a></td></tr>
<tr><td><a href="/BBBBbbbb">two</a></td><td><a href="/archive/rust">Rust</a></td></tr>
<tr><td><a href="/CCCC1111">three</a></td><td><a href="/archive/text">None</a></td></tr>
</table></body></html>"#;
        let mock = server
            .mock("GET", "/archive")
            .with_body(html)
            .expect(1)
            .create();

        let urls = client_for(&server).get_archive().unwrap();
        let base = server.url();
        assert_eq!(
            urls,
            vec![
                format!("{base}/AAAAaaaa"),
                format!("{base}/BBBBbbbb"),
                format!("{base}/CCCC1111"),
            ]
        );
        mock.assert();
    }

    #[test]
    fn test_transport_failure_propagates() {
        let client = Pastebin::builder()
            .base_url("http://127.0.0.1:1")
            .unwrap()
            .build()
            .unwrap();
        let result = client.get_raw_paste("abcd1234");
        assert!(matches!(result, Err(PastebinError::Request(_))));
    }

    /// Serve one response that promises more body bytes than it sends
    fn serve_truncated_body() -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
                .unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_truncated_body_is_a_request_error() {
        let client = Pastebin::builder()
            .base_url(serve_truncated_body())
            .unwrap()
            .build()
            .unwrap();
        let result = client.get_raw_paste("abcd1234");
        assert!(matches!(result, Err(PastebinError::Request(_))));
    }

    #[test]
    fn test_invalid_utf8_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/raw/abcd1234")
            .with_body(b"\xff\xfeA")
            .create();

        let result = client_for(&server).get_raw_paste("abcd1234");
        assert!(matches!(result, Err(PastebinError::Encoding)));
    }

    // Non-success statuses surface as errors on every read operation
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status_propagates(
            status_code in prop::sample::select(vec![400, 403, 404, 429, 500, 502, 503]),
        ) {
            let mut server = mockito::Server::new();
            let _raw = server.mock("GET", "/raw/abcd1234").with_status(status_code).create();
            let _archive = server.mock("GET", "/archive").with_status(status_code).create();
            let _recent = server
                .mock("GET", "/api_scraping.php")
                .match_query(Matcher::Any)
                .with_status(status_code)
                .create();
            let _scrape = server
                .mock("GET", "/api_scrape_item.php")
                .match_query(Matcher::Any)
                .with_status(status_code)
                .create();

            let client = client_for(&server);
            let paste = record(json!({"key": "abcd1234"}));
            let errors = [
                client.get_raw_paste("abcd1234").unwrap_err(),
                client.get_raw_text(&paste).unwrap_err(),
                client.scrape_raw_text(&paste).unwrap_err(),
                client.get_archive().unwrap_err(),
                client.get_recent_pastes(&RecentPastes::default()).unwrap_err(),
            ];

            for err in errors {
                prop_assert_eq!(err.status().map(|s| s.as_u16()), Some(status_code as u16));
            }
        }
    }

    #[test]
    fn test_authenticate_then_user_calls_send_user_key() {
        let mut server = mockito::Server::new();
        let login = server
            .mock("POST", "/api/api_login.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_dev_key".into(), "dev123".into()),
                Matcher::UrlEncoded("api_user_name".into(), "alice".into()),
                Matcher::UrlEncoded("api_user_password".into(), "hunter2".into()),
            ]))
            .with_body("userkey789\n")
            .expect(1)
            .create();
        let details = server
            .mock("POST", "/api/api_post.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_option".into(), "userdetails".into()),
                Matcher::UrlEncoded("api_user_key".into(), "userkey789".into()),
            ]))
            .with_body("<user><user_name>alice</user_name><user_account_type>0</user_account_type></user>")
            .expect(1)
            .create();

        let mut client = client_for(&server);
        client.authenticate("alice", "hunter2").unwrap();
        assert!(client.is_authenticated());

        let user = client.get_user_details().unwrap();
        assert_eq!(user.name(), Some("alice"));
        login.assert();
        details.assert();
    }

    #[test]
    fn test_authenticate_rejected() {
        let mut server = mockito::Server::new();
        let _login = server
            .mock("POST", "/api/api_login.php")
            .with_body("Bad API request, invalid login")
            .create();

        let mut client = client_for(&server);
        let err = client.authenticate("alice", "wrong").unwrap_err();
        assert!(matches!(err, PastebinError::Api(ref m) if m == "Bad API request, invalid login"));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_authenticate_blank_user_key() {
        let mut server = mockito::Server::new();
        let _login = server
            .mock("POST", "/api/api_login.php")
            .with_body("  \n")
            .create();

        let mut client = client_for(&server);
        let err = client.authenticate("alice", "hunter2").unwrap_err();
        assert!(matches!(err, PastebinError::Parse(_)));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_user_calls_require_keys_before_network() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create();

        let client = client_for(&server);
        assert!(matches!(
            client.get_user_details(),
            Err(PastebinError::MissingUserKey)
        ));
        assert!(matches!(
            client.delete_user_paste("abc"),
            Err(PastebinError::MissingUserKey)
        ));

        let keyless = Pastebin::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            keyless.create_paste(&NewPaste::new("x")),
            Err(PastebinError::MissingDevKey)
        ));
        mock.assert();
    }

    #[test]
    fn test_create_paste_from_file() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/api_post.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_option".into(), "paste".into()),
                Matcher::UrlEncoded("api_paste_code".into(), "fn main() {}\n".into()),
                Matcher::UrlEncoded("api_paste_format".into(), "rust".into()),
            ]))
            .with_body("https://pastebin.com/UIFdu235s")
            .expect(1)
            .create();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.rs");
        std::fs::write(&path, "fn main() {}\n").unwrap();

        let url = client_for(&server)
            .create_paste_from_file(&path, NewPaste::default().with_format("rust"))
            .unwrap();
        assert_eq!(url, "https://pastebin.com/UIFdu235s");
        mock.assert();
    }

    #[test]
    fn test_create_paste_from_missing_file() {
        let client = Pastebin::with_dev_key("dev123").unwrap();
        let result = client.create_paste_from_file("/definitely/not/here.txt", NewPaste::default());
        assert!(matches!(result, Err(PastebinError::Io(_))));
    }

    #[test]
    fn test_trending_and_user_pastes() {
        let mut server = mockito::Server::new();
        let xml = "<paste><paste_key>0b42rwhf</paste_key><paste_hits>15</paste_hits></paste>\n\
                   <paste><paste_key>0C343n0d</paste_key><paste_hits>65</paste_hits></paste>";
        let trends = server
            .mock("POST", "/api/api_post.php")
            .match_body(Matcher::UrlEncoded("api_option".into(), "trends".into()))
            .with_body(xml)
            .expect(1)
            .create();
        let list = server
            .mock("POST", "/api/api_post.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_option".into(), "list".into()),
                Matcher::UrlEncoded("api_results_limit".into(), "50".into()),
            ]))
            .with_body("No pastes found.")
            .expect(1)
            .create();

        let mut client = client_for(&server);
        let trending = client.get_trending().unwrap();
        assert_eq!(trending.len(), 2);
        assert_eq!(trending[1].hits(), Some(65));

        client.credentials.user_key = Some(Zeroizing::new("userkey".to_string()));
        assert!(client.get_user_pastes(None).unwrap().is_empty());
        trends.assert();
        list.assert();
    }

    #[test]
    fn test_delete_and_user_raw_paste() {
        let mut server = mockito::Server::new();
        let delete = server
            .mock("POST", "/api/api_post.php")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_option".into(), "delete".into()),
                Matcher::UrlEncoded("api_paste_key".into(), "0b42rwhf".into()),
            ]))
            .with_body("Paste Removed")
            .expect(1)
            .create();
        let raw = server
            .mock("POST", "/api/api_raw.php")
            .match_body(Matcher::UrlEncoded("api_option".into(), "show_paste".into()))
            .with_body("private text")
            .expect(1)
            .create();

        let mut client = client_for(&server);
        client.credentials.user_key = Some(Zeroizing::new("userkey".to_string()));
        assert_eq!(client.delete_user_paste("0b42rwhf").unwrap(), "Paste Removed");
        assert_eq!(client.get_user_raw_paste("0b42rwhf").unwrap(), "private text");
        delete.assert();
        raw.assert();
    }
}
