//! Pastebin Client Library
//!
//! This library wraps the pastebin.com web service: raw paste text, the public
//! archive, the scraping API, and the developer API for creating and managing
//! pastes.
//!
//! # Features
//!
//! - `blocking` (default): [`Pastebin`], built on `reqwest::blocking`
//! - `async` (default): [`AsyncPastebin`], built on async `reqwest`
//! - Schema-less [`PasteRecord`]s that keep every field the service reports
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - API keys zeroized on drop and redacted from `Debug` output
//! - Well-typed errors using thiserror, request logging through `tracing`
//!
//! # Example
//!
//! ```no_run
//! use pastebin_client::{NewPaste, Pastebin, RecentPastes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut client = Pastebin::with_dev_key("your_dev_key")?;
//!
//! // Raw text of a public paste
//! let text = client.get_raw_paste("0b42rwhf")?;
//!
//! // Most recent pastes from the scraping API
//! for paste in client.get_recent_pastes(&RecentPastes::new().limit(5))? {
//!     println!("{:?} {:?}", paste.key(), paste.title());
//! }
//!
//! // Post as a user
//! client.authenticate("username", "password")?;
//! let url = client.create_paste(&NewPaste::new(text).with_format("rust"))?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "async")]
mod async_client;
#[cfg(feature = "blocking")]
mod client;
mod config;
mod error;
mod options;
mod parser;
mod record;
mod request;
mod user;

#[cfg(feature = "async")]
pub use async_client::{AsyncPastebin, AsyncPastebinBuilder};
#[cfg(feature = "blocking")]
pub use client::{Pastebin, PastebinBuilder};
pub use error::PastebinError;
pub use options::{DEFAULT_LIMIT, Expiration, NewPaste, RecentPastes, Visibility};
pub use record::{KEY_FIELD, PasteRecord};
pub use request::{DEFAULT_BASE_URL, DEFAULT_SCRAPE_URL};
pub use user::{AccountType, UserRecord};
