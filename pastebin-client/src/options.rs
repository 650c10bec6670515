//! Options for creating pastes and listing recent ones

use std::fmt;
use std::str::FromStr;

/// Who can see a paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    #[default]
    Public,
    Unlisted,
    /// Only visible to the owner; requires a user key
    Private,
}

impl Visibility {
    /// Value of the `api_paste_private` form field
    pub fn as_flag(self) -> u8 {
        match self {
            Visibility::Public => 0,
            Visibility::Unlisted => 1,
            Visibility::Private => 2,
        }
    }
}

impl TryFrom<u64> for Visibility {
    type Error = u64;

    fn try_from(flag: u64) -> Result<Self, Self::Error> {
        match flag {
            0 => Ok(Visibility::Public),
            1 => Ok(Visibility::Unlisted),
            2 => Ok(Visibility::Private),
            other => Err(other),
        }
    }
}

/// How long a new paste lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expiration {
    Never,
    TenMinutes,
    OneHour,
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    SixMonths,
    OneYear,
}

impl Expiration {
    /// Code sent as `api_paste_expire_date`
    pub fn as_str(self) -> &'static str {
        match self {
            Expiration::Never => "N",
            Expiration::TenMinutes => "10M",
            Expiration::OneHour => "1H",
            Expiration::OneDay => "1D",
            Expiration::OneWeek => "1W",
            Expiration::TwoWeeks => "2W",
            Expiration::OneMonth => "1M",
            Expiration::SixMonths => "6M",
            Expiration::OneYear => "1Y",
        }
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Expiration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Expiration::Never),
            "10M" => Ok(Expiration::TenMinutes),
            "1H" => Ok(Expiration::OneHour),
            "1D" => Ok(Expiration::OneDay),
            "1W" => Ok(Expiration::OneWeek),
            "2W" => Ok(Expiration::TwoWeeks),
            "1M" => Ok(Expiration::OneMonth),
            "6M" => Ok(Expiration::SixMonths),
            "1Y" => Ok(Expiration::OneYear),
            other => Err(format!("unknown expiration code: {other}")),
        }
    }
}

/// A paste to be created
///
/// Only `code` is required. Unset optional fields are left out of the request
/// so the service applies its own (or the account's) defaults.
///
/// # Example
///
/// ```
/// use pastebin_client::{Expiration, NewPaste, Visibility};
///
/// let paste = NewPaste::new("fn main() {}")
///     .with_name("hello.rs")
///     .with_format("rust")
///     .with_visibility(Visibility::Unlisted)
///     .with_expiration(Expiration::OneDay);
/// assert_eq!(paste.code, "fn main() {}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewPaste {
    pub code: String,
    pub name: Option<String>,
    /// Syntax highlighting format, e.g. `rust` or `python`
    pub format: Option<String>,
    pub visibility: Visibility,
    pub expiration: Option<Expiration>,
}

impl NewPaste {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn with_expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = Some(expiration);
        self
    }
}

/// Default number of results for listing calls
pub const DEFAULT_LIMIT: u32 = 50;

/// Parameters for the recent pastes scraping call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentPastes {
    /// Maximum number of pastes returned
    pub limit: u32,
    /// Only return pastes in this syntax; `None` means any
    pub lang: Option<String>,
}

impl RecentPastes {
    pub fn new() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            lang: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

impl Default for RecentPastes {
    fn default() -> Self {
        Self::new()
    }
}
