//! Account details returned by the `userdetails` API call

use crate::options::Visibility;
use crate::record::value_as_u64;
use serde_json::Value;
use std::collections::BTreeMap;

/// Kind of pastebin account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Normal,
    Pro,
}

/// Details of the authenticated account
///
/// Like [`crate::PasteRecord`], this keeps every field the service sent with
/// the `user_` prefix removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserRecord {
    fields: BTreeMap<String, Value>,
}

impl UserRecord {
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// Default syntax format for new pastes
    pub fn format_short(&self) -> Option<&str> {
        self.text("format_short")
    }

    /// Default expiration code for new pastes
    pub fn expiration(&self) -> Option<&str> {
        self.text("expiration")
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.text("avatar_url")
    }

    /// Default visibility for new pastes
    pub fn private(&self) -> Option<Visibility> {
        self.fields
            .get("private")
            .and_then(value_as_u64)
            .and_then(|flag| Visibility::try_from(flag).ok())
    }

    pub fn website(&self) -> Option<&str> {
        self.text("website")
    }

    pub fn email(&self) -> Option<&str> {
        self.text("email")
    }

    pub fn location(&self) -> Option<&str> {
        self.text("location")
    }

    pub fn account_type(&self) -> Option<AccountType> {
        match self.fields.get("account_type").and_then(value_as_u64)? {
            0 => Some(AccountType::Normal),
            1 => Some(AccountType::Pro),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}
