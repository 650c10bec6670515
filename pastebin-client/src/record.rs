//! Paste records as reported by the service

use crate::options::Visibility;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Name of the field that identifies a paste
pub const KEY_FIELD: &str = "key";

/// A paste as reported by pastebin
///
/// The record keeps every field the service sent, in an ordered map, and
/// never validates them. The `key` field always exists: when the response did
/// not carry one it is stored as `null` and [`PasteRecord::key`] returns
/// `None`.
///
/// Well-known fields have named accessors. The XML API and the scraping API
/// name a few of them differently (`expire_date`/`expire`,
/// `format_short`/`syntax`, `url`/`full_url`); accessors look at both.
/// Anything else is reachable through [`PasteRecord::get`].
///
/// # Example
///
/// ```
/// use pastebin_client::PasteRecord;
/// use serde_json::json;
///
/// let record: PasteRecord = serde_json::from_value(json!({
///     "key": "0b42rwhf",
///     "title": "javascript test",
///     "hits": "15",
/// }))
/// .unwrap();
///
/// assert_eq!(record.key(), Some("0b42rwhf"));
/// assert_eq!(record.title(), Some("javascript test"));
/// assert_eq!(record.hits(), Some(15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasteRecord {
    fields: BTreeMap<String, Value>,
}

impl PasteRecord {
    /// Build a record from field name/value pairs
    ///
    /// Later duplicates of a name replace earlier ones.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut fields: BTreeMap<String, Value> =
            fields.into_iter().map(|(k, v)| (k.into(), v)).collect();
        fields.entry(KEY_FIELD.to_string()).or_insert(Value::Null);
        Self { fields }
    }

    /// The paste key, `None` if the service did not report one
    pub fn key(&self) -> Option<&str> {
        self.text(KEY_FIELD)
    }

    /// Creation time as unix seconds
    pub fn date(&self) -> Option<u64> {
        self.number("date")
    }

    /// Title, `None` for untitled pastes
    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    /// Size of the paste in bytes
    pub fn size(&self) -> Option<u64> {
        self.number("size")
    }

    /// Expiry as unix seconds, `Some(0)` for pastes that never expire
    pub fn expire_date(&self) -> Option<u64> {
        self.number("expire_date").or_else(|| self.number("expire"))
    }

    /// Visibility flag, `None` when absent or not a known value
    pub fn private(&self) -> Option<Visibility> {
        self.number("private")
            .and_then(|flag| Visibility::try_from(flag).ok())
    }

    /// Syntax highlighting id such as `"rust"`
    pub fn format_short(&self) -> Option<&str> {
        self.text("format_short").or_else(|| self.text("syntax"))
    }

    /// Human readable syntax name such as `"Rust"`
    pub fn format_long(&self) -> Option<&str> {
        self.text("format_long")
    }

    /// Public URL of the paste
    pub fn url(&self) -> Option<&str> {
        self.text("url").or_else(|| self.text("full_url"))
    }

    /// View count
    pub fn hits(&self) -> Option<u64> {
        self.number("hits")
    }

    /// Look up any field by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Iterate over all fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields, including `key`
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: a record carries at least its `key` field
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Consume the record, returning its fields
    pub fn into_fields(self) -> BTreeMap<String, Value> {
        self.fields
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    fn number(&self, name: &str) -> Option<u64> {
        self.fields.get(name).and_then(value_as_u64)
    }
}

/// Read a number that may arrive either as a JSON number or as a string
pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Default for PasteRecord {
    fn default() -> Self {
        Self::from_fields(std::iter::empty::<(String, Value)>())
    }
}

impl From<Map<String, Value>> for PasteRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_fields(map)
    }
}

impl From<BTreeMap<String, Value>> for PasteRecord {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self::from_fields(map)
    }
}

impl Serialize for PasteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PasteRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, Value>::deserialize(deserializer).map(Self::from_fields)
    }
}
