use std::borrow::Cow;

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::config::Config;

/// One source file's metadata: its identity, ordered header fields and the
/// raw body that followed the separator.
///
/// The body is kept byte for byte; its encoding is the renderer's business.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    basename: String,
    fields: Fields,
    #[serde(serialize_with = "serialize_lossy")]
    body: Vec<u8>,
}

impl Metadata {
    pub(crate) fn new(basename: String, body: impl Into<Vec<u8>>) -> Self {
        Self {
            basename,
            fields: Fields::default(),
            body: body.into(),
        }
    }

    /// Path relative to the content root, extension removed.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The body as text; invalid UTF-8 is replaced with `U+FFFD`.
    pub fn body(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Value for `key`, or `""` when absent.
    pub fn get_string(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.get(key).is_some()
    }

    /// Overwrites in place when `key` exists, appends otherwise.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.set(key.into(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.0.is_empty()
    }

    /// Required keys (template, output) that resolve to an empty string.
    pub fn missing_required<'c>(&self, config: &'c Config) -> Vec<&'c str> {
        config
            .required_keys()
            .into_iter()
            .filter(|key| self.get_string(key).is_empty())
            .collect()
    }

    pub(crate) fn merge_from(&mut self, other: Metadata) {
        for (key, value) in other.fields.0 {
            self.fields.set(key, value);
        }
    }
}

fn serialize_lossy<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Insertion-ordered, unique-key string map. Headers hold a handful of keys,
/// so lookups scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fields(Vec<(String, String)>);

impl Fields {
    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn set(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
