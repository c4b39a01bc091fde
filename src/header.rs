//! Header record builder.

use hashbrown::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::AdifError;
use crate::field::Field;
use crate::schema::{self, HEADER_DEFS};

/// One validated ADIF header block.
///
/// Holds canonical field names mapped to normalized string values. Iteration
/// and serialization follow catalog order, not insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRecord {
    data: HashMap<&'static str, String>,
}

impl HeaderRecord {
    /// Builds a header from raw (name, value) pairs.
    ///
    /// Names without a catalog entry and empty values are skipped. Each kept
    /// value is normalized then validated; the first failure aborts the whole
    /// build.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, AdifError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut data = HashMap::new();
        for (name, value) in fields {
            let Some(def) = schema::header_def(name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let value = def.normalize(value);
            def.validate(&value)?;
            data.insert(def.name(), value);
        }
        Ok(Self { data })
    }

    /// Value stored under `name`, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name.to_ascii_uppercase().as_str()).map(String::as_str)
    }

    /// Present (name, value) pairs in catalog order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        HEADER_DEFS
            .iter()
            .filter_map(|def| self.data.get(def.name()).map(|v| (def.name(), v.as_str())))
    }

    /// Plain snapshot of the present canonical fields.
    pub fn to_object(&self) -> HashMap<&'static str, String> {
        self.data.clone()
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Re-emits the header as ADIF wire text with the default banner.
    pub fn stringify(&self) -> String {
        self.stringify_with_banner(&default_banner())
    }

    /// Re-emits the header as ADIF wire text.
    ///
    /// The banner is free text ahead of the first tag, ignored by parsers.
    /// Fields appear in catalog order, CRLF-joined, ending with `<EOH>`.
    pub fn stringify_with_banner(&self, banner: &str) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.data.len() + 1);
        for def in HEADER_DEFS {
            if let Some(value) = self.data.get(def.name()) {
                lines.push(Field::tag(def.name(), def.type_indicator(), value));
            }
        }
        lines.push("<EOH>".to_string());
        format!("{banner}\r\n\r\n{}", lines.join("\r\n"))
    }
}

impl Serialize for HeaderRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Default serialization banner naming this library and the current time.
pub fn default_banner() -> String {
    format!(
        "Generated {} by {}/{}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}
