//! QSO record builder.

use hashbrown::HashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::AdifError;
use crate::field::Field;
use crate::schema::{self, QSO_DEFS};

/// One validated contact record.
///
/// Canonical field names mapped to normalized string values; ADIF stores
/// everything as text, so numeric and date semantics live in validation
/// only. Iteration and serialization follow catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QsoRecord {
    data: HashMap<&'static str, String>,
}

impl QsoRecord {
    /// Builds a QSO from raw (name, value) pairs.
    ///
    /// Legacy MODE values `DSTAR` and `C4FM` are moved into SUBMODE with
    /// MODE rewritten to `DIGITALVOICE` before the per-field pipeline runs.
    /// Names without a catalog entry and empty values are skipped; each kept
    /// value is normalized then validated, and the first failure aborts the
    /// build. A finished record must carry QSO_DATE, TIME_ON, CALL, MODE,
    /// and at least one of BAND/FREQ.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, AdifError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut raw: Vec<(String, String)> = fields
            .into_iter()
            .map(|(name, value)| (name.to_ascii_uppercase(), value.to_string()))
            .collect();

        remap_legacy_mode(&mut raw);

        let mut data = HashMap::new();
        for (name, value) in &raw {
            let Some(def) = schema::qso_def(name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let value = def.normalize(value);
            def.validate(&value)?;
            data.insert(def.name(), value);
        }

        let mut missing: Vec<&'static str> = Vec::new();
        for required in ["QSO_DATE", "TIME_ON", "CALL"] {
            if !data.contains_key(required) {
                missing.push(required);
            }
        }
        if !data.contains_key("BAND") && !data.contains_key("FREQ") {
            missing.push("BAND or FREQ");
        }
        if !data.contains_key("MODE") {
            missing.push("MODE");
        }
        if !missing.is_empty() {
            return Err(AdifError::MissingRequired { missing });
        }

        Ok(Self { data })
    }

    /// Value stored under `name`, case-insensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.data.get(name.to_ascii_uppercase().as_str()).map(String::as_str)
    }

    /// Present (name, value) pairs in catalog order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        QSO_DEFS
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

    /// Re-emits the record as ADIF wire text: fields in catalog order,
    /// CRLF-joined, ending with `<EOR>`.
    pub fn stringify(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.data.len() + 1);
        for def in QSO_DEFS {
            if let Some(value) = self.data.get(def.name()) {
                lines.push(Field::tag(def.name(), def.type_indicator(), value));
            }
        }
        lines.push("<EOR>".to_string());
        lines.join("\r\n")
    }
}

impl Serialize for QsoRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.data.len()))?;
        for (name, value) in self.fields() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// DSTAR and C4FM predate their submode classification; the value becomes
/// the SUBMODE and MODE is rewritten to DIGITALVOICE. Last occurrence wins
/// when MODE repeats, matching block-assembly upsert semantics.
fn remap_legacy_mode(raw: &mut Vec<(String, String)>) {
    let legacy = raw
        .iter()
        .rev()
        .find(|(name, _)| name == "MODE")
        .filter(|(_, value)| value == "DSTAR" || value == "C4FM")
        .map(|(_, value)| value.clone());

    if let Some(submode) = legacy {
        for (name, value) in raw.iter_mut() {
            if name == "MODE" {
                *value = "DIGITALVOICE".to_string();
            }
        }
        raw.push(("SUBMODE".to_string(), submode));
    }
}
