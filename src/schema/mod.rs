//! Declarative per-field schema catalog and its normalize→validate pipeline.

/// Field descriptor tables for header and QSO records.
pub mod defs;
/// Static enumeration tables.
pub mod enums;

use std::sync::LazyLock;

use hashbrown::HashMap;
use regex::Regex;

use crate::error::AdifError;
use crate::schema::enums::Enumeration;
use crate::types::DataType;

pub use defs::{HEADER_DEFS, QSO_DEFS};

/// Immutable schema entry for one canonical ADIF field.
///
/// The whole catalog is one flat table of these; per-field behavior lives in
/// plain function pointers, not a type per field. Constructed once as
/// process-wide constants and never mutated.
pub struct FieldDef {
    name: &'static str,
    data_type: DataType,
    indicator: Option<char>,
    enumeration: Option<&'static LazyLock<Enumeration>>,
    pattern: Option<&'static LazyLock<Regex>>,
    check: Option<fn(&str) -> bool>,
    normalizer: Option<fn(&str) -> String>,
}

impl FieldDef {
    const fn new(name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            data_type,
            indicator: None,
            enumeration: None,
            pattern: None,
            check: None,
            normalizer: None,
        }
    }

    const fn indicator(mut self, indicator: char) -> Self {
        self.indicator = Some(indicator);
        self
    }

    const fn member_of(mut self, table: &'static LazyLock<Enumeration>) -> Self {
        self.enumeration = Some(table);
        self
    }

    const fn pattern(mut self, pattern: &'static LazyLock<Regex>) -> Self {
        self.pattern = Some(pattern);
        self
    }

    const fn check(mut self, check: fn(&str) -> bool) -> Self {
        self.check = Some(check);
        self
    }

    const fn normalize_with(mut self, normalizer: fn(&str) -> String) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Canonical upper-case field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Primitive type this field's values must satisfy.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Wire type indicator used when re-serializing, if any.
    pub fn type_indicator(&self) -> Option<char> {
        self.indicator
    }

    /// Enumeration table this field's values must belong to, if any.
    pub fn enumeration(&self) -> Option<&'static Enumeration> {
        self.enumeration.map(|table| &**table)
    }

    /// True when the descriptor declares a normalizer.
    pub fn has_normalizer(&self) -> bool {
        self.normalizer.is_some()
    }

    /// Applies the field's normalizer, if any. Idempotent:
    /// `normalize(normalize(v)) == normalize(v)`.
    pub fn normalize(&self, value: &str) -> String {
        match self.normalizer {
            Some(normalizer) => normalizer(value),
            None => value.to_string(),
        }
    }

    /// Validates `value`, stopping at the first failed check.
    ///
    /// Checks run in fixed order: primitive type, pattern, enumeration
    /// membership, custom predicate.
    pub fn validate(&self, value: &str) -> Result<(), AdifError> {
        if !self.data_type.check(value) {
            return Err(AdifError::DataType {
                field: self.name.to_string(),
                value: value.to_string(),
            });
        }

        if let Some(pattern) = self.pattern
            && !pattern.is_match(value)
        {
            return Err(AdifError::Pattern {
                field: self.name.to_string(),
                value: value.to_string(),
            });
        }

        if let Some(table) = self.enumeration
            && !table.contains(value)
        {
            return Err(AdifError::Enumeration {
                field: self.name.to_string(),
                value: value.to_string(),
                valid_values: table.keys().map(str::to_string).collect(),
            });
        }

        if let Some(check) = self.check
            && !check(value)
        {
            return Err(AdifError::Check {
                field: self.name.to_string(),
                value: value.to_string(),
            });
        }

        Ok(())
    }
}

static HEADER_INDEX: LazyLock<HashMap<&'static str, &'static FieldDef>> =
    LazyLock::new(|| HEADER_DEFS.iter().map(|def| (def.name, def)).collect());

static QSO_INDEX: LazyLock<HashMap<&'static str, &'static FieldDef>> =
    LazyLock::new(|| QSO_DEFS.iter().map(|def| (def.name, def)).collect());

/// Case-insensitive header-catalog lookup.
pub fn header_def(name: &str) -> Option<&'static FieldDef> {
    HEADER_INDEX
        .get(name.to_ascii_uppercase().as_str())
        .copied()
}

/// Case-insensitive QSO-catalog lookup.
pub fn qso_def(name: &str) -> Option<&'static FieldDef> {
    QSO_INDEX.get(name.to_ascii_uppercase().as_str()).copied()
}
