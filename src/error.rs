//! Error taxonomy for tokenization, validation, and record construction.

use thiserror::Error;

/// Failure raised while validating a field or building a record.
///
/// The tokenizer never raises: an incomplete or absent tag is reported as
/// `None` (end of tokens), and the caller decides whether to supply more
/// input. Every variant here is terminal at the point raised — no field is
/// skipped, no default substituted, no partial record produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdifError {
    /// The value failed its primitive data-type predicate.
    #[error("data type check failed: {field}={value:?}")]
    DataType {
        /// Canonical field name.
        field: String,
        /// Offending raw value.
        value: String,
    },

    /// The value failed the field's lexical pattern.
    #[error("field validation check failed: {field}={value:?}")]
    Pattern {
        /// Canonical field name.
        field: String,
        /// Offending raw value.
        value: String,
    },

    /// The value is not a member of the field's enumeration table.
    #[error("field enumeration check failed: {field}={value:?}")]
    Enumeration {
        /// Canonical field name.
        field: String,
        /// Offending raw value.
        value: String,
        /// Every key the enumeration accepts, in table order.
        valid_values: Vec<String>,
    },

    /// The value failed the field's custom predicate.
    #[error("field check failed: {field}={value:?}")]
    Check {
        /// Canonical field name.
        field: String,
        /// Offending raw value.
        value: String,
    },

    /// A QSO block finalized without its required fields.
    #[error("QSO missing one or more required fields: {}", .missing.join(", "))]
    MissingRequired {
        /// Names of the absent required fields.
        missing: Vec<&'static str>,
    },
}

impl AdifError {
    /// Canonical name of the field that failed, when one is attached.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::DataType { field, .. }
            | Self::Pattern { field, .. }
            | Self::Enumeration { field, .. }
            | Self::Check { field, .. } => Some(field),
            Self::MissingRequired { .. } => None,
        }
    }

    /// Raw value that failed, when one is attached.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::DataType { value, .. }
            | Self::Pattern { value, .. }
            | Self::Enumeration { value, .. }
            | Self::Check { value, .. } => Some(value),
            Self::MissingRequired { .. } => None,
        }
    }
}

/// Failure raised while decoding a Maidenhead grid locator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Locators must be exactly 2, 4, or 6 characters.
    #[error("grid locator must be 2, 4, or 6 characters, got {0}")]
    BadLength(usize),

    /// A character fell outside the alphabet for its position.
    #[error("invalid grid locator character {ch:?} at position {index}")]
    BadChar {
        /// Zero-based character position.
        index: usize,
        /// The offending character.
        ch: char,
    },
}
