//! ADIF (Amateur Data Interchange Format) tokenizer, validator, and
//! record builder with Maidenhead grid-locator geodesy.
//!
//! # Examples
//!
//! Scanning a log with the collected event stream:
//! ```
//! use adiflog::parser::{self, AdifEvent};
//!
//! let text = "<ADIF_VER:5>3.1.4<EOH>\r\n\
//!             <QSO_DATE:8>20230615<TIME_ON:4>1234<CALL:4>W1AW\
//!             <BAND:3>20m<MODE:2>CW<EOR>";
//! let events = parser::collect(text).expect("valid log");
//! let qsos = events.iter().filter(|e| matches!(e, AdifEvent::Qso(_))).count();
//! assert_eq!(qsos, 1);
//! ```
//!
//! Building and re-emitting a record:
//! ```
//! use adiflog::qso::QsoRecord;
//!
//! let qso = QsoRecord::from_fields([
//!     ("QSO_DATE", "20230615"),
//!     ("TIME_ON", "1234"),
//!     ("call", "w1aw"),
//!     ("BAND", "20M"),
//!     ("MODE", "CW"),
//! ]).expect("valid record");
//! assert_eq!(qso.get("CALL"), Some("W1AW"));
//! assert_eq!(qso.get("BAND"), Some("20m"));
//! assert!(qso.stringify().ends_with("<EOR>"));
//! ```
#![deny(missing_docs)]

/// Error taxonomy shared across the crate.
pub mod error;
/// Tag token and tokenizer.
pub mod field;
/// Maidenhead locator decoding and distance.
pub mod grid;
/// Header record builder.
pub mod header;
/// Streaming block assembler and notification surface.
pub mod parser;
/// QSO record builder.
pub mod qso;
/// Field schema catalog and enumeration tables.
pub mod schema;
/// Primitive ADIF data types.
pub mod types;

pub use error::{AdifError, GridError};
pub use field::Field;
pub use header::HeaderRecord;
pub use qso::QsoRecord;
