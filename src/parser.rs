//! Streaming block assembler: tokenize, accumulate, finalize, notify.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::AdifError;
use crate::field::Field;
use crate::header::HeaderRecord;
use crate::qso::QsoRecord;

/// Observer of a single parse pass.
///
/// Notifications arrive synchronously, in source order: every field of a
/// block is announced before the block itself, a header before any record
/// that follows it, and `done` exactly once when the scan runs off the end
/// of input cleanly. Default methods ignore everything, so implementors
/// override only the channels they care about.
pub trait AdifSink {
    /// One tokenized field, announced before its block is finalized.
    fn field(&mut self, name: &str, value: &str) {
        let _ = (name, value);
    }

    /// A finalized header block.
    fn header(&mut self, record: HeaderRecord) {
        let _ = record;
    }

    /// A finalized contact record.
    fn qso(&mut self, record: QsoRecord) {
        let _ = record;
    }

    /// End of input, reached without a validation failure.
    fn done(&mut self) {}
}

/// Tagged parse notification, for callers that prefer a collected event
/// stream over implementing [`AdifSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AdifEvent {
    /// One tokenized field.
    Field {
        /// Canonical upper-cased field name.
        name: String,
        /// Raw payload text, empty for bare tags.
        value: String,
    },
    /// A finalized header block.
    Header(HeaderRecord),
    /// A finalized contact record.
    Qso(QsoRecord),
    /// Clean end of input.
    Done,
}

/// Scans one fully materialized ADIF text, pushing notifications into
/// `sink`.
///
/// Free text between tags is skipped. `<EOH>` finalizes the accumulated
/// block into a [`HeaderRecord`], `<EOR>` into a [`QsoRecord`]; any other
/// field upserts into the current block, last occurrence of a name winning.
/// A validation failure during finalization propagates immediately —
/// blocks published before it remain observed, the rest of the input is
/// not scanned, and no `done` notification fires. Trailing fields never
/// closed by a terminator are discarded.
pub fn parse(text: &str, sink: &mut dyn AdifSink) -> Result<(), AdifError> {
    let mut remaining = text;
    let mut block: Vec<(String, String)> = Vec::new();

    while let Some(field) = Field::parse(remaining) {
        remaining = &remaining[field.bytes_consumed()..];

        let value = field.data().unwrap_or("");
        trace!(name = field.name(), value, "field");
        sink.field(field.name(), value);

        match field.name() {
            "EOH" => {
                let record = HeaderRecord::from_fields(entries(&block))?;
                debug!(fields = record.len(), "header block finalized");
                block.clear();
                sink.header(record);
            }
            "EOR" => {
                let record = QsoRecord::from_fields(entries(&block))?;
                debug!(call = record.get("CALL"), "qso block finalized");
                block.clear();
                sink.qso(record);
            }
            _ => upsert(&mut block, field.name(), value),
        }
    }

    sink.done();
    Ok(())
}

/// Convenience wrapper over [`parse`] that collects every notification
/// into a vector of [`AdifEvent`]s.
pub fn collect(text: &str) -> Result<Vec<AdifEvent>, AdifError> {
    struct Collector(Vec<AdifEvent>);

    impl AdifSink for Collector {
        fn field(&mut self, name: &str, value: &str) {
            self.0.push(AdifEvent::Field {
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        fn header(&mut self, record: HeaderRecord) {
            self.0.push(AdifEvent::Header(record));
        }

        fn qso(&mut self, record: QsoRecord) {
            self.0.push(AdifEvent::Qso(record));
        }

        fn done(&mut self) {
            self.0.push(AdifEvent::Done);
        }
    }

    let mut collector = Collector(Vec::new());
    parse(text, &mut collector)?;
    Ok(collector.0)
}

fn upsert(block: &mut Vec<(String, String)>, name: &str, value: &str) {
    match block.iter_mut().find(|(n, _)| n == name) {
        Some((_, v)) => *v = value.to_string(),
        None => block.push((name.to_string(), value.to_string())),
    }
}

fn entries(block: &[(String, String)]) -> impl Iterator<Item = (&str, &str)> {
    block.iter().map(|(n, v)| (n.as_str(), v.as_str()))
}
