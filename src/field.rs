//! ADIF tag token and tokenizer.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

/// `<NAME>`, `<NAME:len>`, or `<NAME:len:I>` — searched, not anchored, so
/// banner text and comments between tags are skipped over.
static MATCHER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(?P<name>[A-Za-z0-9_]+)(?::(?P<len>[0-9]+))?(?::(?P<ind>[A-Z]))?>")
        .expect("static tag matcher")
});

/// One tokenized tag plus payload, as it appeared on the wire.
///
/// Fields are ephemeral: the assembler merges them into a block and drops
/// them. `bytes_consumed` covers any skipped free text, the tag itself, and
/// the payload, so the caller can advance its buffer by exactly that much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    data_length: Option<usize>,
    type_indicator: Option<char>,
    data: Option<String>,
    bytes_consumed: usize,
}

impl Field {
    /// Extracts the leftmost complete tag from `text`.
    ///
    /// Returns `None` when no tag is present (end of tokens) or when a
    /// declared payload length exceeds the remaining input — the token is
    /// not yet complete and the caller must supply more data. A payload is
    /// never truncated or padded.
    pub fn parse(text: &str) -> Option<Field> {
        let caps = MATCHER.captures(text)?;
        let tag = caps.get(0).expect("whole match");

        let name = caps["name"].to_ascii_uppercase();
        let data_length = match caps.name("len") {
            Some(m) => Some(m.as_str().parse::<usize>().ok()?),
            None => None,
        };
        let type_indicator = caps.name("ind").and_then(|m| m.as_str().chars().next());

        let data = match data_length {
            // Payload is the declared number of bytes immediately after the
            // closing bracket; `get` also rejects a split UTF-8 code point,
            // and a declared length that overflows cannot fit the input.
            Some(len) => {
                let end = tag.end().checked_add(len)?;
                Some(text.get(tag.end()..end)?.to_string())
            }
            None => None,
        };

        let bytes_consumed = tag.end() + data_length.unwrap_or(0);

        Some(Field {
            name,
            data_length,
            type_indicator,
            data,
            bytes_consumed,
        })
    }

    /// One-shot tag serialization with the length derived from `data`.
    pub fn tag(name: &str, indicator: Option<char>, data: &str) -> String {
        let mut out = String::with_capacity(name.len() + data.len() + 8);
        out.push('<');
        out.push_str(&name.to_ascii_uppercase());
        let _ = write!(out, ":{}", data.len());
        if let Some(ind) = indicator {
            out.push(':');
            out.push(ind);
        }
        out.push('>');
        out.push_str(data);
        out
    }

    /// Re-emits this field as wire text.
    pub fn stringify(&self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.name);
        if let Some(len) = self.data_length {
            let _ = write!(out, ":{len}");
        }
        if let Some(ind) = self.type_indicator {
            out.push(':');
            out.push(ind);
        }
        out.push('>');
        if let Some(data) = &self.data {
            out.push_str(data);
        }
        out
    }

    /// Canonical upper-cased field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared payload length, if the tag carried one.
    pub fn data_length(&self) -> Option<usize> {
        self.data_length
    }

    /// Single-letter wire type indicator, if the tag carried one.
    pub fn type_indicator(&self) -> Option<char> {
        self.type_indicator
    }

    /// Payload text; `None` for bare tags such as `<EOR>`.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Bytes of input this token consumed, including skipped free text.
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }
}
