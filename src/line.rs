//! The per-line model of a properties source.
//!
//! [`Line`] is the unit the document is made of: one comment, one property
//! (possibly spanning several physical lines via trailing-backslash
//! continuations), or one plain line reproduced verbatim on write.

use crate::scanner::{self, BACKSLASH, BANG, EQUALS, HASH, SPACE};

/// One logical line of a properties source.
///
/// A line is a comment, a property, or neither (a plain line). Plain lines
/// and comments carry their raw bytes in both `key` and `value` so the
/// layout writer can re-emit them untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    is_property: bool,
    is_comment: bool,
    is_multi_line: bool,

    /// Raw key bytes for properties; the whole raw line otherwise.
    key: Vec<u8>,

    /// Joined value bytes, continuation backslashes already replaced by a
    /// single space.
    value: Vec<u8>,

    /// One entry per physical line contributing to the value, kept for
    /// layout-faithful re-serialization of multi-line properties.
    value_segments: Vec<Vec<u8>>,
}

impl Line {
    /// Classify one physical line.
    ///
    /// Property-hood and the key/value split are decided by a single
    /// escape-aware scan: the first `=` whose preceding byte is not a
    /// backslash splits key from value, and the separator itself belongs to
    /// neither side. A line with no unescaped `=` is a plain line.
    pub fn classify(raw: &[u8]) -> Self {
        if raw.first().is_some_and(|&b| b == HASH || b == BANG) {
            return Self::verbatim(raw, true);
        }
        if raw.is_empty() {
            return Self::verbatim(raw, false);
        }

        let mut key: Vec<u8> = Vec::new();
        let mut value: Vec<u8> = Vec::new();
        let mut in_key = true;
        let mut prev = 0u8;

        for &byte in raw {
            if in_key && byte == EQUALS && prev != BACKSLASH {
                in_key = false;
            } else if in_key {
                key.push(byte);
            } else {
                value.push(byte);
            }
            prev = byte;
        }

        if in_key {
            return Self::verbatim(raw, false);
        }

        if scanner::ends_with_unescaped_backslash(&value) {
            // First segment: trimmed value with the continuation backslash
            // replaced by a single space.
            let first = replace_continuation(value.trim_ascii());
            return Self {
                is_property: true,
                is_comment: false,
                is_multi_line: true,
                key,
                value: first.clone(),
                value_segments: vec![first],
            };
        }

        Self {
            is_property: true,
            is_comment: false,
            is_multi_line: false,
            key,
            value: value.clone(),
            value_segments: vec![value],
        }
    }

    /// Build a property entry directly, as the append path does for keys
    /// that were never part of the parsed source.
    pub fn new_property(key: &str, value: &str) -> Self {
        Self {
            is_property: true,
            is_comment: false,
            is_multi_line: false,
            key: key.as_bytes().to_vec(),
            value: value.as_bytes().to_vec(),
            value_segments: vec![value.as_bytes().to_vec()],
        }
    }

    fn verbatim(raw: &[u8], is_comment: bool) -> Self {
        Self {
            is_property: false,
            is_comment,
            is_multi_line: false,
            key: raw.to_vec(),
            value: raw.to_vec(),
            value_segments: Vec::new(),
        }
    }

    /// Replace the value in place.
    ///
    /// The segment list collapses to the single new value, so a previously
    /// multi-line entry renders as one physical line afterwards.
    pub fn set_value(&mut self, new_value: &str) {
        self.value = new_value.as_bytes().to_vec();
        self.value_segments = vec![self.value.clone()];
    }

    /// Append one continuation line to an open multi-line entry.
    pub(crate) fn push_segment(&mut self, raw: &[u8]) {
        let segment = replace_continuation(raw);
        self.value.extend_from_slice(&segment);
        self.value_segments.push(segment);
    }

    pub fn is_property(&self) -> bool {
        self.is_property
    }

    pub fn is_comment(&self) -> bool {
        self.is_comment
    }

    pub fn is_multi_line(&self) -> bool {
        self.is_multi_line
    }

    /// Key text, trimmed of surrounding whitespace.
    pub fn key_text(&self) -> String {
        String::from_utf8_lossy(self.key.trim_ascii()).into_owned()
    }

    /// Joined value text, trimmed of surrounding whitespace.
    pub fn value_text(&self) -> String {
        String::from_utf8_lossy(self.value.trim_ascii()).into_owned()
    }

    /// The physical value lines, one per segment.
    pub fn segments(&self) -> &[Vec<u8>] {
        &self.value_segments
    }

    /// Raw bytes of a comment or plain line.
    pub(crate) fn raw(&self) -> &[u8] {
        &self.key
    }
}

/// Copy `bytes`, replacing a trailing unescaped backslash with a space.
fn replace_continuation(bytes: &[u8]) -> Vec<u8> {
    let mut out = bytes.to_vec();
    if scanner::ends_with_unescaped_backslash(&out) {
        if let Some(last) = out.last_mut() {
            *last = SPACE;
        }
    }
    out
}
