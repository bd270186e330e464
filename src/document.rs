//! The ordered document model and the layout writer.
//!
//! A [`PropertyDocument`] owns every [`Line`] of one source, in source order.
//! It is the source of truth for layout: the flat key/value map consumers
//! read is a projection of it, and every map mutation is replayed here before
//! the next render so untouched lines keep their original shape.

use crate::line::Line;
use std::collections::HashMap;

/// Ordered sequence of lines for one properties source.
#[derive(Debug, Clone)]
pub struct PropertyDocument {
    /// The lines of the source, in serialization order.
    lines: Vec<Line>,

    /// Trimmed key to positions of the property lines carrying it.
    /// This enables fast lookup for mutations.
    key_index: HashMap<String, Vec<usize>>,
}

impl PropertyDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            key_index: HashMap::new(),
        }
    }

    /// Create a document from parsed lines
    pub fn from_lines(lines: Vec<Line>) -> Self {
        let mut doc = Self {
            lines,
            key_index: HashMap::new(),
        };
        doc.rebuild_index();
        doc
    }

    /// Rebuild the key index from the current lines
    fn rebuild_index(&mut self) {
        self.key_index.clear();
        for (idx, line) in self.lines.iter().enumerate() {
            if line.is_property() {
                self.key_index.entry(line.key_text()).or_default().push(idx);
            }
        }
    }

    /// Number of lines, including comments and plain lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines, in serialization order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Project the flat key to value map.
    ///
    /// When a key occurs on several property lines, the first occurrence
    /// wins, consistent with the mutation path targeting the first line.
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        for line in &self.lines {
            if line.is_property() {
                map.entry(line.key_text())
                    .or_insert_with(|| line.value_text());
            }
        }
        map
    }

    /// Iterate the property entries in document order.
    pub fn properties(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.lines
            .iter()
            .filter(|line| line.is_property())
            .map(|line| (line.key_text(), line.value_text()))
    }

    /// Update the first line carrying `key`, or append a new property line
    /// at the end of the sequence.
    pub fn update_or_insert(&mut self, key: &str, value: &str) {
        if let Some(locations) = self.key_index.get(key) {
            let idx = locations[0];
            self.lines[idx].set_value(value);
        } else {
            self.lines.push(Line::new_property(key, value));
            self.rebuild_index();
        }
    }

    /// Remove the first line carrying `key`. Returns whether a line was
    /// removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(locations) = self.key_index.get(key) else {
            return false;
        };
        let idx = locations[0];
        self.lines.remove(idx);
        self.rebuild_index();
        true
    }

    /// Render the document back to text.
    ///
    /// Property lines render in canonical `key = value` form, with one
    /// physical line per stored segment for multi-line entries. Comment and
    /// plain lines are reproduced verbatim. A source that ended in a line
    /// feed parsed into a trailing empty plain line, so its render ends in a
    /// trailing blank line the same way.
    pub fn serialize(&self) -> String {
        let mut output = String::new();

        for line in &self.lines {
            if line.is_multi_line() {
                output.push_str(&line.key_text());
                output.push_str(" = ");
                for segment in line.segments() {
                    output.push_str(&String::from_utf8_lossy(segment));
                    output.push('\n');
                }
            } else if line.is_property() {
                output.push_str(&line.key_text());
                output.push_str(" = ");
                output.push_str(&line.value_text());
                output.push('\n');
            } else {
                output.push_str(&String::from_utf8_lossy(line.raw()));
                output.push('\n');
            }
        }

        output
    }
}

impl Default for PropertyDocument {
    fn default() -> Self {
        Self::new()
    }
}
