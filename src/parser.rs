//! Parsing: byte-line splitting, classification, continuation folding.
//!
//! Parsing is a one-shot batch pass over a fully buffered source and has no
//! error path: a line that fits no structure falls through as a plain line,
//! and a continuation left open at end of input is accepted as-is.

use crate::document::PropertyDocument;
use crate::line::Line;
use crate::scanner;

/// The properties source parser.
pub struct PropertiesParser;

impl PropertiesParser {
    /// Parse raw source bytes into an ordered document.
    ///
    /// The pass folds continuations with a two-state machine: after a line
    /// whose value ends in an unescaped backslash, following physical lines
    /// are appended to that entry as value segments until one of them no
    /// longer ends in an unescaped backslash.
    pub fn parse(input: &[u8]) -> PropertyDocument {
        let mut lines: Vec<Line> = Vec::new();
        let mut open: Option<usize> = None;

        for raw in scanner::split_lines(input) {
            match open {
                Some(idx) => {
                    let continues = scanner::ends_with_unescaped_backslash(&raw);
                    lines[idx].push_segment(&raw);
                    if !continues {
                        open = None;
                    }
                }
                None => {
                    let line = Line::classify(&raw);
                    if line.is_multi_line() {
                        open = Some(lines.len());
                    }
                    lines.push(line);
                }
            }
        }

        PropertyDocument::from_lines(lines)
    }

    /// Convenience wrapper over [`PropertiesParser::parse`] for string input.
    pub fn parse_str(input: &str) -> PropertyDocument {
        Self::parse(input.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_line_join() {
        let doc = PropertiesParser::parse(b"a = foo\\\nbar");
        let map = doc.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("foo bar"));
    }

    #[test]
    fn test_continuation_chain() {
        let doc = PropertiesParser::parse(b"a = x\\\ny\\\nz");
        let map = doc.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("x y z"));
    }

    #[test]
    fn test_continuation_consumes_property_shaped_lines() {
        let doc = PropertiesParser::parse(b"a = x\\\nb = y\nc = z");
        let map = doc.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("x b = y"));
        assert!(!map.contains_key("b"));
        assert_eq!(map.get("c").map(String::as_str), Some("z"));
    }

    #[test]
    fn test_unterminated_continuation_accepted() {
        let doc = PropertiesParser::parse(b"a = x\\");
        let map = doc.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_comment_shaped_continuation_joins_value() {
        let doc = PropertiesParser::parse(b"a = x\\\n# still the value");
        let map = doc.to_map();
        assert_eq!(map.get("a").map(String::as_str), Some("x # still the value"));
        assert_eq!(doc.len(), 1);
    }
}
