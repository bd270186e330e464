//! Byte-level line splitting for the properties source format.

/// Key/value separator byte.
pub(crate) const EQUALS: u8 = b'=';

/// Escape prefix for `=` and for a literal trailing backslash.
pub(crate) const BACKSLASH: u8 = b'\\';

/// Comment markers.
pub(crate) const HASH: u8 = b'#';
pub(crate) const BANG: u8 = b'!';

/// Replacement byte for a continuation backslash in joined values.
pub(crate) const SPACE: u8 = b' ';

/// Line terminator bytes.
pub(crate) const LINE_FEED: u8 = b'\n';
pub(crate) const CARRIAGE_RETURN: u8 = b'\r';

/// Split raw source bytes into physical lines.
///
/// Only a line feed terminates a line; carriage returns are dropped from
/// content without forcing a line break. Completed interior lines are kept
/// only when non-empty, and the trailing partial buffer is always flushed as
/// a final line, even when empty. An empty input therefore yields a single
/// empty line.
pub(crate) fn split_lines(bytes: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut current = Vec::new();

    for &byte in bytes {
        match byte {
            LINE_FEED => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
            CARRIAGE_RETURN => {}
            _ => current.push(byte),
        }
    }

    lines.push(current);
    lines
}

/// Whether the final byte of `line` is an unescaped backslash.
///
/// The check is a single-byte lookback: a backslash whose preceding byte is
/// itself a backslash is an escaped literal, not a continuation marker.
pub(crate) fn ends_with_unescaped_backslash(line: &[u8]) -> bool {
    match line {
        [.., prev, BACKSLASH] => *prev != BACKSLASH,
        [BACKSLASH] => true,
        _ => false,
    }
}
