use crate::Source;

/// A human-readable position in a [`Source`].
///
/// Both `line` and `column` are 1-based. `column` counts characters (not
/// bytes) from the start of the line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Resolves a byte offset into a 1-based line/column pair.
///
/// Line breaks are `\r\n`, `\n`, `\r`, U+2028 and U+2029. An offset past the
/// end of the body (or inside a multi-byte character) is clamped to the
/// nearest preceding character boundary.
pub fn get_location(source: &Source, position: usize) -> SourceLocation {
    let body = source.body.as_str();
    let position = floor_char_boundary(body, position);
    let mut line = 1;
    let mut line_start = 0;
    for (index, len) in line_breaks(body) {
        if index >= position {
            break;
        }
        line += 1;
        line_start = index + len;
    }
    // A position between the `\r` and `\n` of a CRLF pair sits on the new
    // line at column 1.
    let line_start = line_start.min(position);
    let column = body[line_start..position].chars().count() + 1;
    SourceLocation { line, column }
}

/// Returns the text of the given 1-based line, without its terminator.
pub(crate) fn line_text(body: &str, line: usize) -> Option<&str> {
    let mut start = 0;
    let mut current = 1;
    for (index, len) in line_breaks(body) {
        if current == line {
            return Some(&body[start..index]);
        }
        current += 1;
        start = index + len;
    }
    (current == line).then(|| &body[start..])
}

/// Iterates over `(byte_index, byte_len)` of each line break in `body`.
fn line_breaks(body: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = body.as_bytes();
    let mut pos = 0;
    std::iter::from_fn(move || {
        while pos < bytes.len() {
            let index = pos;
            match bytes[pos] {
                b'\r' if bytes.get(pos + 1) == Some(&b'\n') => {
                    pos += 2;
                    return Some((index, 2));
                },
                b'\n' | b'\r' => {
                    pos += 1;
                    return Some((index, 1));
                },
                // U+2028 and U+2029 encode as E2 80 A8 / E2 80 A9.
                0xE2 if bytes.get(pos + 1) == Some(&0x80)
                    && matches!(bytes.get(pos + 2), Some(0xA8) | Some(0xA9)) => {
                    pos += 3;
                    return Some((index, 3));
                },
                _ => pos += 1,
            }
        }
        None
    })
}

fn floor_char_boundary(body: &str, position: usize) -> usize {
    let mut position = position.min(body.len());
    while !body.is_char_boundary(position) {
        position -= 1;
    }
    position
}
