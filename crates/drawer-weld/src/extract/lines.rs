//! Line splitting
//!
//! Docstrings are split on the same set of line boundaries Python's
//! `str.splitlines` recognizes, not only `\n`. `\r\n` counts as a single
//! boundary.

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split `text` into lines, each keeping its terminator
pub fn split_lines_inclusive(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
            chars.next();
            end += 1;
        }
        lines.push(&text[start..end]);
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Split `text` into lines without their terminators
pub fn split_lines(text: &str) -> Vec<&str> {
    split_lines_inclusive(text)
        .into_iter()
        .map(strip_line_break)
        .collect()
}

fn strip_line_break(line: &str) -> &str {
    if let Some(stripped) = line.strip_suffix("\r\n") {
        return stripped;
    }
    let mut chars = line.chars();
    match chars.next_back() {
        Some(c) if is_line_break(c) => chars.as_str(),
        _ => line,
    }
}
