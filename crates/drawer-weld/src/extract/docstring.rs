//! Docstring normalization
//!
//! Raw docstrings carry the indentation of the Python source they were
//! written in. This strips it the same way Python's `inspect.getdoc` does
//! before the text is parsed.

const TAB_WIDTH: usize = 8;

/// Normalize a raw docstring
///
/// Tabs are expanded, the first line is left-trimmed, the common
/// indentation of the remaining lines is removed, and lines left empty at
/// either end are dropped. Whitespace-only lines past the margin are kept.
pub fn clean_docstring(raw: &str) -> String {
    let expanded = expand_tabs(raw);
    let lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim_start().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            cleaned.push(line.trim_start().to_string());
        } else {
            cleaned.push(line.chars().skip(margin).collect());
        }
    }

    while cleaned.last().is_some_and(|l| l.is_empty()) {
        cleaned.pop();
    }
    let leading = cleaned.iter().take_while(|l| l.is_empty()).count();

    cleaned[leading..].join("\n")
}

fn expand_tabs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut column = 0;

    for c in s.chars() {
        match c {
            '\t' => {
                let pad = TAB_WIDTH - column % TAB_WIDTH;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dedent() {
        let raw = "Adds a line to the path.\n        After this call\n          the point moves.\n\n        ";
        assert_eq!(
            clean_docstring(raw),
            "Adds a line to the path.\nAfter this call\n  the point moves."
        );
    }

    #[test]
    fn test_leading_blank_lines() {
        let raw = "\n    \n    Clears the current path.\n    ";
        assert_eq!(clean_docstring(raw), "Clears the current path.");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(clean_docstring("  Strokes.  "), "Strokes.  ");
    }

    #[test]
    fn test_blank_docstring() {
        assert_eq!(clean_docstring(""), "");
        assert_eq!(clean_docstring("\n\n"), "");
        assert_eq!(clean_docstring("   \n\t\n"), "        ");
    }

    #[test]
    fn test_trailing_whitespace_past_margin_kept() {
        assert_eq!(clean_docstring("A\n    B\n      "), "A\nB\n  ");
    }

    #[test]
    fn test_tabs_expanded() {
        assert_eq!(
            clean_docstring("Fill.\n\tThe path\n\t\tcloses."),
            "Fill.\nThe path\n        closes."
        );
    }
}
