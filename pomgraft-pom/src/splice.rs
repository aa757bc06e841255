//! Low-level text surgery helpers.
//!
//! Mutations never re-serialize the tree; they splice fragments into the
//! original text at offsets taken from `roxmltree` node ranges. Everything
//! outside a splice stays byte-identical.

use std::ops::Range;

/// One pending text edit: replace `at` with `text`. An empty range is a
/// plain insertion.
#[derive(Debug, Clone)]
pub(crate) struct Splice {
    pub at: Range<usize>,
    pub text: String,
}

impl Splice {
    pub fn insert(at: usize, text: String) -> Self {
        Self { at: at..at, text }
    }

    pub fn replace(at: Range<usize>, text: String) -> Self {
        Self { at, text }
    }

    pub fn apply(self, text: &mut String) {
        text.replace_range(self.at, &self.text);
    }
}

/// Leading whitespace of the line containing `offset`, up to `offset`.
pub(crate) fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let seg = &text[line_start..offset];
    let ws_len = seg
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &seg[..ws_len]
}

/// Where trailing whitespace starts in `text[..end]`.
pub(crate) fn trailing_ws_start(text: &str, end: usize) -> usize {
    text[..end].trim_end_matches([' ', '\t', '\r', '\n']).len()
}

/// Prefix every non-empty line of `fragment` with `indent`.
pub(crate) fn indent_fragment(fragment: &str, indent: &str) -> String {
    fragment
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap `fragment` in the element names of `path`, innermost last, indenting
/// one `unit` per level.
pub(crate) fn wrap_in_path(fragment: &str, path: &[&str], unit: &str) -> String {
    let mut out = fragment.to_string();
    for name in path.iter().rev() {
        out = format!("<{name}>\n{}\n</{name}>", indent_fragment(&out, unit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_insert_keeps_surroundings() {
        let mut s = "abcdef".to_string();
        Splice::insert(3, "XY".to_string()).apply(&mut s);
        assert_eq!(s, "abcXYdef");
    }

    #[test]
    fn splice_replace_swaps_range() {
        let mut s = "<a/>".to_string();
        Splice::replace(2..4, ">x</a>".to_string()).apply(&mut s);
        assert_eq!(s, "<a>x</a>");
    }

    #[test]
    fn line_indent_reads_back_to_newline() {
        let text = "<a>\n    <b/>\n</a>";
        let b_start = text.find("<b/>").unwrap();
        assert_eq!(line_indent(text, b_start), "    ");
        assert_eq!(line_indent(text, 0), "");
    }

    #[test]
    fn line_indent_stops_at_non_whitespace() {
        let text = "<a><b/>";
        let b_start = text.find("<b/>").unwrap();
        assert_eq!(line_indent(text, b_start), "");
    }

    #[test]
    fn trailing_ws_start_spans_blank_lines() {
        let text = "<a>\n  \n  ";
        assert_eq!(trailing_ws_start(text, text.len()), 3);
        assert_eq!(trailing_ws_start("<a>", 3), 3);
    }

    #[test]
    fn wrap_in_path_nests_outside_in() {
        let wrapped = wrap_in_path("<x/>", &["build", "plugins"], "  ");
        assert_eq!(
            wrapped,
            "<build>\n  <plugins>\n    <x/>\n  </plugins>\n</build>"
        );
    }
}
