//! Line-comment stripping and whitespace collapsing.
//!
//! Both passes run before any header segmentation: comments first, since
//! collapsing newlines would otherwise merge a comment into the following code.

use hdlif_common::Dialect;

/// Removes every line comment from `text`.
///
/// Everything from the first comment marker (`//` or `--`) lying outside a
/// double-quoted string literal up to the end of the line is dropped; the line
/// terminator is kept, and a comment running to the end of input is replaced
/// by one, so line counts stay stable and comment-only lines become empty.
pub fn strip_comments(text: &str, dialect: Dialect) -> String {
    let marker = dialect.line_comment().as_bytes();
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut keep_from = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];
        if b == b'\n' {
            in_string = false;
            pos += 1;
            continue;
        }
        if in_string {
            match b {
                b'\\' if dialect == Dialect::SystemVerilog && bytes.get(pos + 1) != Some(&b'\n') => {
                    pos += 2
                }
                b'"' => {
                    in_string = false;
                    pos += 1;
                }
                _ => pos += 1,
            }
            continue;
        }
        if b == b'"' {
            in_string = true;
            pos += 1;
            continue;
        }
        if bytes[pos..].starts_with(marker) {
            out.push_str(&text[keep_from..pos]);
            match text[pos..].find('\n') {
                Some(offset) => {
                    pos += offset;
                    keep_from = pos;
                }
                None => {
                    out.push('\n');
                    pos = bytes.len();
                    keep_from = pos;
                }
            }
            continue;
        }
        pos += 1;
    }
    out.push_str(&text[keep_from..]);
    out
}

/// Collapses every run of whitespace (spaces, tabs, newlines) into one space.
pub fn strip_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Returns `true` if the line holds nothing but a comment.
pub fn is_comment_line(line: &str, dialect: Dialect) -> bool {
    line.trim_start().starts_with(dialect.line_comment())
}
