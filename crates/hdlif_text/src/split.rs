//! Splitting and searching at nesting depth zero.
//!
//! Default expressions and types routinely contain commas and operators inside
//! parentheses, brackets or braces (`syn_lb_seq_item#(W, A)`, `'{1, 2}`), so
//! list separators and assignment operators are only recognised outside any
//! group and outside string literals.

use std::str::CharIndices;

/// Iterator over the characters of a string that sit at depth zero.
///
/// Grouping characters themselves and everything inside string literals are
/// skipped.
pub struct TopLevelChars<'a> {
    chars: CharIndices<'a>,
    depth: usize,
    in_string: bool,
}

impl<'a> TopLevelChars<'a> {
    /// Starts iterating over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            depth: 0,
            in_string: false,
        }
    }
}

impl Iterator for TopLevelChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<(usize, char)> {
        loop {
            let (i, c) = self.chars.next()?;
            if self.in_string {
                if c == '"' {
                    self.in_string = false;
                }
                continue;
            }
            match c {
                '"' => self.in_string = true,
                '(' | '[' | '{' => self.depth += 1,
                ')' | ']' | '}' => self.depth = self.depth.saturating_sub(1),
                _ if self.depth == 0 => return Some((i, c)),
                _ => {}
            }
        }
    }
}

/// Splits `text` on every top-level occurrence of `sep`.
///
/// Pieces are returned untrimmed; an input without separators yields itself.
pub fn split_top_level(text: &str, sep: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for (i, c) in TopLevelChars::new(text) {
        if c == sep {
            pieces.push(&text[start..i]);
            start = i + c.len_utf8();
        }
    }
    pieces.push(&text[start..]);
    pieces
}

/// Byte offset of the first top-level occurrence of `needle`.
pub fn find_top_level(text: &str, needle: &str) -> Option<usize> {
    let first = needle.chars().next()?;
    TopLevelChars::new(text)
        .find(|&(i, c)| c == first && text[i..].starts_with(needle))
        .map(|(i, _)| i)
}

/// Byte offset of the first top-level plain `=`.
///
/// The `=` of the comparison and arrow operators (`==`, `!=`, `<=`, `>=`,
/// `:=`, `=>`) does not count.
pub fn find_assignment(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    TopLevelChars::new(text)
        .find(|&(i, c)| {
            if c != '=' {
                return false;
            }
            let before = if i > 0 { bytes[i - 1] } else { b' ' };
            let after = bytes.get(i + 1).copied().unwrap_or(b' ');
            !matches!(before, b'=' | b'!' | b'<' | b'>' | b':') && !matches!(after, b'=' | b'>')
        })
        .map(|(i, _)| i)
}
