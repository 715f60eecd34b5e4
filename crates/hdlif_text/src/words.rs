//! Keyword and identifier scanning shared by both dialect parsers.

/// Returns `true` for characters that may appear inside an identifier.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Returns `true` if `text` is a plain identifier.
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => chars.all(is_ident_char),
        _ => false,
    }
}

/// Returns `true` if `text` is a SystemVerilog escaped identifier such as
/// `\bus.data[0]`: a backslash followed by printable characters up to, but
/// not including, the terminating whitespace.
pub fn is_escaped_identifier(text: &str) -> bool {
    match text.strip_prefix('\\') {
        Some(body) => !body.is_empty() && !body.contains(char::is_whitespace),
        None => false,
    }
}

/// Returns `true` if `text` is a VHDL extended identifier such as
/// `\data.in\`. A backslash inside is written twice.
pub fn is_extended_identifier(text: &str) -> bool {
    match text.strip_prefix('\\').and_then(|t| t.strip_suffix('\\')) {
        Some(body) => !body.is_empty() && !body.contains(['\n', '\r']),
        None => false,
    }
}

/// Byte offsets of every whole-word, case-insensitive occurrence of `word`.
pub fn keyword_positions<'a>(text: &'a str, word: &'a str) -> impl Iterator<Item = usize> + 'a {
    let lower = text.to_ascii_lowercase();
    let word = word.to_ascii_lowercase();
    let hits: Vec<usize> = lower
        .match_indices(word.as_str())
        .map(|(i, _)| i)
        .filter(|&i| {
            let before = text[..i].chars().next_back();
            let after = text[i + word.len()..].chars().next();
            !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
        })
        .collect();
    hits.into_iter()
}

/// Byte offset of the first whole-word, case-insensitive occurrence of `word`.
pub fn find_keyword(text: &str, word: &str) -> Option<usize> {
    keyword_positions(text, word).next()
}

/// Splits off the leading identifier of `text` (after leading whitespace).
///
/// Returns the word and the remainder directly after it.
pub fn leading_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(text.len(), |(i, _)| i);
    (&text[..end], &text[end..])
}

/// Strips `keyword` (case-insensitive) from the start of `text` if it is a
/// whole word there.
pub fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let (word, rest) = leading_word(text);
    if word.eq_ignore_ascii_case(keyword) {
        Some(rest)
    } else {
        None
    }
}

/// Splits the trailing identifier off `text` (after trailing whitespace).
///
/// Returns the text before the identifier and the identifier; the identifier
/// is empty when `text` does not end in one.
pub fn trailing_identifier(text: &str) -> (&str, &str) {
    let text = text.trim_end();
    let start = text
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    (&text[..start], &text[start..])
}

/// Splits the last whitespace-delimited token off `text`.
///
/// Returns the text before the token and the token; both are empty for blank
/// input.
pub fn trailing_token(text: &str) -> (&str, &str) {
    let text = text.trim_end();
    let start = text
        .char_indices()
        .rev()
        .find(|&(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    (&text[..start], &text[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers() {
        assert!(is_identifier("debug_o"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a b"));
    }

    #[test]
    fn escaped_identifiers() {
        assert!(is_escaped_identifier(r"\data.in"));
        assert!(is_escaped_identifier(r"\a,b[0]"));
        assert!(!is_escaped_identifier(r"\"));
        assert!(!is_escaped_identifier(r"\a b"));
        assert!(!is_escaped_identifier("data"));
    }

    #[test]
    fn extended_identifiers() {
        assert!(is_extended_identifier(r"\data.in\"));
        assert!(is_extended_identifier(r"\a b\"));
        assert!(!is_extended_identifier(r"\\"));
        assert!(!is_extended_identifier(r"\data.in"));
        assert!(!is_extended_identifier("data"));
    }

    #[test]
    fn trailing_token_split() {
        assert_eq!(trailing_token("logic \\data.in  "), ("logic ", "\\data.in"));
        assert_eq!(trailing_token("x"), ("", "x"));
        assert_eq!(trailing_token("   "), ("", ""));
    }

    #[test]
    fn keyword_whole_word_only() {
        assert_eq!(find_keyword("endmodule", "module"), None);
        assert_eq!(find_keyword("module_x module m", "module"), Some(9));
        assert_eq!(find_keyword("ENTITY e IS", "entity"), Some(0));
        assert_eq!(keyword_positions("end x; end;", "end").collect::<Vec<_>>(), vec![0, 7]);
    }

    #[test]
    fn leading_word_split() {
        assert_eq!(leading_word("  input logic a"), ("input", " logic a"));
        assert_eq!(leading_word("input[3:0] a"), ("input", "[3:0] a"));
        assert_eq!(leading_word("[3:0]"), ("", "[3:0]"));
    }

    #[test]
    fn strip_keyword_cases() {
        assert_eq!(strip_keyword("Signal a : bit", "signal"), Some(" a : bit"));
        assert_eq!(strip_keyword("signals : bit", "signal"), None);
    }

    #[test]
    fn trailing_identifier_split() {
        assert_eq!(trailing_identifier("int [7:0] y "), ("int [7:0] ", "y"));
        assert_eq!(trailing_identifier("reg[hi:lo]y"), ("reg[hi:lo]", "y"));
        assert_eq!(trailing_identifier("a"), ("", "a"));
        assert_eq!(trailing_identifier("logic [7:0]"), ("logic [7:0]", ""));
    }
}
