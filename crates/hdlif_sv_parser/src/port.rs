//! SystemVerilog port declarations.
//!
//! A fragment has the shape
//! `[direction] [type [packed]] name [unpacked...] [= default]`.

use hdlif_common::Dialect;
use hdlif_ir::{FragmentError, Mode, Port};
use hdlif_text::find_assignment;
use hdlif_text::words::{
    is_escaped_identifier, is_identifier, leading_word, trailing_identifier, trailing_token,
};

/// A port declaration as written, before defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvPortDecl {
    /// Direction keyword, if present.
    pub mode: Option<Mode>,
    /// Type with packed dimensions, if present.
    pub ty: Option<String>,
    /// Declared identifier.
    pub name: String,
    /// Unpacked dimensions after the name.
    pub unpacked_dims: String,
    /// Value after `=`.
    pub default_value: Option<String>,
}

impl SvPortDecl {
    /// Applies the default direction (`inout`) and `default_type`.
    pub fn into_port(self, default_type: &str) -> Port {
        Port {
            name: self.name,
            mode: Some(self.mode.unwrap_or(Mode::Inout)),
            ty: self.ty.unwrap_or_else(|| default_type.to_string()),
            unpacked_dims: self.unpacked_dims,
            default_value: self.default_value,
        }
    }
}

/// Parses one port fragment into its raw parts.
///
/// Only a blank fragment, or one that is nothing but a default, fails. Text
/// without a recognisable type and name split is taken whole as the name.
pub fn parse_decl(fragment: &str) -> Result<SvPortDecl, FragmentError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(FragmentError::Empty);
    }

    let (decl, default_value) = match find_assignment(fragment) {
        Some(eq) => {
            let value = fragment[eq + 1..].trim();
            (
                fragment[..eq].trim_end(),
                (!value.is_empty()).then(|| value.to_string()),
            )
        }
        None => (fragment, None),
    };

    let (word, after) = leading_word(decl);
    let (mode, rest) = match Mode::from_keyword(Dialect::SystemVerilog, word) {
        Some(mode) if after.starts_with([' ', '[']) && !after.trim().is_empty() => {
            (Some(mode), after)
        }
        _ => (None, decl),
    };

    let (rest, unpacked_dims) = split_unpacked(rest);
    let (head, name) = split_name(rest);
    if name.is_empty() {
        return Err(FragmentError::MissingName(fragment.to_string()));
    }
    let ty = head.trim();

    Ok(SvPortDecl {
        mode,
        ty: (!ty.is_empty()).then(|| ty.to_string()),
        name: name.to_string(),
        unpacked_dims,
        default_value,
    })
}

/// Parses one port fragment, filling in `inout` and `default_type`.
pub fn parse(fragment: &str, default_type: &str) -> Result<Port, FragmentError> {
    parse_decl(fragment).map(|decl| decl.into_port(default_type))
}

/// Returns `true` if `name` can be written back as declared.
pub fn is_plain_name(name: &str) -> bool {
    is_identifier(name) || is_escaped_identifier(name)
}

/// Splits the declared name off the end of `text`.
///
/// The name is the last whitespace-delimited token, except that a packed
/// range may touch it (`reg[3:0]y`).
fn split_name(text: &str) -> (&str, &str) {
    let text = text.trim_end();
    let (head, token) = trailing_token(text);
    if is_escaped_identifier(token) {
        return (head, token);
    }
    let (glued, ident) = trailing_identifier(token);
    if !ident.is_empty() && glued.ends_with(']') {
        return text.split_at(text.len() - ident.len());
    }
    (head, token)
}

/// Splits trailing bracket groups off `text` when a name precedes them.
///
/// An escaped identifier swallows everything up to whitespace, brackets
/// included.
fn split_unpacked(text: &str) -> (&str, String) {
    let text = text.trim_end();
    if is_escaped_identifier(trailing_token(text).1) {
        return (text, String::new());
    }
    let mut rest = text;
    let mut groups = Vec::new();
    while rest.ends_with(']') {
        let Some(open) = matching_open_bracket(rest) else {
            break;
        };
        groups.push(&rest[open..]);
        rest = rest[..open].trim_end();
    }
    if groups.is_empty() || !is_plain_name(split_name(rest).1) {
        return (text, String::new());
    }
    groups.reverse();
    (rest, groups.concat())
}

/// Byte offset of the `[` matching the `]` that ends `text`.
fn matching_open_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices().rev() {
        match c {
            ']' => depth += 1,
            '[' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn join_words(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn with_default(mut text: String, default_value: Option<&str>) -> String {
    if let Some(value) = default_value {
        text.truncate(text.trim_end().len());
        text.push_str(" = ");
        text.push_str(value);
    }
    text
}

/// The names with their unpacked dimensions.
///
/// An escaped name keeps the space that ends it, so punctuation written
/// after it stays outside the identifier.
pub fn declarator(port: &Port) -> String {
    let mut text = port
        .names()
        .map(|name| {
            if is_escaped_identifier(name) {
                format!("{name} ")
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    text.push_str(&port.unpacked_dims);
    text
}

/// `input int [7:0] y[hi:lo]`
pub fn print_as_port(port: &Port) -> String {
    let name = declarator(port);
    let decl = join_words(&[port.mode_keyword(Dialect::SystemVerilog), &port.ty, &name]);
    with_default(decl, port.default_value.as_deref())
}

/// `int [7:0] y[hi:lo]`
pub fn print_as_signal(port: &Port) -> String {
    let name = declarator(port);
    with_default(join_words(&[&port.ty, &name]), port.default_value.as_deref())
}

/// One `.y ( y )` connection per declared name.
pub fn print_as_portmap(port: &Port) -> Vec<String> {
    port.names().map(|name| connection(name, 0)).collect()
}

/// A named connection `.name ( name )` with both names padded to `width`.
pub fn connection(name: &str, width: usize) -> String {
    format!(".{name:<width$} ( {name:<width$} )")
}
