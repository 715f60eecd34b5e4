//! The `names : rest [:= default]` shape shared by ports and generics.

use hdlif_ir::FragmentError;
use hdlif_text::words::{is_extended_identifier, is_identifier};
use hdlif_text::{find_top_level, TopLevelChars};

/// A split object declaration.
pub(crate) struct ObjectDecl<'a> {
    pub names: String,
    pub rest: &'a str,
    pub default_value: Option<String>,
}

/// Byte offset of the first top-level `:` that does not start `:=`.
fn find_colon(text: &str) -> Option<usize> {
    TopLevelChars::new(text)
        .find(|&(i, c)| c == ':' && !text[i + 1..].starts_with('='))
        .map(|(i, _)| i)
}

/// A basic or extended identifier.
pub(crate) fn is_name(text: &str) -> bool {
    is_identifier(text) || is_extended_identifier(text)
}

/// Splits `names : rest := default`, normalizing the name list to `a, b`.
pub(crate) fn split_object(fragment: &str) -> Result<ObjectDecl<'_>, FragmentError> {
    let colon = find_colon(fragment).ok_or_else(|| FragmentError::MissingColon(fragment.to_string()))?;
    let names: Vec<&str> = fragment[..colon].split(',').map(str::trim).collect();
    if names.iter().all(|n| n.is_empty()) {
        return Err(FragmentError::MissingName(fragment.to_string()));
    }
    if let Some(bad) = names.iter().find(|n| !is_name(n)) {
        return Err(FragmentError::InvalidName(bad.to_string()));
    }

    let mut rest = fragment[colon + 1..].trim();
    let mut default_value = None;
    if let Some(assign) = find_top_level(rest, ":=") {
        let value = rest[assign + 2..].trim();
        if !value.is_empty() {
            default_value = Some(value.to_string());
        }
        rest = rest[..assign].trim();
    }
    Ok(ObjectDecl {
        names: names.join(", "),
        rest,
        default_value,
    })
}
