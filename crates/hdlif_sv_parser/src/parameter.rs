//! SystemVerilog parameter declarations.

use hdlif_ir::{FragmentError, Generic, GenericKind};
use hdlif_text::find_assignment;
use hdlif_text::words::{
    is_escaped_identifier, is_identifier, leading_word, strip_keyword, trailing_identifier,
    trailing_token,
};

/// Type given to value parameters declared without one.
pub const DEFAULT_PARAMETER_TYPE: &str = "int";

/// Parses `parameter|localparam [type] name = default`.
pub fn parse(fragment: &str) -> Result<Generic, FragmentError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(FragmentError::Empty);
    }

    let (keyword, rest) = leading_word(fragment);
    let local = match keyword.to_ascii_lowercase().as_str() {
        "parameter" => false,
        "localparam" => true,
        _ => return Err(FragmentError::MissingKeyword(fragment.to_string())),
    };

    let eq = find_assignment(rest)
        .ok_or_else(|| FragmentError::MissingDefault(rest.trim().to_string()))?;
    let lhs = rest[..eq].trim();
    let default_value = rest[eq + 1..].trim();
    if default_value.is_empty() {
        return Err(FragmentError::MissingDefault(lhs.to_string()));
    }

    let mut generic = match strip_keyword(lhs, "type") {
        Some(name) => {
            let name = name.trim();
            check_name(name, fragment)?;
            Generic::type_param(name, Some(default_value.to_string()))
        }
        None => {
            let (ty, name) = match trailing_token(lhs) {
                (head, token) if is_escaped_identifier(token) => (head, token),
                _ => trailing_identifier(lhs),
            };
            check_name(name, fragment)?;
            let ty = ty.trim();
            let ty = if ty.is_empty() { DEFAULT_PARAMETER_TYPE } else { ty };
            Generic::value(name, ty, Some(default_value.to_string()))
        }
    };
    generic.local = local;
    Ok(generic)
}

/// Parses a keyword-less `name = default` that continues `previous`'s list.
pub fn parse_continuation(fragment: &str, previous: &Generic) -> Result<Generic, FragmentError> {
    let fragment = fragment.trim();
    let eq = find_assignment(fragment)
        .ok_or_else(|| FragmentError::MissingKeyword(fragment.to_string()))?;
    let name = fragment[..eq].trim();
    let default_value = fragment[eq + 1..].trim();
    check_name(name, fragment)?;
    if default_value.is_empty() {
        return Err(FragmentError::MissingDefault(name.to_string()));
    }
    Ok(Generic {
        name: name.to_string(),
        default_value: Some(default_value.to_string()),
        ..previous.clone()
    })
}

fn check_name(name: &str, fragment: &str) -> Result<(), FragmentError> {
    if name.is_empty() {
        Err(FragmentError::MissingName(fragment.to_string()))
    } else if !is_identifier(name) && !is_escaped_identifier(name) {
        Err(FragmentError::InvalidName(name.to_string()))
    } else {
        Ok(())
    }
}

fn keyword(generic: &Generic) -> &'static str {
    if generic.local {
        "localparam"
    } else {
        "parameter"
    }
}

/// `parameter logic [5:0] p3 = 5` or `parameter type p2 = shortint`.
pub fn print_as_generic(generic: &Generic) -> String {
    let head = match generic.kind {
        GenericKind::Type => format!("{} type {}", keyword(generic), generic.name),
        GenericKind::Value if generic.ty.is_empty() => {
            format!("{} {}", keyword(generic), generic.name)
        }
        GenericKind::Value => format!("{} {} {}", keyword(generic), generic.ty, generic.name),
    };
    match &generic.default_value {
        Some(value) => format!("{head} = {value}"),
        None => head,
    }
}

/// One `.p3 ( p3 )` override per declared name.
pub fn print_as_genmap(generic: &Generic) -> Vec<String> {
    generic
        .names()
        .map(|name| crate::port::connection(name, 0))
        .collect()
}

/// `const logic [5:0] p3 = 5` or `typedef shortint p2`.
pub fn print_as_constant(generic: &Generic) -> String {
    match generic.kind {
        GenericKind::Type => format!(
            "typedef {} {}",
            generic.default_value.as_deref().unwrap_or("<type>"),
            generic.name
        ),
        GenericKind::Value => format!(
            "const {} {} = {}",
            generic.ty,
            generic.name,
            generic.default_value.as_deref().unwrap_or("<value>")
        ),
    }
}
