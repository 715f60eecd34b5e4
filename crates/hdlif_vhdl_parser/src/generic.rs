//! VHDL generic declarations: `[constant] a, b : type [:= default]` or
//! `type t`.

use crate::decl::{is_name, split_object};
use hdlif_ir::{FragmentError, Generic, GenericKind};
use hdlif_text::words::strip_keyword;

/// Parses one generic fragment.
pub fn parse(fragment: &str) -> Result<Generic, FragmentError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(FragmentError::Empty);
    }

    if let Some(name) = strip_keyword(fragment, "type") {
        let name = name.trim();
        if name.is_empty() {
            return Err(FragmentError::MissingName(fragment.to_string()));
        }
        if !is_name(name) {
            return Err(FragmentError::InvalidName(name.to_string()));
        }
        return Ok(Generic::type_param(name, None));
    }

    let fragment = strip_keyword(fragment, "constant").map_or(fragment, str::trim);
    let decl = split_object(fragment)?;
    if decl.rest.is_empty() {
        return Err(FragmentError::MissingType(fragment.to_string()));
    }
    Ok(Generic::value(decl.names, decl.rest, decl.default_value))
}

/// `a : integer := 5` or `type t`.
pub fn print_as_generic(generic: &Generic) -> String {
    match generic.kind {
        GenericKind::Type => format!("type {}", generic.name),
        GenericKind::Value => match &generic.default_value {
            Some(value) => format!("{} : {} := {value}", generic.name, generic.ty),
            None => format!("{} : {}", generic.name, generic.ty),
        },
    }
}

/// One `a => a` association per declared name.
pub fn print_as_genmap(generic: &Generic) -> Vec<String> {
    generic
        .names()
        .map(|name| format!("{name} => {name}"))
        .collect()
}

/// `constant a : integer := 5` or `subtype t is integer`.
pub fn print_as_constant(generic: &Generic) -> String {
    match generic.kind {
        GenericKind::Type => format!(
            "subtype {} is {}",
            generic.name,
            generic.default_value.as_deref().unwrap_or("<type>")
        ),
        GenericKind::Value => format!(
            "constant {} : {} := {}",
            generic.name,
            generic.ty,
            generic.default_value.as_deref().unwrap_or("<value>")
        ),
    }
}
