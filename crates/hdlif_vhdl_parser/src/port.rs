//! VHDL port declarations: `[signal] a, b : [mode] type [bus] [:= default]`.

use crate::decl::split_object;
use hdlif_common::Dialect;
use hdlif_ir::{FragmentError, Mode, Port};
use hdlif_text::words::{leading_word, strip_keyword, trailing_identifier};

/// Parses one port fragment. Names stay comma-joined until flattened.
pub fn parse(fragment: &str) -> Result<Port, FragmentError> {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return Err(FragmentError::Empty);
    }
    let fragment = strip_keyword(fragment, "signal").map_or(fragment, str::trim);
    let decl = split_object(fragment)?;

    let (word, after) = leading_word(decl.rest);
    let (mode, mut ty) = match Mode::from_keyword(Dialect::Vhdl, word) {
        Some(mode) => (Some(mode), after.trim()),
        None => (None, decl.rest),
    };
    let (head, last) = trailing_identifier(ty);
    if last.eq_ignore_ascii_case("bus") && !head.trim().is_empty() {
        ty = head.trim();
    }
    if ty.is_empty() {
        return Err(FragmentError::MissingType(fragment.to_string()));
    }

    Ok(Port {
        name: decl.names,
        mode,
        ty: ty.to_string(),
        unpacked_dims: String::new(),
        default_value: decl.default_value,
    })
}

fn with_default(mut text: String, default_value: Option<&str>) -> String {
    if let Some(value) = default_value {
        text.push_str(" := ");
        text.push_str(value);
    }
    text
}

/// `a : in std_logic`
pub fn print_as_port(port: &Port) -> String {
    let decl = match port.mode {
        Some(_) => format!("{} : {} {}", port.name, port.mode_keyword(Dialect::Vhdl), port.ty),
        None => format!("{} : {}", port.name, port.ty),
    };
    with_default(decl, port.default_value.as_deref())
}

/// `signal a : std_logic`
pub fn print_as_signal(port: &Port) -> String {
    with_default(
        format!("signal {} : {}", port.name, port.ty),
        port.default_value.as_deref(),
    )
}

/// One `a => a` association per declared name.
pub fn print_as_portmap(port: &Port) -> Vec<String> {
    port.names().map(|name| format!("{name} => {name}")).collect()
}
