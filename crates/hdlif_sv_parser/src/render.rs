//! SystemVerilog output views of an [`Interface`].
//!
//! Every view is printed unindented, aligned when the [`Layout`] asks for it,
//! then re-indented by parenthesis depth.

use crate::{parameter, port};
use hdlif_common::{Dialect, HdlifResult, Layout};
use hdlif_ir::{Generic, Interface, InterfaceKind, Port};
use hdlif_text::{indent, AlignOptions, Aligner};

const ASSIGNMENT: &str = "=";

fn keyword(iface: &Interface) -> &'static str {
    match iface.kind {
        InterfaceKind::Macromodule => "macromodule",
        _ => "module",
    }
}

/// Appends `,` to every line but the last.
fn push_list(lines: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    let start = lines.len();
    lines.extend(items);
    let end = lines.len();
    if end > start {
        for line in &mut lines[start..end - 1] {
            line.push(',');
        }
    }
}

fn finish(mut lines: Vec<String>, depth: usize, layout: &Layout) -> HdlifResult<String> {
    if layout.align {
        Aligner::new()?.align_str(
            &mut lines,
            ASSIGNMENT,
            &AlignOptions::for_dialect(Dialect::SystemVerilog),
        )?;
    }
    indent(&mut lines, depth, layout.indent);
    Ok(lines.join("\n"))
}

fn column_width<'a>(layout: &Layout, cells: impl Iterator<Item = &'a str>) -> usize {
    if layout.align {
        cells.map(str::len).max().unwrap_or(0)
    } else {
        0
    }
}

fn columns(cells: &[(&str, usize)], tail: &str) -> String {
    let mut line = String::new();
    for &(cell, width) in cells {
        if cell.is_empty() && width == 0 {
            continue;
        }
        line.push_str(&format!("{cell:<width$} "));
    }
    line.push_str(tail);
    line
}

fn port_line(port: &Port, mode_width: usize, ty_width: usize) -> String {
    let tail = port::with_default(port::declarator(port), port.default_value.as_deref());
    columns(
        &[
            (port.mode_keyword(Dialect::SystemVerilog), mode_width),
            (&port.ty, ty_width),
        ],
        &tail,
    )
}

/// Parameters one per name: `parameter int A, B = 5` would leave `A`
/// without a default.
fn declared_generics(iface: &Interface) -> Vec<Generic> {
    iface.generics.iter().flat_map(Generic::expand).collect()
}

/// Ports as declared; a shared list is split only when it carries a
/// default, which would otherwise bind to the last name alone.
fn declared_ports(iface: &Interface) -> Vec<Port> {
    iface
        .ports
        .iter()
        .flat_map(|p| match p.default_value {
            Some(_) => p.expand().collect(),
            None => vec![p.clone()],
        })
        .collect()
}

/// `module m #( ... ) ( ... ); endmodule`, starting at depth zero.
pub fn declaration(iface: &Interface, layout: &Layout) -> HdlifResult<String> {
    let head = format!("{} {}", keyword(iface), iface.name);
    let generics = declared_generics(iface);
    let ports = declared_ports(iface);
    let mut lines = Vec::new();

    if generics.is_empty() {
        lines.push(head);
    } else {
        lines.push(format!("{head} #("));
        push_list(&mut lines, generics.iter().map(parameter::print_as_generic));
        lines.push(")".to_string());
    }

    let Some(last) = lines.last_mut() else {
        return Ok(String::new());
    };
    if ports.is_empty() {
        last.push(';');
    } else {
        last.push_str(" (");
        let mode_width = column_width(
            layout,
            ports.iter().map(|p| p.mode_keyword(Dialect::SystemVerilog)),
        );
        let ty_width = column_width(layout, ports.iter().map(|p| p.ty.as_str()));
        push_list(
            &mut lines,
            ports.iter().map(|p| port_line(p, mode_width, ty_width)),
        );
        lines.push(");".to_string());
    }
    lines.push("endmodule".to_string());

    finish(lines, 0, layout)
}

/// `m #( .a ( a ) ) label ( .x ( x ) );`, starting at the nested depth.
///
/// Local parameters cannot be overridden and are left out.
pub fn instance(iface: &Interface, label: &str, layout: &Layout) -> HdlifResult<String> {
    let overrides: Vec<&str> = iface
        .generics
        .iter()
        .filter(|g| !g.local)
        .flat_map(|g| g.names())
        .collect();
    let connections: Vec<&str> = iface.ports.iter().flat_map(Port::names).collect();
    let generic_width = column_width(layout, overrides.iter().copied());
    let port_width = column_width(layout, connections.iter().copied());

    let mut lines = Vec::new();
    let mut head = if overrides.is_empty() {
        format!("{} {label}", iface.name)
    } else {
        lines.push(format!("{} #(", iface.name));
        push_list(
            &mut lines,
            overrides.iter().map(|n| port::connection(n, generic_width)),
        );
        format!(") {label}")
    };

    if connections.is_empty() {
        head.push_str(" ();");
        lines.push(head);
    } else {
        head.push_str(" (");
        lines.push(head);
        push_list(
            &mut lines,
            connections.iter().map(|n| port::connection(n, port_width)),
        );
        lines.push(");".to_string());
    }

    indent(&mut lines, layout.initial_depth, layout.indent);
    Ok(lines.join("\n"))
}

/// One `logic [7:0] a;` per port, `None` without ports.
pub fn signals(iface: &Interface, layout: &Layout) -> HdlifResult<Option<String>> {
    let ports = declared_ports(iface);
    if ports.is_empty() {
        return Ok(None);
    }
    let ty_width = column_width(layout, ports.iter().map(|p| p.ty.as_str()));
    let lines = ports
        .into_iter()
        .map(|p| {
            let mut line = port_line(&Port { mode: None, ..p }, 0, ty_width);
            line.push(';');
            line
        })
        .collect();
    finish(lines, layout.initial_depth, layout).map(Some)
}

/// One `const ... ;` or `typedef ... ;` per parameter name, `None` without any.
pub fn constants(iface: &Interface, layout: &Layout) -> HdlifResult<Option<String>> {
    let generics = declared_generics(iface);
    if generics.is_empty() {
        return Ok(None);
    }
    let lines = generics
        .iter()
        .map(|g| format!("{};", parameter::print_as_constant(g)))
        .collect();
    finish(lines, layout.initial_depth, layout).map(Some)
}
