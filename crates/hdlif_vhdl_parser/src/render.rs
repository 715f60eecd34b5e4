//! VHDL output views of an [`Interface`].

use crate::{generic, port};
use hdlif_common::{Dialect, HdlifResult, Layout};
use hdlif_ir::{Interface, InterfaceKind};
use hdlif_text::{indent, AlignOptions, Aligner};

const COLON: &str = ":";
const AFTER_MODE: &str = r"(?i):\s?(?:inout\b|in\b|out\b|buffer\b|linkage\b)?\s*";
const ASSIGN: &str = ":=";
const ARROW: &str = "=>";

/// Runs the declaration alignment passes: names, types, then defaults.
fn align_declarations(lines: &mut [String], layout: &Layout) -> HdlifResult<()> {
    if !layout.align {
        return Ok(());
    }
    let aligner = Aligner::new()?;
    let opts = AlignOptions::for_dialect(Dialect::Vhdl);
    aligner.align_str(lines, COLON, &opts)?;
    aligner.align_str(lines, AFTER_MODE, &opts.post())?;
    aligner.align_str(lines, ASSIGN, &opts)?;
    Ok(())
}

fn align_associations(lines: &mut [String], layout: &Layout) -> HdlifResult<()> {
    if layout.align {
        Aligner::new()?.align_str(lines, ARROW, &AlignOptions::for_dialect(Dialect::Vhdl))?;
    }
    Ok(())
}

/// Appends `sep` to every line but the last.
fn push_list(lines: &mut Vec<String>, items: impl IntoIterator<Item = String>, sep: char) {
    let start = lines.len();
    lines.extend(items);
    let end = lines.len();
    if end > start {
        for line in &mut lines[start..end - 1] {
            line.push(sep);
        }
    }
}

/// The `generic ( ... ); port ( ... );` clauses.
fn clauses(iface: &Interface) -> Vec<String> {
    let mut lines = Vec::new();
    if !iface.generics.is_empty() {
        lines.push("generic (".to_string());
        push_list(&mut lines, iface.generics.iter().map(generic::print_as_generic), ';');
        lines.push(");".to_string());
    }
    if !iface.ports.is_empty() {
        lines.push("port (".to_string());
        push_list(&mut lines, iface.ports.iter().map(port::print_as_port), ';');
        lines.push(");".to_string());
    }
    lines
}

/// Indents `body` one level inside `head` and `foot`, both at `depth`.
fn wrap(
    head: String,
    mut body: Vec<String>,
    foot: Option<String>,
    depth: usize,
    layout: &Layout,
) -> String {
    let prefix = layout.indent.render(depth);
    indent(&mut body, depth + 1, layout.indent);
    let mut lines = vec![format!("{prefix}{head}")];
    lines.append(&mut body);
    if let Some(foot) = foot {
        lines.push(format!("{prefix}{foot}"));
    }
    lines.join("\n")
}

fn declaration(
    iface: &Interface,
    kind: InterfaceKind,
    depth: usize,
    layout: &Layout,
) -> HdlifResult<String> {
    let keyword = kind.keyword();
    let mut body = clauses(iface);
    align_declarations(&mut body, layout)?;
    Ok(wrap(
        format!("{keyword} {} is", iface.name),
        body,
        Some(format!("end {keyword} {};", iface.name)),
        depth,
        layout,
    ))
}

/// `entity m is ... end entity m;`, starting at depth zero.
pub fn entity(iface: &Interface, layout: &Layout) -> HdlifResult<String> {
    declaration(iface, InterfaceKind::Entity, 0, layout)
}

/// `component m is ... end component m;`, starting at the nested depth.
pub fn component(iface: &Interface, layout: &Layout) -> HdlifResult<String> {
    declaration(iface, InterfaceKind::Component, layout.initial_depth, layout)
}

/// `label : entity work.m generic map ( ... ) port map ( ... );`
pub fn instance(iface: &Interface, label: &str, layout: &Layout) -> HdlifResult<String> {
    let head = format!("{label} : entity work.{}", iface.name);
    let overrides: Vec<String> = iface
        .generics
        .iter()
        .filter(|g| !g.local)
        .flat_map(generic::print_as_genmap)
        .collect();
    let connections: Vec<String> = iface.ports.iter().flat_map(port::print_as_portmap).collect();

    if overrides.is_empty() && connections.is_empty() {
        return Ok(format!("{}{head};", layout.indent.render(layout.initial_depth)));
    }

    let mut body = Vec::new();
    if !overrides.is_empty() {
        body.push("generic map (".to_string());
        push_list(&mut body, overrides, ',');
        body.push(")".to_string());
    }
    if !connections.is_empty() {
        body.push("port map (".to_string());
        push_list(&mut body, connections, ',');
        body.push(")".to_string());
    }
    if let Some(last) = body.last_mut() {
        last.push(';');
    }
    align_associations(&mut body, layout)?;
    Ok(wrap(head, body, None, layout.initial_depth, layout))
}

fn block(mut lines: Vec<String>, layout: &Layout) -> HdlifResult<Option<String>> {
    if lines.is_empty() {
        return Ok(None);
    }
    align_declarations(&mut lines, layout)?;
    indent(&mut lines, layout.initial_depth, layout.indent);
    Ok(Some(lines.join("\n")))
}

/// One `signal a : t;` per port, `None` without ports.
pub fn signals(iface: &Interface, layout: &Layout) -> HdlifResult<Option<String>> {
    block(
        iface
            .ports
            .iter()
            .map(|p| format!("{};", port::print_as_signal(p)))
            .collect(),
        layout,
    )
}

/// One `constant` or `subtype` per generic, `None` without generics.
pub fn constants(iface: &Interface, layout: &Layout) -> HdlifResult<Option<String>> {
    block(
        iface
            .generics
            .iter()
            .map(|g| format!("{};", generic::print_as_constant(g)))
            .collect(),
        layout,
    )
}
