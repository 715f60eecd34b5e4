//! SystemVerilog module headers.

use crate::{parameter, port};
use hdlif_common::Dialect;
use hdlif_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use hdlif_ir::{FragmentError, Generic, HeaderParser, Interface, InterfaceKind, Mode, Port};
use hdlif_text::words::{
    find_keyword, is_escaped_identifier, is_ident_char, is_identifier, keyword_positions,
    leading_word,
};
use hdlif_text::{find_top_level, split_top_level, strip_comments, strip_whitespace, Parentheses};

const HEADER_KEYWORDS: [&str; 2] = ["module", "macromodule"];
const TERMINATOR: &str = "endmodule";

/// Parses `module` and `macromodule` headers, ANSI or not.
pub struct SvHeaderParser<'a> {
    sink: &'a DiagnosticSink,
    default_type: String,
    name: String,
    kind: Option<InterfaceKind>,
}

impl<'a> SvHeaderParser<'a> {
    /// Creates a parser that gives untyped ports `default_type`.
    pub fn new(sink: &'a DiagnosticSink, default_type: impl Into<String>) -> Self {
        Self {
            sink,
            default_type: default_type.into(),
            name: String::new(),
            kind: None,
        }
    }

    /// The name recorded from the last header seen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds the first header keyword followed by a name and returns
    /// `(keyword offset, end of name)`.
    fn find_header(&mut self, code: &str) -> Option<(usize, usize)> {
        let mut hits: Vec<(usize, &str)> = HEADER_KEYWORDS
            .iter()
            .flat_map(|kw| keyword_positions(code, kw).map(move |pos| (pos, *kw)))
            .collect();
        hits.sort_unstable();
        let (start, keyword, name_start, name_len) =
            hits.into_iter().find_map(|(start, keyword)| {
                let name = code[start + keyword.len()..].trim_start();
                let name_start = code.len() - name.len();
                let len = module_name_len(name);
                (len > 0).then_some((start, keyword, name_start, len))
            })?;
        self.name = code[name_start..name_start + name_len].to_string();
        self.kind = InterfaceKind::from_keyword(keyword);
        Some((start, name_start + name_len))
    }

    fn warn_fragment(&self, code: DiagnosticCode, err: &FragmentError, fragment: &str) {
        self.sink.emit(
            Diagnostic::warning(code, format!("dropped declaration: {err}"))
                .with_fragment(fragment.trim())
                .with_help(err.suggestion()),
        );
    }

    fn parse_parameters(&self, list: &str, generics: &mut Vec<Generic>) {
        for piece in split_top_level(list, ',') {
            if piece.trim().is_empty() {
                continue;
            }
            let parsed = match (parameter::parse(piece), generics.last()) {
                (Err(FragmentError::MissingKeyword(_)), Some(previous)) => {
                    parameter::parse_continuation(piece, previous)
                }
                (result, _) => result,
            };
            match parsed {
                Ok(generic) => {
                    self.sink.trace(|| {
                        format!(
                            "parameter name: {}, type: {}, default: {}",
                            generic.name,
                            generic.ty,
                            generic.default_value.as_deref().unwrap_or_default()
                        )
                    });
                    generics.push(generic);
                }
                Err(err) => self.warn_fragment(DiagnosticCode::GENERIC_FRAGMENT, &err, piece),
            }
        }
    }

    /// Parses a comma list of port declarations.
    ///
    /// A declaration without a direction continues the previous explicit one;
    /// without a type as well, it also takes that declaration's type.
    fn parse_ports(&self, list: &str) -> Vec<Port> {
        let mut ports = Vec::new();
        let mut last: Option<(Mode, Option<String>)> = None;
        for piece in split_top_level(list, ',') {
            let mut decl = match port::parse_decl(piece) {
                Ok(decl) => decl,
                Err(err) => {
                    self.warn_fragment(DiagnosticCode::PORT_FRAGMENT, &err, piece);
                    continue;
                }
            };
            if !port::is_plain_name(&decl.name) {
                self.sink.emit(
                    Diagnostic::help(
                        DiagnosticCode::VERBATIM_NAME,
                        format!("port name '{}' kept as written", decl.name),
                    )
                    .with_fragment(piece.trim())
                    .with_help(format!("escape it as '\\{} '", decl.name)),
                );
            }
            match (decl.mode, &last) {
                (Some(mode), _) => last = Some((mode, decl.ty.clone())),
                (None, Some((mode, ty))) => {
                    decl.mode = Some(*mode);
                    if decl.ty.is_none() {
                        decl.ty = ty.clone();
                    }
                }
                (None, None) => {}
            }
            let port = decl.into_port(&self.default_type);
            self.sink.trace(|| {
                format!(
                    "port name: {}, mode: {}, type: {}",
                    port.name,
                    port.mode_keyword(Dialect::SystemVerilog),
                    port.ty
                )
            });
            ports.push(port);
        }
        ports
    }

    /// Applies non-ANSI body declarations to the header's port list.
    fn parse_body(&self, body: &str, iface: &mut Interface) {
        for statement in split_top_level(body, ';') {
            let statement = statement.trim();
            let (word, _) = leading_word(statement);
            if word.eq_ignore_ascii_case("parameter") {
                self.parse_parameters(statement, &mut iface.generics);
                continue;
            }
            if Mode::from_keyword(Dialect::SystemVerilog, word).is_none() {
                continue;
            }
            for port in self.parse_ports(statement) {
                match iface.port_mut(&port.name) {
                    Some(slot) => *slot = port,
                    None => self.sink.emit(
                        Diagnostic::warning(
                            DiagnosticCode::UNMATCHED_REDECLARATION,
                            format!("port '{}' is not in the module header", port.name),
                        )
                        .with_fragment(statement),
                    ),
                }
            }
        }
    }
}

/// Length of the module name at the start of `text`, zero if there is none.
fn module_name_len(text: &str) -> usize {
    let token = text.split(char::is_whitespace).next().unwrap_or_default();
    if is_escaped_identifier(token) {
        return token.len();
    }
    let len = text
        .char_indices()
        .find(|&(_, c)| !is_ident_char(c))
        .map_or(text.len(), |(i, _)| i);
    if is_identifier(&text[..len]) {
        len
    } else {
        0
    }
}

impl HeaderParser for SvHeaderParser<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::SystemVerilog
    }

    fn sink(&self) -> &DiagnosticSink {
        self.sink
    }

    fn interface_start(&mut self, line: &str) -> Option<usize> {
        self.find_header(line).map(|(start, _)| start)
    }

    fn interface_end(&self, line: &str) -> Option<usize> {
        find_keyword(line, TERMINATOR).map(|pos| pos + TERMINATOR.len())
    }

    fn parse_block(&mut self, text: &str) -> Option<Interface> {
        let code = strip_whitespace(&strip_comments(text, Dialect::SystemVerilog));
        let rest = match self.find_header(&code) {
            Some((_, name_end)) => &code[name_end..],
            None if self.kind.is_some() => code.as_str(),
            None => {
                self.sink.emit(Diagnostic::error(
                    DiagnosticCode::NO_INTERFACE,
                    "no module header found",
                ));
                return None;
            }
        };
        let kind = self.kind.unwrap_or(InterfaceKind::Module);
        let mut iface = Interface::new(self.name.clone(), kind);
        iface.source = code.clone();

        let mut rest = rest.trim_start();
        let mut parameter_list = None;
        if let Some(after_hash) = rest.strip_prefix('#') {
            if after_hash.trim_start().starts_with('(') {
                if let Some((open, close)) = Parentheses::group_span(after_hash) {
                    parameter_list = Some(&after_hash[open + 1..close]);
                    rest = after_hash[close + 1..].trim_start();
                }
            }
        }

        let header_end = find_top_level(rest, ";").unwrap_or(rest.len());
        let (port_list, body) = match Parentheses::group_span(rest) {
            Some((open, close)) if open < header_end => {
                let after = &rest[close + 1..];
                (
                    Some(&rest[open + 1..close]),
                    after.find(';').map_or("", |semi| &after[semi + 1..]),
                )
            }
            _ => (None, rest.get(header_end + 1..).unwrap_or_default()),
        };

        match parameter_list.filter(|list| !list.trim().is_empty()) {
            Some(list) => self.parse_parameters(list, &mut iface.generics),
            None => self.sink.emit(
                Diagnostic::note(DiagnosticCode::NO_GENERICS, "no parameters found")
                    .with_fragment(iface.name.as_str()),
            ),
        }
        match port_list.filter(|list| !list.trim().is_empty()) {
            Some(list) => iface.ports = self.parse_ports(list),
            None => self.sink.emit(
                Diagnostic::note(DiagnosticCode::NO_PORTS, "no ports found")
                    .with_fragment(iface.name.as_str()),
            ),
        }
        self.parse_body(body, &mut iface);

        Some(iface)
    }
}
