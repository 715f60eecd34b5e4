//! VHDL entity and component headers.

use crate::{generic, port};
use hdlif_common::Dialect;
use hdlif_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use hdlif_ir::{FragmentError, Generic, HeaderParser, Interface, InterfaceKind, Port};
use hdlif_text::words::{keyword_positions, leading_word, trailing_identifier};
use hdlif_text::{split_top_level, strip_comments, strip_whitespace, Parentheses};

const HEADER_KEYWORDS: [&str; 2] = ["entity", "component"];

/// Parses `entity` and `component` declarations.
pub struct VhdlHeaderParser<'a> {
    sink: &'a DiagnosticSink,
    name: String,
    kind: Option<InterfaceKind>,
}

impl<'a> VhdlHeaderParser<'a> {
    /// Creates a parser reporting into `sink`.
    pub fn new(sink: &'a DiagnosticSink) -> Self {
        Self {
            sink,
            name: String::new(),
            kind: None,
        }
    }

    /// The name recorded from the last header seen.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finds a declaration header and returns `(keyword offset, end of name)`.
    ///
    /// `end entity`, `: entity work.x` and `: component x` are not headers.
    fn find_header(&mut self, code: &str) -> Option<(usize, usize)> {
        let mut hits: Vec<(usize, &str)> = HEADER_KEYWORDS
            .iter()
            .flat_map(|kw| keyword_positions(code, kw).map(move |pos| (pos, *kw)))
            .collect();
        hits.sort_unstable();

        for (pos, keyword) in hits {
            let before = code[..pos].trim_end();
            let (_, previous) = trailing_identifier(before);
            if previous.eq_ignore_ascii_case("end") || before.ends_with(':') {
                continue;
            }
            let after = &code[pos + keyword.len()..];
            let (name, tail) = leading_word(after);
            if name.is_empty() || tail.starts_with('.') {
                continue;
            }
            self.name = name.to_string();
            self.kind = InterfaceKind::from_keyword(keyword);
            return Some((pos, code.len() - tail.len()));
        }
        None
    }

    fn parse_list<T>(
        &self,
        list: &str,
        code: DiagnosticCode,
        parse: fn(&str) -> Result<T, FragmentError>,
        describe: fn(&T) -> String,
    ) -> Vec<T> {
        let mut items = Vec::new();
        for piece in split_top_level(list, ';') {
            if piece.trim().is_empty() {
                continue;
            }
            match parse(piece) {
                Ok(item) => {
                    self.sink.trace(|| describe(&item));
                    items.push(item);
                }
                Err(err) => self.sink.emit(
                    Diagnostic::warning(code, format!("dropped declaration: {err}"))
                        .with_fragment(piece.trim())
                        .with_help(err.suggestion()),
                ),
            }
        }
        items
    }
}

/// Interior of `keyword ( ... )` and the offset just past its `)`.
fn clause<'t>(text: &'t str, keyword: &str) -> Option<(&'t str, usize)> {
    keyword_positions(text, keyword).find_map(|pos| {
        let after = &text[pos + keyword.len()..];
        if !after.trim_start().starts_with('(') {
            return None;
        }
        let (open, close) = Parentheses::group_span(after)?;
        Some((&after[open + 1..close], pos + keyword.len() + close + 1))
    })
}

impl HeaderParser for VhdlHeaderParser<'_> {
    fn dialect(&self) -> Dialect {
        Dialect::Vhdl
    }

    fn sink(&self) -> &DiagnosticSink {
        self.sink
    }

    fn interface_start(&mut self, line: &str) -> Option<usize> {
        self.find_header(line).map(|(start, _)| start)
    }

    /// Matches `end [entity|component] [name] ;`.
    fn interface_end(&self, line: &str) -> Option<usize> {
        keyword_positions(line, "end").find_map(|pos| {
            let mut rest = &line[pos + 3..];
            let (word, tail) = leading_word(rest);
            if word.eq_ignore_ascii_case("entity") || word.eq_ignore_ascii_case("component") {
                rest = tail;
            }
            let (word, tail) = leading_word(rest);
            if !word.is_empty() {
                rest = tail;
            }
            let rest = rest.trim_start();
            rest.starts_with(';').then(|| line.len() - rest.len() + 1)
        })
    }

    fn parse_block(&mut self, text: &str) -> Option<Interface> {
        let code = strip_whitespace(&strip_comments(text, Dialect::Vhdl));
        let rest = match self.find_header(&code) {
            Some((_, name_end)) => &code[name_end..],
            None if self.kind.is_some() => code.as_str(),
            None => {
                self.sink.emit(Diagnostic::error(
                    DiagnosticCode::NO_INTERFACE,
                    "no entity or component found",
                ));
                return None;
            }
        };
        let kind = self.kind.unwrap_or(InterfaceKind::Entity);
        let mut iface = Interface::new(self.name.clone(), kind);
        iface.source = code.clone();

        let generics = clause(rest, "generic");
        let port_search = generics.map_or(rest, |(_, end)| &rest[end..]);
        let ports = clause(port_search, "port");

        match generics.filter(|(list, _)| !list.trim().is_empty()) {
            Some((list, _)) => {
                iface.generics = self.parse_list(
                    list,
                    DiagnosticCode::GENERIC_FRAGMENT,
                    generic::parse,
                    |g: &Generic| format!("generic name: {}, type: {}", g.name, g.ty),
                );
            }
            None => self.sink.emit(
                Diagnostic::note(DiagnosticCode::NO_GENERICS, "no generics found")
                    .with_fragment(iface.name.as_str()),
            ),
        }
        match ports.filter(|(list, _)| !list.trim().is_empty()) {
            Some((list, _)) => {
                iface.ports = self.parse_list(
                    list,
                    DiagnosticCode::PORT_FRAGMENT,
                    port::parse,
                    |p: &Port| {
                        format!(
                            "port name: {}, mode: {}, type: {}",
                            p.name,
                            p.mode_keyword(Dialect::Vhdl),
                            p.ty
                        )
                    },
                );
            }
            None => self.sink.emit(
                Diagnostic::note(DiagnosticCode::NO_PORTS, "no ports found")
                    .with_fragment(iface.name.as_str()),
            ),
        }

        Some(iface)
    }
}
