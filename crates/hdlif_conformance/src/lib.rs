//! Conformance test helpers for the hdlif interface tooling.
//!
//! Provides shared functions that run HDL source text through a
//! [`Session`] and return structured results for assertion in integration
//! tests.

#![warn(missing_docs)]

use hdlif_common::Dialect;
use hdlif_config::HdlifConfig;
use hdlif_diagnostics::{Diagnostic, Severity};
use hdlif_ir::{InstanceNames, Interface};
use hdlif_pipeline::{Session, View};

/// Result of parsing one source text.
pub struct ParseResult {
    /// The parsed interface, if a header was found.
    pub interface: Option<Interface>,
    /// All diagnostics emitted while parsing.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl ParseResult {
    /// The parsed interface; panics with the diagnostics if there is none.
    pub fn interface(&self) -> &Interface {
        match &self.interface {
            Some(iface) => iface,
            None => panic!("no interface parsed: {:#?}", self.diagnostics),
        }
    }

    /// The codes of all diagnostics, in emission order.
    pub fn codes(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.code.to_string()).collect()
    }
}

/// Creates an `HdlifConfig` from TOML text.
pub fn make_config(toml_str: &str) -> HdlifConfig {
    toml::from_str(toml_str).unwrap()
}

/// Parses `source` with a default session.
pub fn parse(dialect: Dialect, source: &str) -> ParseResult {
    parse_with_session(&Session::default(), dialect, source)
}

/// Parses SystemVerilog source text.
pub fn parse_sv(source: &str) -> ParseResult {
    parse(Dialect::SystemVerilog, source)
}

/// Parses VHDL source text.
pub fn parse_vhdl(source: &str) -> ParseResult {
    parse(Dialect::Vhdl, source)
}

/// Parses `source` with `session` and drains its diagnostics.
pub fn parse_with_session(session: &Session, dialect: Dialect, source: &str) -> ParseResult {
    let interface = session.parse(dialect, source);
    let diagnostics = session.take_diagnostics();
    let has_errors = diagnostics.iter().any(|d| d.severity.is_error());
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    ParseResult {
        interface,
        diagnostics,
        has_errors,
        warning_count,
    }
}

/// Parses `source` and renders `view` of it in `target`.
///
/// Returns the text and every diagnostic from parsing and translation.
pub fn convert(
    from: Dialect,
    source: &str,
    view: View,
    target: Dialect,
) -> (Option<String>, Vec<Diagnostic>) {
    let session = Session::default();
    let text = session.parse(from, source).and_then(|iface| {
        session
            .render(&iface, view, target, &mut InstanceNames::new())
            .unwrap()
    });
    (text, session.take_diagnostics())
}
