//! Whole-record translation with diagnostics.

use crate::error::TranslateError;
use crate::tables::{
    mode_sv_to_vhdl, mode_vhdl_to_sv, name_sv_to_vhdl, name_vhdl_to_sv, type_sv_to_vhdl,
    type_vhdl_to_sv,
};
use hdlif_common::Dialect;
use hdlif_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};
use hdlif_ir::{Generic, GenericKind, Interface, InterfaceKind, Mode, Port};

/// Copies interface records into the other dialect.
///
/// Translation never fails: an unmapped mode or type is reported to the sink
/// and replaced by its [`TranslateError::fallback`].
pub struct Translator<'s> {
    sink: &'s DiagnosticSink,
}

impl<'s> Translator<'s> {
    /// Creates a translator reporting into `sink`.
    pub fn new(sink: &'s DiagnosticSink) -> Self {
        Self { sink }
    }

    fn report(&self, err: &TranslateError, owner: &str) {
        let code = match err {
            TranslateError::UnmappedMode { .. } => DiagnosticCode::UNMAPPED_MODE,
            TranslateError::UnmappedType { .. } => DiagnosticCode::UNMAPPED_TYPE,
        };
        self.sink
            .emit(Diagnostic::warning(code, err.to_string()).with_fragment(owner));
    }

    fn mode(&self, port: &Port, from: Dialect) -> Option<Mode> {
        let mode = port.mode?;
        let keyword = mode.keyword(from);
        let translated = match from {
            Dialect::SystemVerilog => mode_sv_to_vhdl(keyword),
            Dialect::Vhdl => mode_vhdl_to_sv(keyword),
        };
        match translated {
            Ok(target) => {
                Some(Mode::from_keyword(from.other(), target).unwrap_or(Mode::Unmapped))
            }
            Err(err) => {
                self.report(&err, &port.name);
                Some(Mode::Unmapped)
            }
        }
    }

    fn ty(&self, ty: &str, from: Dialect, owner: &str) -> String {
        let translated = match from {
            Dialect::SystemVerilog => type_sv_to_vhdl(ty),
            Dialect::Vhdl => type_vhdl_to_sv(ty),
        };
        translated.unwrap_or_else(|err| {
            self.report(&err, owner);
            err.fallback().to_string()
        })
    }

    /// Copies a default unchanged, noting when it uses literal syntax of
    /// `from` that the other dialect reads differently.
    fn default_value(&self, value: Option<&str>, from: Dialect, owner: &str) -> Option<String> {
        let value = value?;
        if !is_portable_expression(value) {
            self.sink.emit(
                Diagnostic::note(
                    DiagnosticCode::VERBATIM_DEFAULT,
                    format!("default '{value}' copied unchanged"),
                )
                .with_fragment(owner)
                .with_help(format!("rewrite it in {} syntax", from.other())),
            );
        }
        Some(value.to_string())
    }

    fn port(&self, port: &Port, from: Dialect) -> Port {
        Port {
            name: rename(port.names(), from),
            mode: self.mode(port, from),
            ty: self.ty(&port.ty, from, &port.name),
            unpacked_dims: String::new(),
            default_value: self.default_value(port.default_value.as_deref(), from, &port.name),
        }
    }

    fn generic(&self, generic: &Generic, from: Dialect) -> Generic {
        let mut out = generic.clone();
        out.name = rename(generic.names(), from);
        match generic.kind {
            GenericKind::Value => {
                out.ty = self.ty(&generic.ty, from, &generic.name);
                out.default_value =
                    self.default_value(generic.default_value.as_deref(), from, &generic.name);
            }
            GenericKind::Type => {
                out.default_value = generic
                    .default_value
                    .as_deref()
                    .map(|ty| self.ty(ty, from, &generic.name));
            }
        }
        out
    }

    /// Translates a SystemVerilog port. Unpacked dimensions have no VHDL
    /// counterpart and are dropped with a warning.
    pub fn port_sv_to_vhdl(&self, port: &Port) -> Port {
        if !port.unpacked_dims.is_empty() {
            self.sink.emit(
                Diagnostic::warning(
                    DiagnosticCode::UNMAPPED_TYPE,
                    format!("unpacked dimensions '{}' dropped", port.unpacked_dims),
                )
                .with_fragment(port.name.as_str()),
            );
        }
        self.port(port, Dialect::SystemVerilog)
    }

    /// Translates a VHDL port.
    pub fn port_vhdl_to_sv(&self, port: &Port) -> Port {
        self.port(port, Dialect::Vhdl)
    }

    /// Translates a SystemVerilog parameter.
    pub fn generic_sv_to_vhdl(&self, generic: &Generic) -> Generic {
        self.generic(generic, Dialect::SystemVerilog)
    }

    /// Translates a VHDL generic.
    pub fn generic_vhdl_to_sv(&self, generic: &Generic) -> Generic {
        self.generic(generic, Dialect::Vhdl)
    }

    /// Translates a module into an entity.
    pub fn interface_sv_to_vhdl(&self, iface: &Interface) -> Interface {
        self.sink
            .trace(|| format!("translating module {} to VHDL", iface.name));
        Interface {
            name: name_sv_to_vhdl(&iface.name),
            kind: InterfaceKind::Entity,
            ports: iface.ports.iter().map(|p| self.port_sv_to_vhdl(p)).collect(),
            generics: iface
                .generics
                .iter()
                .map(|g| self.generic_sv_to_vhdl(g))
                .collect(),
            source: iface.source.clone(),
        }
    }

    /// Translates an entity or component into a module.
    pub fn interface_vhdl_to_sv(&self, iface: &Interface) -> Interface {
        self.sink.trace(|| {
            format!(
                "translating {} {} to SystemVerilog",
                iface.kind.keyword(),
                iface.name
            )
        });
        Interface {
            name: name_vhdl_to_sv(&iface.name),
            kind: InterfaceKind::Module,
            ports: iface.ports.iter().map(|p| self.port_vhdl_to_sv(p)).collect(),
            generics: iface
                .generics
                .iter()
                .map(|g| self.generic_vhdl_to_sv(g))
                .collect(),
            source: iface.source.clone(),
        }
    }

    /// Returns `iface` in `dialect`, copying it unchanged if already there.
    pub fn interface_to(&self, iface: &Interface, dialect: Dialect) -> Interface {
        match (iface.dialect(), dialect) {
            (from, to) if from == to => iface.clone(),
            (Dialect::SystemVerilog, _) => self.interface_sv_to_vhdl(iface),
            (Dialect::Vhdl, _) => self.interface_vhdl_to_sv(iface),
        }
    }
}

/// Requotes each name of a comma-joined list for the other dialect.
fn rename<'a>(names: impl Iterator<Item = &'a str>, from: Dialect) -> String {
    let requote: fn(&str) -> String = match from {
        Dialect::SystemVerilog => name_sv_to_vhdl,
        Dialect::Vhdl => name_vhdl_to_sv,
    };
    names.map(requote).collect::<Vec<_>>().join(", ")
}

/// Whether `value` reads the same in both dialects: names, decimal
/// numbers and parenthesized arithmetic.
fn is_portable_expression(value: &str) -> bool {
    value.chars().all(|c| {
        c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || "()+-*/".contains(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module() -> Interface {
        let mut iface = Interface::new("m", InterfaceKind::Module);
        iface.generics.push(Generic::value("W", "int", Some("8".into())));
        iface.generics.push(Generic::type_param("T", Some("logic [3:0]".into())));
        iface.ports.push(Port::new("clk", Some(Mode::Input), "logic"));
        iface.ports.push(Port::new("q", Some(Mode::Output), "logic [7:0]"));
        iface
    }

    #[test]
    fn module_to_entity() {
        let sink = DiagnosticSink::new();
        let entity = Translator::new(&sink).interface_to(&module(), Dialect::Vhdl);
        assert_eq!(entity.kind, InterfaceKind::Entity);
        assert_eq!(entity.ports[0].mode, Some(Mode::Input));
        assert_eq!(entity.ports[0].ty, "std_logic");
        assert_eq!(entity.ports[1].ty, "std_logic_vector(7 downto 0)");
        assert_eq!(entity.generics[0].ty, "integer");
        assert_eq!(
            entity.generics[1].default_value.as_deref(),
            Some("std_logic_vector(3 downto 0)")
        );
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn round_trip_restores_interface() {
        let sink = DiagnosticSink::new();
        let translator = Translator::new(&sink);
        let original = module();
        let back = translator.interface_to(
            &translator.interface_to(&original, Dialect::Vhdl),
            Dialect::SystemVerilog,
        );
        assert_eq!(back.ports, original.ports);
        assert_eq!(back.generics[1], original.generics[1]);
        assert_eq!(back.generics[0].ty, "integer");
    }

    #[test]
    fn same_dialect_is_a_copy() {
        let sink = DiagnosticSink::with_trace(true);
        let original = module();
        let copy = Translator::new(&sink).interface_to(&original, Dialect::SystemVerilog);
        assert_eq!(copy, original);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn misses_are_reported_and_replaced() {
        let sink = DiagnosticSink::new();
        let translator = Translator::new(&sink);
        let buffer = Port::new("q", Some(Mode::Buffer), "real");
        let out = translator.port_vhdl_to_sv(&buffer);
        assert_eq!(out.mode, Some(Mode::Unmapped));
        assert_eq!(out.ty, "ERR");
        let codes: Vec<String> = sink.diagnostics().iter().map(|d| d.code.to_string()).collect();
        assert_eq!(codes, vec!["T301", "T302"]);
        assert!(!sink.has_errors());
    }

    #[test]
    fn unpacked_dimensions_are_dropped() {
        let sink = DiagnosticSink::new();
        let mut port = Port::new("mem", Some(Mode::Inout), "logic [7:0]");
        port.unpacked_dims = "[0:3]".into();
        let out = Translator::new(&sink).port_sv_to_vhdl(&port);
        assert!(out.unpacked_dims.is_empty());
        assert_eq!(out.ty, "std_logic_vector(7 downto 0)");
        assert_eq!(sink.diagnostics()[0].code, DiagnosticCode::UNMAPPED_TYPE);
    }

    #[test]
    fn escaped_names_change_quoting() {
        let sink = DiagnosticSink::new();
        let translator = Translator::new(&sink);
        let port = Port::new(r"\data.in, q", Some(Mode::Input), "logic");
        let vhdl = translator.port_sv_to_vhdl(&port);
        assert_eq!(vhdl.name, r"\data.in\, q");
        assert_eq!(translator.port_vhdl_to_sv(&vhdl).name, port.name);

        let generic = Generic::value(r"\W.x\", "integer", Some("4".into()));
        assert_eq!(translator.generic_vhdl_to_sv(&generic).name, r"\W.x");
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn literal_defaults_are_noted() {
        let sink = DiagnosticSink::new();
        let translator = Translator::new(&sink);
        let mut port = Port::new("ready", Some(Mode::Output), "logic");
        port.default_value = Some("1'b0".into());
        let out = translator.port_sv_to_vhdl(&port);
        assert_eq!(out.default_value.as_deref(), Some("1'b0"));

        let generic = Generic::value("W", "int", Some("2*N-1".into()));
        let generic = translator.generic_sv_to_vhdl(&generic);
        assert_eq!(generic.default_value.as_deref(), Some("2*N-1"));

        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, DiagnosticCode::VERBATIM_DEFAULT);
        assert_eq!(diags[0].fragment.as_deref(), Some("ready"));
        assert_eq!(diags[0].help, vec!["rewrite it in vhdl syntax".to_string()]);
    }

    #[test]
    fn portable_expressions() {
        assert!(is_portable_expression("W * (DEPTH + 1)"));
        assert!(!is_portable_expression("'0'"));
        assert!(!is_portable_expression("(others => '0')"));
        assert!(!is_portable_expression("1<<6"));
    }

    #[test]
    fn missing_mode_stays_missing() {
        let sink = DiagnosticSink::new();
        let port = Port::new("x", None, "bit");
        let out = Translator::new(&sink).port_vhdl_to_sv(&port);
        assert_eq!(out.mode, None);
        assert_eq!(out.ty, "logic");
    }
}
