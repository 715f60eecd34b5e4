//! The [`Session`] facade.

use crate::view::View;
use hdlif_common::{Dialect, HdlifResult, Layout};
use hdlif_config::{load_config, resolve_format, ConfigError, HdlifConfig};
use hdlif_diagnostics::{Diagnostic, DiagnosticSink};
use hdlif_ir::{BlockScanner, InstanceNames, Interface};
use hdlif_sv_parser::SvHeaderParser;
use hdlif_translate::Translator;
use hdlif_vhdl_parser::VhdlHeaderParser;
use rayon::prelude::*;
use std::path::Path;

/// Configuration plus the diagnostic sink shared by every operation.
///
/// A session is `Sync`; [`parse_batch`](Self::parse_batch) shares it across
/// worker threads.
pub struct Session {
    config: HdlifConfig,
    sink: DiagnosticSink,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(HdlifConfig::default())
    }
}

impl Session {
    /// Creates a session; tracing follows `[diagnostics] trace`.
    pub fn new(config: HdlifConfig) -> Self {
        let sink = DiagnosticSink::with_trace(config.diagnostics.trace);
        Self { config, sink }
    }

    /// Creates a session from the `hdlif.toml` in `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self, ConfigError> {
        load_config(dir).map(Self::new)
    }

    /// The loaded configuration.
    pub fn config(&self) -> &HdlifConfig {
        &self.config
    }

    /// The diagnostic sink.
    pub fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    /// Drains every diagnostic emitted so far.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.sink.take_all()
    }

    /// The resolved layout of `dialect`.
    pub fn layout(&self, dialect: Dialect) -> Layout {
        resolve_format(&self.config, dialect)
    }

    /// Finds and parses the first interface in `text`.
    pub fn parse(&self, dialect: Dialect, text: &str) -> Option<Interface> {
        match dialect {
            Dialect::SystemVerilog => {
                let parser =
                    SvHeaderParser::new(&self.sink, self.config.sv.get_default_net_type());
                BlockScanner::new(parser).scan(text)
            }
            Dialect::Vhdl => BlockScanner::new(VhdlHeaderParser::new(&self.sink)).scan(text),
        }
    }

    /// Parses independent blocks in parallel, keeping input order.
    pub fn parse_batch(&self, blocks: &[(Dialect, String)]) -> Vec<Option<Interface>> {
        blocks
            .par_iter()
            .map(|(dialect, text)| self.parse(*dialect, text))
            .collect()
    }

    /// Returns `iface` in `dialect`, translating when needed.
    pub fn translate(&self, iface: &Interface, dialect: Dialect) -> Interface {
        Translator::new(&self.sink).interface_to(iface, dialect)
    }

    /// Prints `view` of `iface` in `dialect`.
    ///
    /// Instance labels are drawn from `names`. `None` when the view has
    /// nothing to print.
    pub fn render(
        &self,
        iface: &Interface,
        view: View,
        dialect: Dialect,
        names: &mut InstanceNames,
    ) -> HdlifResult<Option<String>> {
        let iface = self.translate(iface, dialect);
        let layout = self.layout(dialect);
        match (dialect, view) {
            (Dialect::SystemVerilog, View::Declaration | View::Component) => {
                hdlif_sv_parser::render::declaration(&iface, &layout).map(Some)
            }
            (Dialect::SystemVerilog, View::Instance) => {
                let label = names.allocate(&iface.name);
                hdlif_sv_parser::render::instance(&iface, &label, &layout).map(Some)
            }
            (Dialect::SystemVerilog, View::Signals) => {
                hdlif_sv_parser::render::signals(&iface, &layout)
            }
            (Dialect::SystemVerilog, View::Constants) => {
                hdlif_sv_parser::render::constants(&iface, &layout)
            }
            (Dialect::Vhdl, View::Declaration) => {
                hdlif_vhdl_parser::render::entity(&iface, &layout).map(Some)
            }
            (Dialect::Vhdl, View::Component) => {
                hdlif_vhdl_parser::render::component(&iface, &layout).map(Some)
            }
            (Dialect::Vhdl, View::Instance) => {
                let label = names.allocate(&iface.name);
                hdlif_vhdl_parser::render::instance(&iface, &label, &layout).map(Some)
            }
            (Dialect::Vhdl, View::Signals) => hdlif_vhdl_parser::render::signals(&iface, &layout),
            (Dialect::Vhdl, View::Constants) => {
                hdlif_vhdl_parser::render::constants(&iface, &layout)
            }
        }
    }
}
