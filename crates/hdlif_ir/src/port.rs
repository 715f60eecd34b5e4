//! Port records and port modes.
//!
//! A [`Port`] is one signal of an interface. Before
//! [`Interface::flatten`](crate::Interface::flatten) its name may still hold
//! a comma-joined list such as `a, b`.

use hdlif_common::Dialect;
use serde::{Deserialize, Serialize};

/// The direction of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Data flows in (`input` / `in`).
    Input,
    /// Data flows out (`output` / `out`).
    Output,
    /// Bidirectional (`inout`).
    Inout,
    /// VHDL `buffer`: an output that can be read back.
    Buffer,
    /// VHDL `linkage`.
    Linkage,
    /// A mode the translator could not map; prints as `ERR`.
    Unmapped,
}

impl Mode {
    /// Sentinel text printed for modes with no keyword in a dialect.
    pub const SENTINEL: &'static str = "ERR";

    /// The keyword for this mode in `dialect`, or [`SENTINEL`](Self::SENTINEL).
    pub fn keyword(self, dialect: Dialect) -> &'static str {
        match (dialect, self) {
            (Dialect::SystemVerilog, Mode::Input) => "input",
            (Dialect::SystemVerilog, Mode::Output) => "output",
            (_, Mode::Inout) => "inout",
            (Dialect::Vhdl, Mode::Input) => "in",
            (Dialect::Vhdl, Mode::Output) => "out",
            (Dialect::Vhdl, Mode::Buffer) => "buffer",
            (Dialect::Vhdl, Mode::Linkage) => "linkage",
            _ => Self::SENTINEL,
        }
    }

    /// Looks up a mode keyword of `dialect`, ignoring case.
    pub fn from_keyword(dialect: Dialect, word: &str) -> Option<Mode> {
        let word = word.to_ascii_lowercase();
        match (dialect, word.as_str()) {
            (Dialect::SystemVerilog, "input") => Some(Mode::Input),
            (Dialect::SystemVerilog, "output") => Some(Mode::Output),
            (_, "inout") => Some(Mode::Inout),
            (Dialect::Vhdl, "in") => Some(Mode::Input),
            (Dialect::Vhdl, "out") => Some(Mode::Output),
            (Dialect::Vhdl, "buffer") => Some(Mode::Buffer),
            (Dialect::Vhdl, "linkage") => Some(Mode::Linkage),
            _ => None,
        }
    }

    /// The mode seen from the other side of the port.
    ///
    /// `Buffer` becomes `Input`, so reversing twice turns a buffer into an
    /// output. `Inout`, `Linkage` and `Unmapped` are unchanged.
    pub fn reversed(self) -> Mode {
        match self {
            Mode::Input => Mode::Output,
            Mode::Output | Mode::Buffer => Mode::Input,
            other => other,
        }
    }
}

/// One interface signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Identifier, or a comma-joined identifier list before flattening.
    pub name: String,
    /// Direction; `None` when the declaration did not state one.
    pub mode: Option<Mode>,
    /// Base type with packed dimensions, verbatim (`logic [7:0]`).
    pub ty: String,
    /// Unpacked dimensions after the name, concatenated verbatim.
    pub unpacked_dims: String,
    /// Initial value (`:= expr` in VHDL, `= expr` in SystemVerilog).
    pub default_value: Option<String>,
}

impl Port {
    /// Creates a port with no unpacked dimensions and no default.
    pub fn new(name: impl Into<String>, mode: Option<Mode>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode,
            ty: ty.into(),
            unpacked_dims: String::new(),
            default_value: None,
        }
    }

    /// The individual names this declaration introduces.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        crate::split_names(&self.name)
    }

    /// One port per declared name, each with the shared mode, type and default.
    pub fn expand(&self) -> impl Iterator<Item = Port> + '_ {
        self.names().map(move |name| Port {
            name: name.to_string(),
            ..self.clone()
        })
    }

    /// The mode keyword in `dialect`, empty when no mode was stated.
    pub fn mode_keyword(&self, dialect: Dialect) -> &'static str {
        self.mode.map_or("", |m| m.keyword(dialect))
    }
}
