//! The two hardware description languages understood by hdlif.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A hardware description language dialect.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// IEEE 1800 SystemVerilog (and plain Verilog module headers).
    #[serde(rename = "sv")]
    SystemVerilog,
    /// IEEE 1076 VHDL.
    Vhdl,
}

impl Dialect {
    /// Returns the line-comment marker of this dialect.
    pub fn line_comment(self) -> &'static str {
        match self {
            Dialect::SystemVerilog => "//",
            Dialect::Vhdl => "--",
        }
    }

    /// Returns the opposite dialect, the target of a translation.
    pub fn other(self) -> Dialect {
        match self {
            Dialect::SystemVerilog => Dialect::Vhdl,
            Dialect::Vhdl => Dialect::SystemVerilog,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::SystemVerilog => write!(f, "systemverilog"),
            Dialect::Vhdl => write!(f, "vhdl"),
        }
    }
}
