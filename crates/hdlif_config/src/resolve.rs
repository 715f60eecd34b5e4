//! Format resolution: merging the global table with per-dialect overrides.

use crate::types::{HdlifConfig, IndentStyle};
use hdlif_common::{Dialect, IndentUnit, Layout};

/// Resolves the [`Layout`] for one dialect.
///
/// Keys set in the dialect's own `format` table win; unset keys fall back to
/// the global `[format]` table and then to the built-in defaults.
pub fn resolve_format(config: &HdlifConfig, dialect: Dialect) -> Layout {
    let overrides = match dialect {
        Dialect::SystemVerilog => config.sv.format.as_ref(),
        Dialect::Vhdl => config.vhdl.format.as_ref(),
    };
    let mut table = overrides.cloned().unwrap_or_default();
    table.merge(Some(&config.format));

    let indent = match table.get_indent() {
        IndentStyle::Spaces => IndentUnit::Spaces(table.get_indent_width()),
        IndentStyle::Tabs => IndentUnit::Tab,
    };
    Layout {
        indent,
        align: table.is_aligned(),
        initial_depth: table.get_initial_depth(),
    }
}
