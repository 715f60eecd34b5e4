//! Configuration types deserialized from `hdlif.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `hdlif.toml`.
///
/// Every table is optional; an empty file yields the built-in defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HdlifConfig {
    /// Global formatting defaults shared by both dialects.
    #[serde(default)]
    pub format: FormatTable,
    /// SystemVerilog settings.
    #[serde(default)]
    pub sv: SvConfig,
    /// VHDL settings.
    #[serde(default)]
    pub vhdl: VhdlConfig,
    /// Diagnostic settings.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// How one indentation level is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// `indent-width` spaces per level.
    Spaces,
    /// One tab per level.
    Tabs,
}

/// A `[format]` table. Unset keys fall through to the next table in the chain.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct FormatTable {
    indent: Option<IndentStyle>,
    #[serde(rename = "indent-width")]
    indent_width: Option<u8>,
    align: Option<bool>,
    #[serde(rename = "initial-depth")]
    initial_depth: Option<usize>,
}

impl FormatTable {
    /// Default number of spaces per indentation level.
    pub const DEFAULT_INDENT_WIDTH: u8 = 4;

    /// Indentation style, spaces unless set.
    pub fn get_indent(&self) -> IndentStyle {
        self.indent.unwrap_or(IndentStyle::Spaces)
    }

    /// Spaces per level when indenting with spaces.
    pub fn get_indent_width(&self) -> u8 {
        self.indent_width.unwrap_or(Self::DEFAULT_INDENT_WIDTH)
    }

    /// Whether anchor alignment runs, on unless set.
    pub fn is_aligned(&self) -> bool {
        self.align.unwrap_or(true)
    }

    /// Starting depth of nested views.
    pub fn get_initial_depth(&self) -> usize {
        self.initial_depth.unwrap_or(1)
    }

    pub(crate) fn indent_width(&self) -> Option<u8> {
        self.indent_width
    }

    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`.
    pub fn merge(&mut self, rhs: Option<&Self>) {
        if let Some(rhs) = rhs {
            if self.indent.is_none() {
                self.indent = rhs.indent;
            }
            if self.indent_width.is_none() {
                self.indent_width = rhs.indent_width;
            }
            if self.align.is_none() {
                self.align = rhs.align;
            }
            if self.initial_depth.is_none() {
                self.initial_depth = rhs.initial_depth;
            }
        }
    }
}

/// The `[sv]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SvConfig {
    /// Type given to ports declared without one (`logic` unless set).
    #[serde(rename = "default-net-type")]
    pub default_net_type: Option<String>,
    /// Overrides of the global `[format]` table.
    pub format: Option<FormatTable>,
}

impl SvConfig {
    /// Built-in type for ports declared without one.
    pub const DEFAULT_NET_TYPE: &'static str = "logic";

    /// Type for ports declared without one.
    pub fn get_default_net_type(&self) -> &str {
        self.default_net_type
            .as_deref()
            .unwrap_or(Self::DEFAULT_NET_TYPE)
    }
}

/// The `[vhdl]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct VhdlConfig {
    /// Overrides of the global `[format]` table.
    pub format: Option<FormatTable>,
}

/// The `[diagnostics]` table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    /// Record trace notes while parsing.
    #[serde(default)]
    pub trace: bool,
}
