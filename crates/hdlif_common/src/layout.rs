//! Indentation and alignment settings consumed by the renderers.

use serde::{Deserialize, Serialize};

/// One level of indentation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum IndentUnit {
    /// A fixed number of spaces per level.
    Spaces(u8),
    /// A single tab character per level.
    Tab,
}

impl IndentUnit {
    /// Returns the whitespace prefix for `depth` levels.
    pub fn render(self, depth: usize) -> String {
        match self {
            IndentUnit::Spaces(width) => " ".repeat(width as usize * depth),
            IndentUnit::Tab => "\t".repeat(depth),
        }
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        IndentUnit::Spaces(4)
    }
}

/// Resolved formatting settings for one dialect.
///
/// Top-level declarations (`module`, `entity`) always start at depth zero;
/// nested views (components, instances, signal and constant blocks) start at
/// [`initial_depth`](Self::initial_depth) since they are pasted inside a body.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Layout {
    /// The indentation unit.
    pub indent: IndentUnit,
    /// Whether anchor alignment passes run after printing.
    pub align: bool,
    /// Starting depth for nested views.
    pub initial_depth: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent: IndentUnit::default(),
            align: true,
            initial_depth: 1,
        }
    }
}
