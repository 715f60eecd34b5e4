//! How much a diagnostic matters to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic; the derived order runs from `Help` to `Error`.
///
/// Only `Error` means nothing usable came out of a block. Every other level
/// accompanies a result that was still produced.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A suggestion about input that was accepted as written.
    Help,
    /// A missing optional part, or trace output.
    Note,
    /// A dropped fragment or lossy translation; processing continued.
    Warning,
    /// Nothing usable could be produced from the input.
    Error,
}

impl Severity {
    /// Returns `true` if this severity is [`Error`](Severity::Error).
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    /// The lowercase word printed in front of a diagnostic code.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Help => "help",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Bold ANSI color escape for terminal headers.
    pub fn ansi_color(self) -> &'static str {
        match self {
            Severity::Help => "\x1b[1;32m",
            Severity::Note => "\x1b[1;36m",
            Severity::Warning => "\x1b[1;33m",
            Severity::Error => "\x1b[1;31m",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
