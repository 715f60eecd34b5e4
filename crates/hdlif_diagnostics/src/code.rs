//! Diagnostic codes with category prefixes for structured problem identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a diagnostic code, determining its prefix letter.
///
/// Each category maps to a single-character prefix used in diagnostic code
/// display (e.g., `P101` for a fragment parse problem, `T302` for a
/// translation miss).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Port or generic fragment parsing, prefixed with `P`.
    Parse,
    /// Interface structure (missing lists, missing header), prefixed with `S`.
    Structure,
    /// Cross-dialect translation, prefixed with `T`.
    Translate,
    /// Trace output, prefixed with `D`.
    Trace,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Parse => 'P',
            Category::Structure => 'S',
            Category::Translate => 'T',
            Category::Trace => 'D',
        }
    }
}

/// A structured diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the category prefix followed by a zero-padded 3-digit number,
/// e.g., `P101`, `S203`, `T301`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// A port fragment could not be parsed.
    pub const PORT_FRAGMENT: DiagnosticCode = DiagnosticCode::new(Category::Parse, 101);
    /// A generic or parameter fragment could not be parsed.
    pub const GENERIC_FRAGMENT: DiagnosticCode = DiagnosticCode::new(Category::Parse, 102);
    /// A body declaration names a port that the header does not list.
    pub const UNMATCHED_REDECLARATION: DiagnosticCode = DiagnosticCode::new(Category::Parse, 103);
    /// A declared name is not an identifier and was kept as written.
    pub const VERBATIM_NAME: DiagnosticCode = DiagnosticCode::new(Category::Parse, 104);
    /// No parameter or generic list was found.
    pub const NO_GENERICS: DiagnosticCode = DiagnosticCode::new(Category::Structure, 201);
    /// No port list was found.
    pub const NO_PORTS: DiagnosticCode = DiagnosticCode::new(Category::Structure, 202);
    /// No interface header was found.
    pub const NO_INTERFACE: DiagnosticCode = DiagnosticCode::new(Category::Structure, 203);
    /// An interface header was opened but never terminated.
    pub const UNTERMINATED: DiagnosticCode = DiagnosticCode::new(Category::Structure, 204);
    /// A port mode has no counterpart in the target dialect.
    pub const UNMAPPED_MODE: DiagnosticCode = DiagnosticCode::new(Category::Translate, 301);
    /// A type has no counterpart in the target dialect.
    pub const UNMAPPED_TYPE: DiagnosticCode = DiagnosticCode::new(Category::Translate, 302);
    /// A default value was carried over without rewriting its literals.
    pub const VERBATIM_DEFAULT: DiagnosticCode = DiagnosticCode::new(Category::Translate, 303);
    /// Free-form trace output.
    pub const TRACE: DiagnosticCode = DiagnosticCode::new(Category::Trace, 1);

    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
