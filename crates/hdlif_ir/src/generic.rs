//! Generic (VHDL) and parameter (SystemVerilog) records.

use serde::{Deserialize, Serialize};

/// Whether a generic carries a value or names a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenericKind {
    /// `parameter int N = 4` / `N : integer := 4`.
    Value,
    /// `parameter type T = logic` / `type T`. The default is a type expression.
    Type,
}

/// One compile-time parameter of an interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generic {
    /// Identifier, or a comma-joined identifier list before flattening.
    pub name: String,
    /// Declared type; empty for [`GenericKind::Type`].
    pub ty: String,
    /// Default expression (a type expression for [`GenericKind::Type`]).
    pub default_value: Option<String>,
    /// Value or type parameter.
    pub kind: GenericKind,
    /// SystemVerilog `localparam`; never overridden in instance maps.
    pub local: bool,
}

impl Generic {
    /// Creates a value generic.
    pub fn value(
        name: impl Into<String>,
        ty: impl Into<String>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            default_value,
            kind: GenericKind::Value,
            local: false,
        }
    }

    /// Creates a type generic.
    pub fn type_param(name: impl Into<String>, default_value: Option<String>) -> Self {
        Self {
            name: name.into(),
            ty: String::new(),
            default_value,
            kind: GenericKind::Type,
            local: false,
        }
    }

    /// The individual names this declaration introduces.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        crate::split_names(&self.name)
    }

    /// One generic per declared name, each with the shared type and default.
    pub fn expand(&self) -> impl Iterator<Item = Generic> + '_ {
        self.names().map(move |name| Generic {
            name: name.to_string(),
            ..self.clone()
        })
    }
}
