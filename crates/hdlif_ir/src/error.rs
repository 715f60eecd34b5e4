//! Errors for single port or generic declarations.

/// Why one declaration fragment could not be turned into a record.
///
/// The aggregators turn these into diagnostics and drop the fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    /// The fragment was empty after trimming.
    #[error("empty declaration")]
    Empty,

    /// No declared name could be found.
    #[error("no name in '{0}'")]
    MissingName(String),

    /// The declared name is not an identifier.
    #[error("'{0}' is not an identifier")]
    InvalidName(String),

    /// A parameter without the `parameter` or `localparam` keyword.
    #[error("expected 'parameter' or 'localparam' in '{0}'")]
    MissingKeyword(String),

    /// A parameter without `= default`.
    #[error("parameter '{0}' has no default value")]
    MissingDefault(String),

    /// A VHDL declaration without the `:` separator.
    #[error("expected ':' in '{0}'")]
    MissingColon(String),

    /// A VHDL declaration without a type after the mode.
    #[error("no type in '{0}'")]
    MissingType(String),
}

impl FragmentError {
    /// A fix to offer alongside the diagnostic.
    pub fn suggestion(&self) -> &'static str {
        match self {
            FragmentError::Empty => "remove the stray separator",
            FragmentError::MissingName(_) => "add a name after the type",
            FragmentError::InvalidName(_) => "names start with a letter or underscore",
            FragmentError::MissingKeyword(_) => {
                "start the declaration with 'parameter' or 'localparam'"
            }
            FragmentError::MissingDefault(_) => "add '= value' after the name",
            FragmentError::MissingColon(_) => "separate the names from the type with ':'",
            FragmentError::MissingType(_) => "add a type after the mode",
        }
    }
}
