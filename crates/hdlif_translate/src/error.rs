//! Translation failures.

use hdlif_ir::Mode;

/// A mode or type with no counterpart in the target dialect.
///
/// The translated record still gets a value: [`fallback`](Self::fallback).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// No mode keyword maps to this one.
    #[error("could not convert port mode '{mode}'")]
    UnmappedMode {
        /// The mode keyword as written in the source dialect.
        mode: String,
    },

    /// The base type is not in the translation table.
    #[error("could not convert type '{ty}'")]
    UnmappedType {
        /// The full source type.
        ty: String,
        /// `ERR` followed by the translated packed suffix.
        fallback: String,
    },
}

impl TranslateError {
    /// The text to print in place of the unmapped mode or type.
    pub fn fallback(&self) -> &str {
        match self {
            TranslateError::UnmappedMode { .. } => Mode::SENTINEL,
            TranslateError::UnmappedType { fallback, .. } => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallbacks() {
        let mode = TranslateError::UnmappedMode { mode: "buffer".into() };
        assert_eq!(mode.fallback(), "ERR");
        assert_eq!(mode.to_string(), "could not convert port mode 'buffer'");

        let ty = TranslateError::UnmappedType {
            ty: "real".into(),
            fallback: "ERR".into(),
        };
        assert_eq!(ty.fallback(), "ERR");
        assert_eq!(ty.to_string(), "could not convert type 'real'");
    }
}
