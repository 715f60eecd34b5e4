//! Common result and error types for the hdlif crates.

/// The standard result type for fallible internal operations.
///
/// `Ok` contains the result value (which may be partial after error recovery).
/// `Err` indicates an unrecoverable internal error (a bug in hdlif), not a
/// user-facing error. Malformed HDL text is reported through
/// [`DiagnosticSink`](hdlif_diagnostics) and the operation still returns `Ok`.
pub type HdlifResult<T> = Result<T, InternalError>;

/// An internal error indicating a bug in hdlif, not a user input problem.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("scanner lost its place");
        assert_eq!(format!("{err}"), "internal error: scanner lost its place");
    }

    #[test]
    fn err_path() {
        let r: HdlifResult<i32> = Err(InternalError::new("test error"));
        let err = r.err().unwrap();
        assert_eq!(err.message, "test error");
    }

    #[test]
    fn from_string() {
        let err: InternalError = "from string".to_string().into();
        assert_eq!(err.message, "from string");
    }
}
