//! Thread-safe diagnostic accumulator shared by parsers, printers and the translator.

use crate::code::DiagnosticCode;
use crate::diagnostic::Diagnostic;
use crate::severity::Severity;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A thread-safe accumulator for diagnostics.
///
/// Multiple threads can emit diagnostics concurrently via [`emit`](Self::emit).
/// The error count is tracked atomically for fast `has_errors` checks without
/// locking the diagnostic vector.
///
/// Trace output is opt-in: [`trace`](Self::trace) only records a note when the
/// sink was created with tracing enabled.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
    trace: bool,
}

impl DiagnosticSink {
    /// Creates a new empty diagnostic sink with tracing disabled.
    pub fn new() -> Self {
        Self::with_trace(false)
    }

    /// Creates a new empty diagnostic sink, recording trace notes if `trace` is set.
    pub fn with_trace(trace: bool) -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
            trace,
        }
    }

    /// Emits a diagnostic into the sink.
    ///
    /// If the diagnostic has [`Severity::Error`], the error count is incremented atomically.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity == Severity::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Returns `true` if trace notes are recorded.
    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Records a trace note when tracing is enabled.
    ///
    /// The message is built lazily so disabled tracing costs nothing.
    pub fn trace(&self, message: impl FnOnce() -> String) {
        if self.trace {
            self.emit(Diagnostic::note(DiagnosticCode::TRACE, message()));
        }
    }

    /// Returns `true` if any error-severity diagnostics have been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity diagnostics emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated diagnostics, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Returns a snapshot of all accumulated diagnostics without draining.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_error() -> Diagnostic {
        Diagnostic::error(DiagnosticCode::NO_INTERFACE, "test error")
    }

    fn make_warning() -> Diagnostic {
        Diagnostic::warning(DiagnosticCode::PORT_FRAGMENT, "test warning")
    }

    #[test]
    fn empty_sink() {
        let sink = DiagnosticSink::new();
        assert!(!sink.has_errors());
        assert_eq!(sink.error_count(), 0);
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn emit_error() {
        let sink = DiagnosticSink::new();
        sink.emit(make_error());
        assert!(sink.has_errors());
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn emit_warning_not_error() {
        let sink = DiagnosticSink::new();
        sink.emit(make_warning());
        assert!(!sink.has_errors());
        assert_eq!(sink.diagnostics().len(), 1);
    }

    #[test]
    fn take_all_drains() {
        let sink = DiagnosticSink::new();
        sink.emit(make_error());
        sink.emit(make_warning());
        assert_eq!(sink.take_all().len(), 2);
        assert!(sink.take_all().is_empty());
        // the counter survives draining
        assert_eq!(sink.error_count(), 1);
    }

    #[test]
    fn trace_disabled_records_nothing() {
        let sink = DiagnosticSink::new();
        sink.trace(|| panic!("message built while tracing is off"));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn trace_enabled_records_note() {
        let sink = DiagnosticSink::with_trace(true);
        sink.trace(|| "port name: a".to_string());
        let all = sink.take_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].severity, Severity::Note);
        assert_eq!(all[0].code, DiagnosticCode::TRACE);
        assert!(!sink.has_errors());
    }

    #[test]
    fn thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let sink = Arc::new(DiagnosticSink::new());
        let mut handles = Vec::new();

        for _ in 0..10 {
            let sink = Arc::clone(&sink);
            handles.push(thread::spawn(move || {
                for _ in 0..100 {
                    sink.emit(make_error());
                }
            }));
        }

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(sink.error_count(), 1000);
        assert_eq!(sink.diagnostics().len(), 1000);
    }
}
