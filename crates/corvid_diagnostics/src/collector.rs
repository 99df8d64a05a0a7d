//! A listener that keeps every diagnostic it receives.

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::listener::DiagnosticListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// A thread-safe accumulator of diagnostics.
///
/// Registered as a log's listener, it captures accepted diagnostics instead of
/// letting the log print them. The error count is tracked atomically so
/// [`has_errors`](Self::has_errors) does not lock the diagnostic list.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
}

impl DiagnosticCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Stores a diagnostic.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.kind() == DiagnosticKind::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        self.lock().push(diag);
    }

    /// Returns `true` if any error has been collected.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of errors collected so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all collected diagnostics, leaving the collector empty.
    /// The error count is not reset.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// A snapshot of the collected diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// The codes of the collected diagnostics, in arrival order.
    pub fn codes(&self) -> Vec<String> {
        self.lock().iter().map(|d| d.code().to_string()).collect()
    }
}

impl DiagnosticListener for DiagnosticCollector {
    fn report(&self, diag: &Diagnostic) {
        self.emit(diag.clone());
    }
}
