//! Interception of reported diagnostics.

use crate::diagnostic::Diagnostic;

/// Receives every diagnostic the log accepts, in place of formatting and printing.
pub trait DiagnosticListener: Send + Sync {
    /// Called once per accepted diagnostic.
    fn report(&self, diag: &Diagnostic);
}

impl<F> DiagnosticListener for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn report(&self, diag: &Diagnostic) {
        self(diag)
    }
}
