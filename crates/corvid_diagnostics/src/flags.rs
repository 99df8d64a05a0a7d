//! Per-diagnostic flags that adjust reporting policy.

use bitflags::bitflags;

bitflags! {
    /// Flags attached to a [`Diagnostic`](crate::Diagnostic).
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct DiagnosticFlags: u8 {
        /// Shown even when warnings are disabled.
        const MANDATORY = 1 << 0;
        /// Reported through an API call; never suppressed as a duplicate.
        const API = 1 << 1;
        /// Reported immediately even while the log is deferring diagnostics.
        const NON_DEFERRABLE = 1 << 2;
        /// The message was simplified; the log adds a note at the end of compilation.
        const COMPRESSED = 1 << 3;
        /// Raised by the parser.
        const SYNTAX = 1 << 4;
        /// The pass that raised it can continue.
        const RECOVERABLE = 1 << 5;
    }
}
