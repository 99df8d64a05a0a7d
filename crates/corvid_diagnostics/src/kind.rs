//! Diagnostic kinds ordered from least to most severe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The classification of a diagnostic, deciding how the log treats it.
///
/// Ordered from least severe (`Fragment`) to most severe (`Error`), matching the
/// derived `PartialOrd`/`Ord` implementation based on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A message part embedded in another diagnostic; never reported on its own.
    Fragment,
    /// Informational output, shown only when warnings are enabled.
    Note,
    /// A potential problem that does not stop compilation.
    Warning,
    /// A definite problem that prevents successful compilation.
    Error,
}

impl DiagnosticKind {
    /// The segment inserted between prefix and key when qualifying message codes,
    /// e.g. `err` in `compiler.err.cant.resolve`.
    pub fn key_segment(self) -> &'static str {
        match self {
            DiagnosticKind::Fragment => "misc",
            DiagnosticKind::Note => "note",
            DiagnosticKind::Warning => "warn",
            DiagnosticKind::Error => "err",
        }
    }

    /// Returns `true` if this kind is [`Error`](DiagnosticKind::Error).
    pub fn is_error(self) -> bool {
        self == DiagnosticKind::Error
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::Fragment => write!(f, "fragment"),
            DiagnosticKind::Note => write!(f, "note"),
            DiagnosticKind::Warning => write!(f, "warning"),
            DiagnosticKind::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(DiagnosticKind::Fragment < DiagnosticKind::Note);
        assert!(DiagnosticKind::Note < DiagnosticKind::Warning);
        assert!(DiagnosticKind::Warning < DiagnosticKind::Error);
    }

    #[test]
    fn key_segments() {
        assert_eq!(DiagnosticKind::Error.key_segment(), "err");
        assert_eq!(DiagnosticKind::Warning.key_segment(), "warn");
        assert_eq!(DiagnosticKind::Note.key_segment(), "note");
        assert_eq!(DiagnosticKind::Fragment.key_segment(), "misc");
    }

    #[test]
    fn display_and_serde_names_agree() {
        assert_eq!(format!("{}", DiagnosticKind::Warning), "warning");
        let json = serde_json::to_string(&DiagnosticKind::Error).unwrap();
        assert_eq!(json, "\"error\"");
    }
}
