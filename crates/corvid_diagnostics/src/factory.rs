//! Construction of diagnostics with qualified message codes.

use crate::arg::Arg;
use crate::diagnostic::{Diagnostic, SourceHandle};
use crate::flags::DiagnosticFlags;
use crate::kind::DiagnosticKind;
use corvid_source::Position;

/// Builds diagnostics whose codes are qualified as `<prefix>.<kind>.<key>`.
///
/// With the default `compiler` prefix, `factory.error(src, pos, "cant.resolve", args)`
/// produces code `compiler.err.cant.resolve`.
#[derive(Clone, Debug)]
pub struct DiagnosticFactory {
    prefix: String,
}

impl DiagnosticFactory {
    /// Creates a factory for the given code prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the code prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Qualifies `key` for a diagnostic of `kind`.
    pub fn qualify(&self, kind: DiagnosticKind, key: &str) -> String {
        format!("{}.{}.{}", self.prefix, kind.key_segment(), key)
    }

    /// Creates a diagnostic of any kind.
    pub fn create(
        &self,
        kind: DiagnosticKind,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
        flags: DiagnosticFlags,
    ) -> Diagnostic {
        Diagnostic::new(kind, self.qualify(kind, key))
            .with_args(args)
            .with_source(source)
            .at(position)
            .with_flags(flags)
    }

    /// Creates an error.
    pub fn error(
        &self,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.create(DiagnosticKind::Error, source, position, key, args, DiagnosticFlags::empty())
    }

    /// Creates a warning.
    pub fn warning(
        &self,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.create(DiagnosticKind::Warning, source, position, key, args, DiagnosticFlags::empty())
    }

    /// Creates a warning that is shown even when warnings are disabled.
    pub fn mandatory_warning(
        &self,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.create(
            DiagnosticKind::Warning,
            source,
            position,
            key,
            args,
            DiagnosticFlags::MANDATORY,
        )
    }

    /// Creates a warning tagged with the lint category that enabled it.
    pub fn lint_warning(
        &self,
        category: &str,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.warning(source, position, key, args).with_lint_category(category)
    }

    /// Creates a note.
    pub fn note(
        &self,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.create(DiagnosticKind::Note, source, position, key, args, DiagnosticFlags::empty())
    }

    /// Creates a note that is shown even when warnings are disabled.
    pub fn mandatory_note(
        &self,
        source: Option<SourceHandle>,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) -> Diagnostic {
        self.create(DiagnosticKind::Note, source, position, key, args, DiagnosticFlags::MANDATORY)
    }

    /// Creates a fragment for embedding in another diagnostic.
    pub fn fragment(&self, key: &str, args: Vec<Arg>) -> Diagnostic {
        self.create(DiagnosticKind::Fragment, None, None, key, args, DiagnosticFlags::empty())
    }

    /// Wraps `parent` so that `details` are rendered below it, one per line.
    pub fn multiline(parent: Diagnostic, details: Vec<Diagnostic>) -> Diagnostic {
        parent.with_subdiagnostics(details)
    }
}

impl Default for DiagnosticFactory {
    fn default() -> Self {
        Self::new("compiler")
    }
}
