//! Structured compiler messages with kind, code, arguments and position.

use crate::arg::Arg;
use crate::flags::DiagnosticFlags;
use crate::kind::DiagnosticKind;
use corvid_source::{DiagnosticSource, FileId, FileObject, Position};
use std::sync::Arc;

/// Shared handle to the file a diagnostic points into.
pub type SourceHandle = Arc<dyn DiagnosticSource>;

/// One compiler message.
///
/// The message text is not stored: `code` is a key into the message catalog and
/// `args` are substituted when the diagnostic is formatted. A diagnostic is built
/// with the `with_*` methods, may have flags added with
/// [`set_flag`](Self::set_flag), and is immutable once handed to the log.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    code: String,
    args: Vec<Arg>,
    source: Option<SourceHandle>,
    position: Option<Position>,
    subdiagnostics: Vec<Diagnostic>,
    multiline: bool,
    flags: DiagnosticFlags,
    lint_category: Option<String>,
}

impl Diagnostic {
    /// Creates a diagnostic with no arguments, source or position.
    pub fn new(kind: DiagnosticKind, code: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            args: Vec::new(),
            source: None,
            position: None,
            subdiagnostics: Vec::new(),
            multiline: false,
            flags: DiagnosticFlags::empty(),
            lint_category: None,
        }
    }

    /// Sets the message arguments.
    pub fn with_args(mut self, args: Vec<Arg>) -> Self {
        self.args = args;
        self
    }

    /// Sets the originating file.
    pub fn with_source(mut self, source: Option<SourceHandle>) -> Self {
        self.source = source;
        self
    }

    /// Sets the position within the originating file.
    pub fn at(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }

    /// Adds flags.
    pub fn with_flags(mut self, flags: DiagnosticFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Tags a warning with the lint category that enabled it.
    pub fn with_lint_category(mut self, category: impl Into<String>) -> Self {
        self.lint_category = Some(category.into());
        self
    }

    /// Attaches detail diagnostics, rendered one per line below the message.
    pub fn with_subdiagnostics(mut self, subdiagnostics: Vec<Diagnostic>) -> Self {
        self.subdiagnostics = subdiagnostics;
        self.multiline = true;
        self
    }

    /// Adds a flag before the diagnostic is reported.
    pub fn set_flag(&mut self, flag: DiagnosticFlags) {
        self.flags |= flag;
    }

    /// The diagnostic kind.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// The message key.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The message arguments.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// The originating file, if any.
    pub fn source(&self) -> Option<&SourceHandle> {
        self.source.as_ref()
    }

    /// The file handle of the originating file, if any.
    pub fn file(&self) -> Option<&FileObject> {
        self.source.as_ref().map(|s| s.file())
    }

    /// The position, if any.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// The preferred offset.
    pub fn offset(&self) -> Option<u32> {
        self.position.map(|p| p.point)
    }

    /// The start offset.
    pub fn start_offset(&self) -> Option<u32> {
        self.position.map(|p| p.start)
    }

    /// The end offset.
    pub fn end_offset(&self) -> Option<u32> {
        self.position.map(|p| p.end)
    }

    /// The line of the preferred offset, if it can be resolved.
    pub fn line_number(&self) -> Option<u32> {
        self.source.as_ref()?.line_number(self.offset()?)
    }

    /// The tab-expanded column of the preferred offset, if it can be resolved.
    pub fn column_number(&self) -> Option<u32> {
        self.source.as_ref()?.column_number(self.offset()?, true)
    }

    /// Detail diagnostics.
    pub fn subdiagnostics(&self) -> &[Diagnostic] {
        &self.subdiagnostics
    }

    /// Whether detail diagnostics are rendered.
    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// All flags.
    pub fn flags(&self) -> DiagnosticFlags {
        self.flags
    }

    /// Returns `true` if every bit of `flag` is set.
    pub fn is_flag_set(&self, flag: DiagnosticFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Whether the diagnostic bypasses disabled warnings.
    pub fn is_mandatory(&self) -> bool {
        self.is_flag_set(DiagnosticFlags::MANDATORY)
    }

    /// The lint category, if any.
    pub fn lint_category(&self) -> Option<&str> {
        self.lint_category.as_deref()
    }

    /// The (file, offset) pair that duplicate suppression keys on. Diagnostics
    /// without a file or a position have none and are never duplicates.
    pub fn dedup_key(&self) -> Option<(FileId, u32)> {
        Some((self.file()?.id(), self.offset()?))
    }
}
