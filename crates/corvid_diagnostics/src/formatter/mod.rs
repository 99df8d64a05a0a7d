//! Rendering of diagnostics to text.
//!
//! Two formatters share the [`DiagnosticFormatter`] trait:
//! [`BasicDiagnosticFormatter`] interprets `%`-directive templates and localizes
//! messages through a [`MessageCatalog`](crate::MessageCatalog), and
//! [`RawDiagnosticFormatter`] prints codes and arguments verbatim for
//! locale-independent comparisons.

pub mod basic;
pub mod config;
pub mod pattern;
pub mod raw;

pub use basic::BasicDiagnosticFormatter;
pub use config::{
    DiagnosticParts, FormatterConfig, Indentation, MultilineLimits, SourcePosition,
    DEFAULT_CLASS_FILE_FORMAT, DEFAULT_NO_POSITION_FORMAT, DEFAULT_POSITION_FORMAT,
};
pub use pattern::{parse_pattern, Directive, Segment};
pub use raw::RawDiagnosticFormatter;

use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::messages::Locale;

/// Rendered in place of a file name or position that is not available.
pub const MISSING: &str = "-";

/// Which coordinate of a diagnostic's position to render.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PositionKind {
    /// Start offset.
    Start,
    /// End offset.
    End,
    /// Line of the preferred offset.
    Line,
    /// Tab-expanded column of the preferred offset.
    Column,
    /// Preferred offset.
    Offset,
}

/// Turns diagnostics into text for one locale.
pub trait DiagnosticFormatter: Send + Sync {
    /// Formats the complete diagnostic, including any source line.
    fn format(&self, diag: &Diagnostic, locale: &Locale) -> String;

    /// Formats only the message, with details and sub-diagnostics.
    fn format_message(&self, diag: &Diagnostic, locale: &Locale) -> String;

    /// The kind prefix, such as `error: `. Empty for fragments.
    fn format_kind(&self, diag: &Diagnostic, locale: &Locale) -> String;

    /// The configuration in effect.
    fn config(&self) -> &FormatterConfig;

    /// The name of the diagnostic's file, or `-` without a source.
    fn format_source(&self, diag: &Diagnostic, full_name: bool) -> String {
        match diag.file() {
            Some(file) if full_name => file.name(),
            Some(file) => file.simple_name(),
            None => MISSING.to_string(),
        }
    }

    /// One coordinate of the diagnostic's position, or `-` if it cannot be resolved.
    fn format_position(&self, diag: &Diagnostic, kind: PositionKind) -> String {
        let value = match kind {
            PositionKind::Start => diag.start_offset(),
            PositionKind::End => diag.end_offset(),
            PositionKind::Offset => diag.offset(),
            PositionKind::Line => diag.line_number(),
            PositionKind::Column => diag.column_number(),
        };
        value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
    }

    /// Whether the source line is appended to `diag`.
    fn display_source(&self, diag: &Diagnostic) -> bool {
        self.config().is_visible(DiagnosticParts::SOURCE)
            && diag.kind() != DiagnosticKind::Fragment
            && diag.position().is_some()
    }

    /// Whether output is locale-independent.
    fn is_raw(&self) -> bool {
        false
    }
}

/// Prefixes every line of `text` with `width` spaces.
pub(crate) fn indent(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let pad = " ".repeat(width);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The source line of `diag` followed, if enabled, by a caret under its column.
///
/// The caret line repeats the tabs of the source line so that the caret lines up
/// whatever the terminal's tab width. Returns `None` when the line cannot be read.
pub(crate) fn source_line(diag: &Diagnostic, config: &FormatterConfig) -> Option<String> {
    let source = diag.source()?;
    let offset = diag.offset()?;
    let line = source.line(offset)?;
    let mut out = indent(&line, config.indentation.source);
    if config.caret {
        if let Some(column) = source.column_number(offset, false) {
            let mut chars = line.chars();
            let mut caret: String = (1..column)
                .map(|_| match chars.next() {
                    Some('\t') => '\t',
                    _ => ' ',
                })
                .collect();
            caret.push('^');
            out.push('\n');
            out.push_str(&indent(&caret, config.indentation.source));
        }
    }
    Some(out)
}

/// The sub-diagnostics of `diag` rendered at nesting `depth`, after limits.
pub(crate) fn visible_subdiagnostics<'a>(
    diag: &'a Diagnostic,
    depth: usize,
    config: &FormatterConfig,
) -> &'a [Diagnostic] {
    if !diag.is_multiline() || !config.is_visible(DiagnosticParts::SUBDIAGNOSTICS) {
        return &[];
    }
    if config.multiline.depth.is_some_and(|max| depth >= max) {
        return &[];
    }
    let subs = diag.subdiagnostics();
    let len = config.multiline.length.map_or(subs.len(), |max| max.min(subs.len()));
    &subs[..len]
}
