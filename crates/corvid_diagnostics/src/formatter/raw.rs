//! Locale-independent output for comparing diagnostics in tests.

use super::config::FormatterConfig;
use super::{source_line, visible_subdiagnostics, DiagnosticFormatter, PositionKind};
use crate::arg::Arg;
use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::messages::Locale;
use corvid_source::FileKind;

/// Prints message codes and arguments instead of localized text.
///
/// ```text
/// Test.java:10:5: compiler.err.cant.resolve: foo
/// ```
#[derive(Clone, Debug)]
pub struct RawDiagnosticFormatter {
    config: FormatterConfig,
}

impl RawDiagnosticFormatter {
    /// Creates a raw formatter that does not print source lines.
    pub fn new() -> Self {
        Self::with_config(FormatterConfig::raw())
    }

    /// Creates a raw formatter with the given configuration. Only the visible
    /// parts, multiline limits and caret setting are consulted.
    pub fn with_config(config: FormatterConfig) -> Self {
        Self { config }
    }

    fn message_at(&self, diag: &Diagnostic, depth: usize) -> String {
        let mut out = diag.code().to_string();
        let args: Vec<String> = diag
            .args()
            .iter()
            .map(|arg| self.format_argument(arg, depth))
            .collect();
        if !args.is_empty() {
            out.push_str(": ");
            out.push_str(&args.join(", "));
        }
        let subs = visible_subdiagnostics(diag, depth, &self.config);
        if !subs.is_empty() {
            let rendered: Vec<String> = subs
                .iter()
                .map(|sub| format!("({})", self.message_at(sub, depth + 1)))
                .collect();
            out.push_str(",{");
            out.push_str(&rendered.join(","));
            out.push('}');
        }
        out
    }

    fn format_argument(&self, arg: &Arg, depth: usize) -> String {
        match arg {
            Arg::Nested(nested) => format!("({})", self.message_at(nested, depth + 1)),
            Arg::Sequence(items) => items
                .iter()
                .map(|item| self.format_argument(item, depth))
                .collect::<Vec<_>>()
                .join(","),
            Arg::SourceRef(file) => file.simple_name(),
            Arg::Localizable(value) => value.raw(),
            Arg::Plain(text) => text.clone(),
        }
    }
}

impl Default for RawDiagnosticFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticFormatter for RawDiagnosticFormatter {
    fn format(&self, diag: &Diagnostic, _locale: &Locale) -> String {
        let mut out = if diag.position().is_some() {
            format!(
                "{}:{}:{}:",
                self.format_source(diag, false),
                self.format_position(diag, PositionKind::Line),
                self.format_position(diag, PositionKind::Column)
            )
        } else {
            match diag.file() {
                Some(file) if file.kind() == FileKind::Class => {
                    format!("{}:-:-:", file.simple_name())
                }
                _ => "-".to_string(),
            }
        };
        out.push(' ');
        out.push_str(&self.message_at(diag, 0));
        if self.display_source(diag) {
            if let Some(line) = source_line(diag, &self.config) {
                out.push('\n');
                out.push_str(&line);
            }
        }
        out
    }

    fn format_message(&self, diag: &Diagnostic, _locale: &Locale) -> String {
        self.message_at(diag, 0)
    }

    fn format_kind(&self, diag: &Diagnostic, _locale: &Locale) -> String {
        match diag.kind() {
            DiagnosticKind::Fragment => String::new(),
            DiagnosticKind::Note => "compiler.note.note".to_string(),
            DiagnosticKind::Warning => "compiler.warn.warning".to_string(),
            DiagnosticKind::Error => "compiler.err.error".to_string(),
        }
    }

    fn config(&self) -> &FormatterConfig {
        &self.config
    }

    fn is_raw(&self) -> bool {
        true
    }
}
