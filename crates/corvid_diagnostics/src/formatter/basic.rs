//! The template-driven, localized formatter used for normal compiler output.

use super::config::{DiagnosticParts, FormatterConfig, SourcePosition};
use super::pattern::{parse_pattern, Directive, Segment};
use super::{indent, source_line, visible_subdiagnostics, DiagnosticFormatter, PositionKind};
use crate::arg::Arg;
use crate::diagnostic::Diagnostic;
use crate::kind::DiagnosticKind;
use crate::messages::{Locale, MessageCatalog};
use corvid_source::FileKind;
use std::sync::Arc;

/// Formats diagnostics through `%`-directive templates.
///
/// Produces output like:
/// ```text
/// Test.java:10: error: cannot find symbol: foo
///     foo();
///     ^
/// ```
///
/// One of three templates is chosen per diagnostic: the position template when the
/// diagnostic has a source and a position, the class-file template when it has no
/// position but its source is a class file, and the no-position template otherwise.
#[derive(Debug)]
pub struct BasicDiagnosticFormatter {
    messages: Arc<MessageCatalog>,
    config: FormatterConfig,
}

impl BasicDiagnosticFormatter {
    /// Creates a formatter with the default configuration.
    pub fn new(messages: Arc<MessageCatalog>) -> Self {
        Self::with_config(messages, FormatterConfig::default())
    }

    /// Creates a formatter with the given configuration.
    pub fn with_config(messages: Arc<MessageCatalog>, config: FormatterConfig) -> Self {
        Self { messages, config }
    }

    /// The catalog messages are resolved through.
    pub fn messages(&self) -> &Arc<MessageCatalog> {
        &self.messages
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut FormatterConfig {
        &mut self.config
    }

    /// The template used for `diag`.
    pub fn select_template(&self, diag: &Diagnostic) -> &str {
        match (diag.source(), diag.position()) {
            (Some(_), Some(_)) => self.config.position_format.as_str(),
            (Some(source), None) if source.file().kind() == FileKind::Class => {
                self.config.class_file_format.as_str()
            }
            _ => self.config.no_position_format.as_str(),
        }
    }

    fn expand(&self, directive: Directive, diag: &Diagnostic, locale: &Locale) -> String {
        match directive {
            Directive::BaseName => self.format_source(diag, false),
            Directive::FullName => self.format_source(diag, true),
            Directive::Line => self.format_position(diag, PositionKind::Line),
            Directive::Column => self.format_position(diag, PositionKind::Column),
            Directive::Offset => self.format_position(diag, PositionKind::Offset),
            Directive::Start => self.format_position(diag, PositionKind::Start),
            Directive::End => self.format_position(diag, PositionKind::End),
            Directive::Prefix => self.format_kind(diag, locale),
            Directive::ConditionalPrefix => {
                if diag.kind() == DiagnosticKind::Error && diag.position().is_none() {
                    String::new()
                } else {
                    self.format_kind(diag, locale)
                }
            }
            Directive::Message => self.message_at(diag, locale, 0),
            Directive::LintCategory => diag
                .lint_category()
                .map(|c| format!("[{c}] "))
                .unwrap_or_default(),
            Directive::Space => " ".to_string(),
            Directive::Percent => "%".to_string(),
        }
    }

    fn message_at(&self, diag: &Diagnostic, locale: &Locale, depth: usize) -> String {
        let args: Vec<String> = diag
            .args()
            .iter()
            .map(|arg| self.format_argument(arg, locale, depth))
            .collect();
        let text = self.messages.resolve(locale, diag.code(), &args);
        let mut lines = text.split('\n');

        let mut out = String::new();
        let mut current = 0;
        if self.config.is_visible(DiagnosticParts::SUMMARY) {
            current = self.config.indentation.summary;
            out.push_str(&indent(lines.next().unwrap_or_default(), current));
        } else {
            lines.next();
        }
        if self.config.is_visible(DiagnosticParts::DETAILS) {
            let width = current + self.config.indentation.details;
            for line in lines {
                out.push('\n');
                out.push_str(&indent(line, width));
            }
        }
        let width = current + self.config.indentation.subdiagnostics;
        for sub in visible_subdiagnostics(diag, depth, &self.config) {
            out.push('\n');
            out.push_str(&indent(&self.message_at(sub, locale, depth + 1), width));
        }
        out
    }

    fn format_argument(&self, arg: &Arg, locale: &Locale, depth: usize) -> String {
        match arg {
            Arg::Nested(nested) => self.message_at(nested, locale, depth + 1),
            Arg::Sequence(items) => items
                .iter()
                .map(|item| self.format_argument(item, locale, depth))
                .collect::<Vec<_>>()
                .join(","),
            Arg::SourceRef(file) if self.config.full_paths => file.name(),
            Arg::SourceRef(file) => file.simple_name(),
            Arg::Localizable(value) => value.localize(locale, &self.messages),
            Arg::Plain(text) => text.clone(),
        }
    }

    fn add_source_line(&self, diag: &Diagnostic, message: String) -> String {
        let Some(line) = source_line(diag, &self.config) else {
            return message;
        };
        match self.config.source_position {
            SourcePosition::AfterSummary if message.contains('\n') => {
                message.replacen('\n', &format!("\n{line}\n"), 1)
            }
            _ => format!("{message}\n{line}"),
        }
    }
}

impl DiagnosticFormatter for BasicDiagnosticFormatter {
    fn format(&self, diag: &Diagnostic, locale: &Locale) -> String {
        let mut out = String::new();
        for segment in parse_pattern(self.select_template(diag)) {
            match segment {
                Segment::Literal(c) | Segment::Unknown(c) => out.push(c),
                Segment::Directive(d) => out.push_str(&self.expand(d, diag, locale)),
            }
        }
        if self.display_source(diag) {
            out = self.add_source_line(diag, out);
        }
        out
    }

    fn format_message(&self, diag: &Diagnostic, locale: &Locale) -> String {
        self.message_at(diag, locale, 0)
    }

    fn format_kind(&self, diag: &Diagnostic, locale: &Locale) -> String {
        let key = match diag.kind() {
            DiagnosticKind::Fragment => return String::new(),
            DiagnosticKind::Note => "compiler.note.note",
            DiagnosticKind::Warning => "compiler.warn.warning",
            DiagnosticKind::Error => "compiler.err.error",
        };
        self.messages.resolve(locale, key, &[])
    }

    fn config(&self) -> &FormatterConfig {
        &self.config
    }
}
