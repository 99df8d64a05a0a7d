//! The reporting façade that applies policy to diagnostics and routes them.
//!
//! [`Log::report`] classifies each diagnostic by kind:
//!
//! * notes are shown when warnings are enabled (or the note is mandatory), unless
//!   notes are suppressed;
//! * warnings likewise, up to `max_warnings`;
//! * errors unless another error was already reported at the same file and offset,
//!   up to `max_errors`;
//! * fragments are never reported on their own.
//!
//! Accepted diagnostics go to the registered [`DiagnosticListener`] if there is
//! one, and are otherwise formatted and written to the stream for their kind.

use crate::arg::Arg;
use crate::diagnostic::{Diagnostic, SourceHandle};
use crate::factory::DiagnosticFactory;
use crate::flags::DiagnosticFlags;
use crate::formatter::{BasicDiagnosticFormatter, DiagnosticFormatter};
use crate::kind::DiagnosticKind;
use crate::listener::DiagnosticListener;
use crate::messages::MessageCatalog;
use crate::writer::{LogWriters, WriterKind};
use corvid_source::{FileId, Position};
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Reporting policy.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LogOptions {
    /// Errors written before further errors are dropped.
    pub max_errors: usize,
    /// Warnings written before further warnings are dropped.
    pub max_warnings: usize,
    /// Whether non-mandatory warnings and notes are shown.
    pub warnings_enabled: bool,
    /// Whether notes are dropped even when warnings are shown.
    pub suppress_notes: bool,
    /// Whether every error is shown, even at an already reported position.
    pub report_all: bool,
    /// Whether the mandatory flag overrides disabled warnings.
    pub enforce_mandatory: bool,
    /// Whether the user is asked to resume or abort after each error.
    pub prompt_on_error: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            max_errors: 100,
            max_warnings: 100,
            warnings_enabled: true,
            suppress_notes: false,
            report_all: false,
            enforce_mandatory: true,
            prompt_on_error: false,
        }
    }
}

/// Answer to the resume/abort prompt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PromptResponse {
    /// Continue compiling.
    Resume,
    /// Stop; the caller decides how.
    Abort,
}

/// Asks the user whether to continue after an error.
pub trait ErrorPrompt: Send {
    /// Shows `question` and waits for an answer.
    fn ask(&mut self, question: &str) -> PromptResponse;
}

/// Prompts on standard error and reads the answer from standard input.
///
/// An answer starting with `a` aborts; anything else, including end of input,
/// resumes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinPrompt;

impl ErrorPrompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> PromptResponse {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "{question}");
        let _ = stderr.flush();
        let mut answer = String::new();
        if let Err(e) = io::stdin().lock().read_line(&mut answer) {
            log::debug!("failed to read prompt answer: {e}");
        }
        parse_response(&answer)
    }
}

fn parse_response(answer: &str) -> PromptResponse {
    match answer.trim_start().chars().next() {
        Some('a' | 'A') => PromptResponse::Abort,
        _ => PromptResponse::Resume,
    }
}

enum HandlerFrame {
    Deferred(Vec<Diagnostic>),
    Discard,
}

/// Collects, filters and prints the diagnostics of one compilation.
///
/// A log is owned by a single compilation context and is not shared between
/// threads; every counter is a plain field.
pub struct Log {
    options: LogOptions,
    messages: Arc<MessageCatalog>,
    formatter: Box<dyn DiagnosticFormatter>,
    factory: DiagnosticFactory,
    writers: LogWriters,
    listener: Option<Arc<dyn DiagnosticListener>>,
    prompt: Box<dyn ErrorPrompt>,
    handlers: Vec<HandlerFrame>,
    source: Option<SourceHandle>,
    recorded: HashSet<(FileId, u32)>,
    nerrors: usize,
    nwarnings: usize,
    nsuppressed_errors: usize,
    nsuppressed_warnings: usize,
    compressed_output: bool,
    abort_requested: bool,
}

impl Log {
    /// Creates a log.
    pub fn new(
        messages: Arc<MessageCatalog>,
        options: LogOptions,
        formatter: Box<dyn DiagnosticFormatter>,
        writers: LogWriters,
    ) -> Self {
        Self {
            options,
            messages,
            formatter,
            factory: DiagnosticFactory::default(),
            writers,
            listener: None,
            prompt: Box::new(StdinPrompt),
            handlers: Vec::new(),
            source: None,
            recorded: HashSet::new(),
            nerrors: 0,
            nwarnings: 0,
            nsuppressed_errors: 0,
            nsuppressed_warnings: 0,
            compressed_output: false,
            abort_requested: false,
        }
    }

    /// A log with default options and the basic formatter, writing to standard error.
    pub fn with_defaults(messages: Arc<MessageCatalog>) -> Self {
        let formatter = Box::new(BasicDiagnosticFormatter::new(Arc::clone(&messages)));
        Self::new(messages, LogOptions::default(), formatter, LogWriters::stderr())
    }

    /// Routes accepted diagnostics to `listener` instead of the writers.
    pub fn set_listener(&mut self, listener: Arc<dyn DiagnosticListener>) {
        self.listener = Some(listener);
    }

    /// Removes the listener, if any.
    pub fn clear_listener(&mut self) -> Option<Arc<dyn DiagnosticListener>> {
        self.listener.take()
    }

    /// Returns `true` if a listener is registered.
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Replaces the resume/abort prompt.
    pub fn set_prompt(&mut self, prompt: Box<dyn ErrorPrompt>) {
        self.prompt = prompt;
    }

    /// Replaces the formatter.
    pub fn set_formatter(&mut self, formatter: Box<dyn DiagnosticFormatter>) {
        self.formatter = formatter;
    }

    /// The formatter in use.
    pub fn formatter(&self) -> &dyn DiagnosticFormatter {
        &*self.formatter
    }

    /// The factory used by the convenience reporting methods.
    pub fn factory(&self) -> &DiagnosticFactory {
        &self.factory
    }

    /// The reporting policy.
    pub fn options(&self) -> &LogOptions {
        &self.options
    }

    /// Mutable access to the reporting policy.
    pub fn options_mut(&mut self) -> &mut LogOptions {
        &mut self.options
    }

    /// The message catalog.
    pub fn messages(&self) -> &Arc<MessageCatalog> {
        &self.messages
    }

    /// Makes `source` the file that convenience methods report against, returning
    /// the previous one so the caller can restore it.
    pub fn use_source(&mut self, source: Option<SourceHandle>) -> Option<SourceHandle> {
        std::mem::replace(&mut self.source, source)
    }

    /// The file convenience methods report against.
    pub fn current_source(&self) -> Option<&SourceHandle> {
        self.source.as_ref()
    }

    /// Reports an error in the current source.
    pub fn error(&mut self, position: Option<Position>, key: &str, args: Vec<Arg>) {
        let diag = self.factory.error(self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Reports an error with extra flags in the current source.
    pub fn error_with_flags(
        &mut self,
        flags: DiagnosticFlags,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) {
        let diag = self.factory.error(self.source.clone(), position, key, args).with_flags(flags);
        self.report(diag);
    }

    /// Reports a warning in the current source.
    pub fn warning(&mut self, position: Option<Position>, key: &str, args: Vec<Arg>) {
        let diag = self.factory.warning(self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Reports a warning that is shown even when warnings are disabled.
    pub fn mandatory_warning(&mut self, position: Option<Position>, key: &str, args: Vec<Arg>) {
        let diag = self
            .factory
            .mandatory_warning(self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Reports a warning of lint category `category`.
    pub fn lint_warning(
        &mut self,
        category: &str,
        position: Option<Position>,
        key: &str,
        args: Vec<Arg>,
    ) {
        let diag = self
            .factory
            .lint_warning(category, self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Reports a note in the current source.
    pub fn note(&mut self, position: Option<Position>, key: &str, args: Vec<Arg>) {
        let diag = self.factory.note(self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Reports a note that is shown even when warnings are disabled.
    pub fn mandatory_note(&mut self, position: Option<Position>, key: &str, args: Vec<Arg>) {
        let diag = self
            .factory
            .mandatory_note(self.source.clone(), position, key, args);
        self.report(diag);
    }

    /// Holds back every deferrable diagnostic until the matching
    /// [`pop_handler`](Self::pop_handler).
    pub fn push_deferred(&mut self) {
        self.handlers.push(HandlerFrame::Deferred(Vec::new()));
    }

    /// Drops every deferrable diagnostic until the matching
    /// [`pop_handler`](Self::pop_handler).
    pub fn push_discard(&mut self) {
        self.handlers.push(HandlerFrame::Discard);
    }

    /// Ends the innermost deferral or discard, returning what it held back.
    ///
    /// # Panics
    ///
    /// Panics if no handler is active.
    pub fn pop_handler(&mut self) -> Vec<Diagnostic> {
        match self.handlers.pop() {
            Some(HandlerFrame::Deferred(held)) => held,
            Some(HandlerFrame::Discard) => Vec::new(),
            None => panic!("pop_handler called with no active handler"),
        }
    }

    /// Reports diagnostics previously held back by a deferral.
    pub fn report_deferred(&mut self, diagnostics: Vec<Diagnostic>) {
        for diag in diagnostics {
            self.report(diag);
        }
    }

    /// Applies reporting policy to `diag` and emits it if accepted.
    ///
    /// # Panics
    ///
    /// Panics if `diag` is a fragment.
    pub fn report(&mut self, diag: Diagnostic) {
        if diag.kind() == DiagnosticKind::Fragment {
            panic!("fragment {} cannot be reported on its own", diag.code());
        }
        if !diag.is_flag_set(DiagnosticFlags::NON_DEFERRABLE) {
            match self.handlers.last_mut() {
                Some(HandlerFrame::Deferred(held)) => {
                    log::trace!("deferring {}", diag.code());
                    held.push(diag);
                    return;
                }
                Some(HandlerFrame::Discard) => {
                    log::trace!("discarding {}", diag.code());
                    return;
                }
                None => {}
            }
        }

        if diag.is_flag_set(DiagnosticFlags::COMPRESSED) {
            self.compressed_output = true;
        }
        let mandatory = self.options.enforce_mandatory && diag.is_mandatory();
        let shown = self.options.warnings_enabled || mandatory;

        match diag.kind() {
            DiagnosticKind::Fragment => unreachable!("fragments are rejected above"),
            DiagnosticKind::Note => {
                if shown && !self.options.suppress_notes {
                    self.write_diagnostic(&diag);
                } else {
                    log::trace!("note {} suppressed", diag.code());
                }
            }
            DiagnosticKind::Warning => {
                if !shown {
                    log::trace!("warning {} suppressed", diag.code());
                } else if self.nwarnings < self.options.max_warnings {
                    self.write_diagnostic(&diag);
                    self.nwarnings += 1;
                } else {
                    log::trace!("warning {} over the limit", diag.code());
                    self.nsuppressed_warnings += 1;
                }
            }
            DiagnosticKind::Error => {
                if !diag.is_flag_set(DiagnosticFlags::API) && !self.should_report(&diag) {
                    log::trace!("error {} duplicates an earlier one", diag.code());
                } else if self.nerrors < self.options.max_errors {
                    self.write_diagnostic(&diag);
                    self.nerrors += 1;
                } else {
                    log::trace!("error {} over the limit", diag.code());
                    self.nsuppressed_errors += 1;
                }
            }
        }
    }

    /// Records the position of `diag`, returning `false` if it was seen before.
    fn should_report(&mut self, diag: &Diagnostic) -> bool {
        if self.options.report_all {
            return true;
        }
        match diag.dedup_key() {
            Some(key) => self.recorded.insert(key),
            None => true,
        }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) {
        if let Some(listener) = &self.listener {
            listener.report(diag);
            return;
        }
        let locale = self.messages.current_locale();
        let text = self.formatter.format(diag, &locale);
        self.print_raw_lines(WriterKind::for_kind(diag.kind()), &text);

        if self.options.prompt_on_error && diag.kind() == DiagnosticKind::Error {
            self.ask_resume();
        }
    }

    fn ask_resume(&mut self) {
        self.flush();
        let question = self.messages.localize("compiler.misc.resume.abort", &[]);
        if self.prompt.ask(&question) == PromptResponse::Abort {
            log::debug!("abort requested at error prompt");
            self.abort_requested = true;
        }
    }

    /// Writes `text` to the `kind` stream, terminating its last line.
    pub fn print_raw_lines(&mut self, kind: WriterKind, text: &str) {
        if text.is_empty() {
            return;
        }
        let writer = self.writers.get(kind);
        let mut result = writer.write_all(text.as_bytes());
        if result.is_ok() && !text.ends_with('\n') {
            result = writer.write_all(b"\n");
        }
        if let Err(e) = result {
            log::debug!("failed to write to {kind:?} stream: {e}");
        }
    }

    /// Localizes `key` with `args` and writes it to the `kind` stream.
    pub fn print_lines(&mut self, kind: WriterKind, key: &str, args: &[String]) {
        let text = self.messages.localize(key, args);
        self.print_raw_lines(kind, &text);
    }

    /// Writes the end-of-compilation summary: the compressed-output note if any
    /// diagnostic was simplified, the error and warning counts, and a notice for
    /// each kind that went over its limit. Flushes every stream afterwards.
    pub fn print_summary(&mut self) {
        if std::mem::take(&mut self.compressed_output) {
            let note = self
                .factory
                .mandatory_note(None, None, "compressed.diags", Vec::new())
                .with_flags(DiagnosticFlags::NON_DEFERRABLE);
            self.report(note);
        }
        self.print_count(WriterKind::Error, "error", self.nerrors, self.nsuppressed_errors);
        self.print_count(WriterKind::Warning, "warn", self.nwarnings, self.nsuppressed_warnings);
        self.flush();
    }

    fn print_count(&mut self, kind: WriterKind, name: &str, shown: usize, suppressed: usize) {
        if shown == 0 && suppressed == 0 {
            return;
        }
        let key = if shown == 1 {
            format!("compiler.misc.count.{name}")
        } else {
            format!("compiler.misc.count.{name}.plural")
        };
        self.print_lines(kind, &key, &[shown.to_string()]);
        if suppressed > 0 {
            let total = shown + suppressed;
            self.print_lines(
                kind,
                &format!("compiler.misc.count.{name}.recompile"),
                &[shown.to_string(), total.to_string()],
            );
        }
    }

    /// Flushes every stream. Failures are traced and otherwise ignored.
    pub fn flush(&mut self) {
        if let Err(e) = self.writers.flush_all() {
            log::debug!("failed to flush diagnostic streams: {e}");
        }
    }

    /// Errors written so far.
    pub fn error_count(&self) -> usize {
        self.nerrors
    }

    /// Warnings written so far.
    pub fn warning_count(&self) -> usize {
        self.nwarnings
    }

    /// Errors dropped because `max_errors` was reached.
    pub fn suppressed_errors(&self) -> usize {
        self.nsuppressed_errors
    }

    /// Warnings dropped because `max_warnings` was reached.
    pub fn suppressed_warnings(&self) -> usize {
        self.nsuppressed_warnings
    }

    /// Returns `true` if any error was written.
    pub fn has_errors(&self) -> bool {
        self.nerrors > 0
    }

    /// Returns `true` if the user chose to abort at an error prompt.
    pub fn abort_requested(&self) -> bool {
        self.abort_requested
    }

    /// Returns `true` if a compressed diagnostic was reported since the last summary.
    pub fn compressed_output(&self) -> bool {
        self.compressed_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::DiagnosticCollector;
    use crate::formatter::RawDiagnosticFormatter;
    use crate::writer::CapturedOutput;
    use corvid_source::SourceDb;

    struct Fixture {
        log: Log,
        errors: CapturedOutput,
        warnings: CapturedOutput,
        notices: CapturedOutput,
    }

    fn fixture(options: LogOptions) -> Fixture {
        let errors = CapturedOutput::new();
        let warnings = CapturedOutput::new();
        let notices = CapturedOutput::new();
        let writers = LogWriters::new(
            Box::new(errors.clone()),
            Box::new(warnings.clone()),
            Box::new(notices.clone()),
        );
        let messages = Arc::new(MessageCatalog::with_defaults());
        let log = Log::new(messages, options, Box::new(RawDiagnosticFormatter::new()), writers);
        Fixture {
            log,
            errors,
            warnings,
            notices,
        }
    }

    fn source() -> SourceHandle {
        let mut db = SourceDb::new();
        let id = db.add_source("A.java", "class A {\n  int x;\n}\n");
        db.get_file(id).clone()
    }

    struct Scripted(Vec<PromptResponse>, Arc<std::sync::Mutex<Vec<String>>>);

    impl ErrorPrompt for Scripted {
        fn ask(&mut self, question: &str) -> PromptResponse {
            self.1.lock().unwrap().push(question.to_string());
            self.0.pop().unwrap_or(PromptResponse::Resume)
        }
    }

    #[test]
    fn routes_kinds_to_their_streams() {
        let mut fx = fixture(LogOptions::default());
        fx.log.use_source(Some(source()));
        fx.log.error(Some(Position::at(12)), "cant.resolve", vec!["y".into()]);
        fx.log.warning(Some(Position::at(14)), "has.been.deprecated", vec![]);
        fx.log.note(None, "deprecated.filename", vec!["A.java".into()]);
        assert_eq!(fx.errors.contents(), "A.java:2:3: compiler.err.cant.resolve: y\n");
        assert_eq!(fx.warnings.contents(), "A.java:2:5: compiler.warn.has.been.deprecated\n");
        assert_eq!(fx.notices.contents(), "- compiler.note.deprecated.filename: A.java\n");
        assert_eq!(fx.log.error_count(), 1);
        assert_eq!(fx.log.warning_count(), 1);
    }

    #[test]
    fn disabled_warnings_respect_mandatory() {
        let mut fx = fixture(LogOptions {
            warnings_enabled: false,
            ..LogOptions::default()
        });
        fx.log.warning(None, "a", vec![]);
        fx.log.note(None, "b", vec![]);
        fx.log.mandatory_warning(None, "c", vec![]);
        fx.log.mandatory_note(None, "d", vec![]);
        assert_eq!(fx.warnings.contents(), "- compiler.warn.c\n");
        assert_eq!(fx.notices.contents(), "- compiler.note.d\n");
        assert_eq!(fx.log.warning_count(), 1);
    }

    #[test]
    fn mandatory_not_enforced() {
        let mut fx = fixture(LogOptions {
            warnings_enabled: false,
            enforce_mandatory: false,
            ..LogOptions::default()
        });
        fx.log.mandatory_warning(None, "c", vec![]);
        assert_eq!(fx.warnings.contents(), "");
    }

    #[test]
    fn suppress_notes() {
        let mut fx = fixture(LogOptions {
            suppress_notes: true,
            ..LogOptions::default()
        });
        fx.log.mandatory_note(None, "d", vec![]);
        assert_eq!(fx.notices.contents(), "");
    }

    #[test]
    fn api_errors_bypass_dedup() {
        let mut fx = fixture(LogOptions::default());
        fx.log.use_source(Some(source()));
        fx.log.error(Some(Position::at(3)), "x", vec![]);
        fx.log.error(Some(Position::at(3)), "x", vec![]);
        fx.log.error_with_flags(DiagnosticFlags::API, Some(Position::at(3)), "x", vec![]);
        assert_eq!(fx.log.error_count(), 2);
    }

    #[test]
    fn unpositioned_errors_never_deduplicated() {
        let mut fx = fixture(LogOptions::default());
        fx.log.use_source(Some(source()));
        fx.log.error(None, "x", vec![]);
        fx.log.error(None, "x", vec![]);
        assert_eq!(fx.log.error_count(), 2);
    }

    #[test]
    #[should_panic(expected = "cannot be reported on its own")]
    fn fragment_rejected() {
        let mut fx = fixture(LogOptions::default());
        let fragment = fx.log.factory().fragment("x", vec![]);
        fx.log.report(fragment);
    }

    #[test]
    #[should_panic(expected = "cannot be reported on its own")]
    fn fragment_rejected_while_discarding() {
        let mut fx = fixture(LogOptions::default());
        fx.log.push_discard();
        let fragment = fx.log.factory().fragment("x", vec![]);
        fx.log.report(fragment);
    }

    #[test]
    #[should_panic(expected = "cannot be reported on its own")]
    fn fragment_rejected_while_deferring() {
        let mut fx = fixture(LogOptions::default());
        fx.log.push_deferred();
        let fragment = fx.log.factory().fragment("x", vec![]);
        fx.log.report(fragment);
    }

    #[test]
    fn use_source_returns_previous() {
        let mut fx = fixture(LogOptions::default());
        let src = source();
        assert!(fx.log.use_source(Some(src.clone())).is_none());
        let previous = fx.log.use_source(None).unwrap();
        assert!(Arc::ptr_eq(&previous, &src));
        assert!(fx.log.current_source().is_none());
    }

    #[test]
    fn listener_replaces_writers() {
        let mut fx = fixture(LogOptions::default());
        let collector = Arc::new(DiagnosticCollector::new());
        fx.log.set_listener(collector.clone());
        fx.log.error(None, "x", vec![]);
        assert_eq!(collector.codes(), vec!["compiler.err.x"]);
        assert_eq!(fx.errors.contents(), "");
        assert_eq!(fx.log.error_count(), 1);
        assert!(fx.log.clear_listener().is_some());
        assert!(!fx.log.has_listener());
    }

    #[test]
    fn deferred_then_reported() {
        let mut fx = fixture(LogOptions::default());
        fx.log.push_deferred();
        fx.log.error(None, "x", vec![]);
        fx.log.warning(None, "y", vec![]);
        assert_eq!(fx.log.error_count(), 0);
        let held = fx.log.pop_handler();
        assert_eq!(held.len(), 2);
        fx.log.report_deferred(held);
        assert_eq!(fx.log.error_count(), 1);
        assert_eq!(fx.log.warning_count(), 1);
    }

    #[test]
    fn discard_drops_but_non_deferrable_passes() {
        let mut fx = fixture(LogOptions::default());
        fx.log.push_discard();
        fx.log.error(None, "x", vec![]);
        fx.log.error_with_flags(DiagnosticFlags::NON_DEFERRABLE, None, "y", vec![]);
        assert!(fx.log.pop_handler().is_empty());
        assert_eq!(fx.errors.contents(), "- compiler.err.y\n");
    }

    #[test]
    fn nested_deferral_reports_into_outer_frame() {
        let mut fx = fixture(LogOptions::default());
        fx.log.push_deferred();
        fx.log.push_deferred();
        fx.log.error(None, "x", vec![]);
        let inner = fx.log.pop_handler();
        fx.log.report_deferred(inner);
        assert_eq!(fx.log.error_count(), 0);
        assert_eq!(fx.log.pop_handler().len(), 1);
    }

    #[test]
    #[should_panic(expected = "no active handler")]
    fn pop_without_push() {
        let mut fx = fixture(LogOptions::default());
        fx.log.pop_handler();
    }

    #[test]
    fn summary_counts_and_limits() {
        let mut fx = fixture(LogOptions {
            max_errors: 2,
            ..LogOptions::default()
        });
        let messages = Arc::clone(fx.log.messages());
        fx.log.set_formatter(Box::new(BasicDiagnosticFormatter::new(messages)));
        for _ in 0..3 {
            fx.log.error(None, "x", vec![]);
        }
        fx.log.warning(None, "unreachable.stmt", vec![]);
        fx.log.print_summary();
        let errors = fx.errors.contents();
        assert!(errors.ends_with(
            "2 errors\n\
             only showing the first 2 errors, of 3 total; raise the error limit to see more\n"
        ));
        assert_eq!(fx.log.suppressed_errors(), 1);
        assert!(fx.warnings.contents().ends_with("1 warning\n"));
    }

    #[test]
    fn zero_limit_still_summarized() {
        let mut fx = fixture(LogOptions {
            max_errors: 0,
            ..LogOptions::default()
        });
        let messages = Arc::clone(fx.log.messages());
        fx.log.set_formatter(Box::new(BasicDiagnosticFormatter::new(messages)));
        for _ in 0..3 {
            fx.log.error(None, "unreachable.stmt", vec![]);
        }
        fx.log.print_summary();
        assert_eq!(fx.log.error_count(), 0);
        assert_eq!(fx.log.suppressed_errors(), 3);
        assert_eq!(
            fx.errors.contents(),
            "0 errors\n\
             only showing the first 0 errors, of 3 total; raise the error limit to see more\n"
        );
        assert_eq!(fx.warnings.contents(), "");
    }

    #[test]
    fn compressed_note_in_summary() {
        let mut fx = fixture(LogOptions::default());
        fx.log.error_with_flags(DiagnosticFlags::COMPRESSED, None, "x", vec![]);
        assert!(fx.log.compressed_output());
        fx.log.print_summary();
        assert!(!fx.log.compressed_output());
        assert_eq!(fx.notices.contents(), "- compiler.note.compressed.diags\n");
    }

    #[test]
    fn prompt_after_errors() {
        let mut fx = fixture(LogOptions {
            prompt_on_error: true,
            ..LogOptions::default()
        });
        let asked = Arc::new(std::sync::Mutex::new(Vec::new()));
        fx.log.set_prompt(Box::new(Scripted(
            vec![PromptResponse::Abort, PromptResponse::Resume],
            asked.clone(),
        )));
        fx.log.warning(None, "w", vec![]);
        fx.log.error(None, "x", vec![]);
        assert!(!fx.log.abort_requested());
        fx.log.error(None, "y", vec![]);
        assert!(fx.log.abort_requested());
        assert_eq!(asked.lock().unwrap().as_slice(), ["R)esume, A)bort>", "R)esume, A)bort>"]);
    }

    #[test]
    fn prompt_answers() {
        assert_eq!(parse_response("a\n"), PromptResponse::Abort);
        assert_eq!(parse_response("  Abort"), PromptResponse::Abort);
        assert_eq!(parse_response("r\n"), PromptResponse::Resume);
        assert_eq!(parse_response(""), PromptResponse::Resume);
    }

    #[test]
    fn print_lines_localizes() {
        let mut fx = fixture(LogOptions::default());
        fx.log.print_lines(
            WriterKind::Notice,
            "compiler.misc.count.warn.plural",
            &["3".to_string()],
        );
        assert_eq!(fx.notices.contents(), "3 warnings\n");
    }
}
