//! Turning a loaded configuration into the diagnostics crate's runtime types.

use crate::types::{CorvidConfig, FormatStyle};
use corvid_diagnostics::{
    BasicDiagnosticFormatter, DiagnosticFormatter, DiagnosticParts, FormatterConfig, Locale, Log,
    LogOptions, LogWriters, MessageCatalog, RawDiagnosticFormatter,
};
use std::sync::Arc;

/// Maps the `0 = unlimited` convention of the file onto a count.
fn limit(value: usize) -> usize {
    if value == 0 {
        usize::MAX
    } else {
        value
    }
}

/// The reporting policy described by `[log]`.
pub fn log_options(config: &CorvidConfig) -> LogOptions {
    let log = &config.log;
    LogOptions {
        max_errors: limit(log.max_errors),
        max_warnings: limit(log.max_warnings),
        warnings_enabled: log.warnings,
        suppress_notes: log.suppress_notes,
        report_all: log.report_all,
        enforce_mandatory: log.enforce_mandatory,
        prompt_on_error: log.prompt_on_error,
    }
}

/// The formatter settings described by `[format]`.
pub fn formatter_config(config: &CorvidConfig) -> FormatterConfig {
    let format = &config.format;
    let show_source = format
        .show_source
        .unwrap_or(format.style == FormatStyle::Basic);
    let mut visible = DiagnosticParts::all();
    visible.set(DiagnosticParts::SOURCE, show_source);
    FormatterConfig {
        position_format: format.position.clone(),
        no_position_format: format.no_position.clone(),
        class_file_format: format.class_file.clone(),
        visible,
        indentation: format.indent,
        multiline: format.multiline,
        caret: format.caret,
        source_position: format.source_position,
        full_paths: format.full_paths,
    }
}

/// The locale in `[log]`.
pub fn locale(config: &CorvidConfig) -> Locale {
    Locale::new(&config.log.locale)
}

/// The formatter selected by `format.style`.
pub fn build_formatter(
    config: &CorvidConfig,
    messages: Arc<MessageCatalog>,
) -> Box<dyn DiagnosticFormatter> {
    let formatter_config = formatter_config(config);
    match config.format.style {
        FormatStyle::Basic => Box::new(BasicDiagnosticFormatter::with_config(
            messages,
            formatter_config,
        )),
        FormatStyle::Raw => Box::new(RawDiagnosticFormatter::with_config(formatter_config)),
    }
}

/// A log configured by `config`, writing to `writers`. Also makes the configured
/// locale current in `messages`.
pub fn build_log(config: &CorvidConfig, messages: Arc<MessageCatalog>, writers: LogWriters) -> Log {
    messages.set_current_locale(locale(config));
    let formatter = build_formatter(config, Arc::clone(&messages));
    Log::new(messages, log_options(config), formatter, writers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;
    use corvid_diagnostics::CapturedOutput;

    #[test]
    fn zero_limits_mean_unlimited() {
        let config = load_config_from_str("[log]\nmax_errors = 0\nmax_warnings = 3\n").unwrap();
        let options = log_options(&config);
        assert_eq!(options.max_errors, usize::MAX);
        assert_eq!(options.max_warnings, 3);
        assert!(options.warnings_enabled);
    }

    #[test]
    fn show_source_defaults_by_style() {
        let basic = load_config_from_str("").unwrap();
        assert!(formatter_config(&basic).is_visible(DiagnosticParts::SOURCE));
        let raw = load_config_from_str("[format]\nstyle = \"raw\"\n").unwrap();
        assert!(!formatter_config(&raw).is_visible(DiagnosticParts::SOURCE));
        let raw_with_source =
            load_config_from_str("[format]\nstyle = \"raw\"\nshow_source = true\n").unwrap();
        assert!(formatter_config(&raw_with_source).is_visible(DiagnosticParts::SOURCE));
    }

    #[test]
    fn default_config_matches_default_formatter() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(formatter_config(&config), FormatterConfig::default());
        assert_eq!(log_options(&config), LogOptions::default());
    }

    #[test]
    fn build_formatter_by_style() {
        let messages = Arc::new(MessageCatalog::with_defaults());
        let raw = load_config_from_str("[format]\nstyle = \"raw\"\n").unwrap();
        assert!(build_formatter(&raw, Arc::clone(&messages)).is_raw());
        let basic = load_config_from_str("").unwrap();
        assert!(!build_formatter(&basic, messages).is_raw());
    }

    #[test]
    fn build_log_applies_everything() {
        let toml = r#"
[log]
max_errors = 1
locale = "fr"

[format]
no_position = "[%p] %m"
"#;
        let config = load_config_from_str(toml).unwrap();
        let messages = Arc::new(MessageCatalog::with_defaults());
        let out = CapturedOutput::new();
        let mut log = build_log(&config, Arc::clone(&messages), LogWriters::uniform(out.clone()));
        assert_eq!(messages.current_locale(), Locale::new("fr"));

        log.error(None, "cant.resolve", vec!["x".into()]);
        log.error(None, "cant.resolve", vec!["y".into()]);
        assert_eq!(out.contents(), "[error: ] cannot find symbol: x\n");
        assert_eq!(log.suppressed_errors(), 1);
    }
}
