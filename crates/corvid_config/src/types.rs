//! Configuration types deserialized from `corvid.toml`.

use corvid_diagnostics::formatter::{
    DEFAULT_CLASS_FILE_FORMAT, DEFAULT_NO_POSITION_FORMAT, DEFAULT_POSITION_FORMAT,
};
use corvid_diagnostics::{Indentation, MultilineLimits, SourcePosition};
use serde::Deserialize;

/// The top-level configuration file.
#[derive(Debug, Default, Deserialize)]
pub struct CorvidConfig {
    /// Reporting policy.
    #[serde(default)]
    pub log: LogConfig,
    /// Output formatting.
    #[serde(default)]
    pub format: FormatConfig,
}

/// The `[log]` section.
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Errors shown before the rest are dropped; 0 means unlimited.
    #[serde(default = "default_limit")]
    pub max_errors: usize,
    /// Warnings shown before the rest are dropped; 0 means unlimited.
    #[serde(default = "default_limit")]
    pub max_warnings: usize,
    /// Whether non-mandatory warnings and notes are shown.
    #[serde(default = "default_true")]
    pub warnings: bool,
    /// Whether notes are dropped.
    #[serde(default)]
    pub suppress_notes: bool,
    /// Whether errors repeated at one position are all shown.
    #[serde(default)]
    pub report_all: bool,
    /// Whether mandatory diagnostics bypass `warnings = false`.
    #[serde(default = "default_true")]
    pub enforce_mandatory: bool,
    /// Whether to ask resume/abort after each error.
    #[serde(default)]
    pub prompt_on_error: bool,
    /// The locale messages are shown in.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_errors: default_limit(),
            max_warnings: default_limit(),
            warnings: true,
            suppress_notes: false,
            report_all: false,
            enforce_mandatory: true,
            prompt_on_error: false,
            locale: default_locale(),
        }
    }
}

/// The `[format]` section.
#[derive(Debug, Deserialize)]
pub struct FormatConfig {
    /// Which formatter renders diagnostics.
    #[serde(default)]
    pub style: FormatStyle,
    /// Whether source lines are shown. Defaults to on for the basic style and off
    /// for the raw style.
    pub show_source: Option<bool>,
    /// Whether a caret line follows the source line.
    #[serde(default = "default_true")]
    pub caret: bool,
    /// Whether file arguments render as full paths.
    #[serde(default)]
    pub full_paths: bool,
    /// Where the source line goes in a multi-line message.
    #[serde(default)]
    pub source_position: SourcePosition,
    /// Template for positioned diagnostics.
    #[serde(default = "default_position")]
    pub position: String,
    /// Template for diagnostics without a position.
    #[serde(default = "default_no_position")]
    pub no_position: String,
    /// Template for unpositioned diagnostics in class files.
    #[serde(default = "default_class_file")]
    pub class_file: String,
    /// Per-part indentation.
    #[serde(default)]
    pub indent: Indentation,
    /// Sub-diagnostic limits.
    #[serde(default)]
    pub multiline: MultilineLimits,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            style: FormatStyle::default(),
            show_source: None,
            caret: true,
            full_paths: false,
            source_position: SourcePosition::default(),
            position: default_position(),
            no_position: default_no_position(),
            class_file: default_class_file(),
            indent: Indentation::default(),
            multiline: MultilineLimits::default(),
        }
    }
}

/// The formatter selected by `format.style`.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Localized template output (default).
    #[default]
    Basic,
    /// Message codes and arguments verbatim.
    Raw,
}

fn default_limit() -> usize {
    100
}

fn default_true() -> bool {
    true
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_position() -> String {
    DEFAULT_POSITION_FORMAT.to_string()
}

fn default_no_position() -> String {
    DEFAULT_NO_POSITION_FORMAT.to_string()
}

fn default_class_file() -> String {
    DEFAULT_CLASS_FILE_FORMAT.to_string()
}
