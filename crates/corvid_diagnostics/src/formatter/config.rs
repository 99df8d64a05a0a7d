//! Formatter settings: templates, visible parts, indentation and limits.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Template for diagnostics with a resolvable position.
pub const DEFAULT_POSITION_FORMAT: &str = "%f:%l:%_%p%L%m";
/// Template for diagnostics without a position or source.
pub const DEFAULT_NO_POSITION_FORMAT: &str = "%p%L%m";
/// Template for unpositioned diagnostics whose source is a class file.
pub const DEFAULT_CLASS_FILE_FORMAT: &str = "%f:%_%p%L%m";

bitflags! {
    /// The parts of a formatted diagnostic that are rendered.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct DiagnosticParts: u8 {
        /// The first line of the message.
        const SUMMARY = 1 << 0;
        /// Remaining lines of the message.
        const DETAILS = 1 << 1;
        /// Sub-diagnostics of multiline diagnostics.
        const SUBDIAGNOSTICS = 1 << 2;
        /// The source line with its caret.
        const SOURCE = 1 << 3;
    }
}

impl Default for DiagnosticParts {
    fn default() -> Self {
        Self::all()
    }
}

/// Where the source line is placed relative to a multi-line message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourcePosition {
    /// After the whole message.
    #[default]
    Bottom,
    /// Right after the summary line.
    AfterSummary,
}

/// Indentation, in columns, applied to each part of a formatted diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Indentation {
    /// The summary line.
    pub summary: usize,
    /// Message lines after the summary, relative to it.
    pub details: usize,
    /// Sub-diagnostics, relative to the summary.
    pub subdiagnostics: usize,
    /// The source line and caret.
    pub source: usize,
}

impl Default for Indentation {
    fn default() -> Self {
        Self {
            summary: 0,
            details: 2,
            subdiagnostics: 4,
            source: 0,
        }
    }
}

/// Limits on how much of a sub-diagnostic tree is rendered. `None` is unlimited.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MultilineLimits {
    /// Levels of nested sub-diagnostics rendered below the top diagnostic.
    pub depth: Option<usize>,
    /// Sub-diagnostics rendered per diagnostic.
    pub length: Option<usize>,
}

/// Complete formatter configuration, one named field per template slot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FormatterConfig {
    /// Template for positioned diagnostics.
    pub position_format: String,
    /// Template for diagnostics without position (or without source).
    pub no_position_format: String,
    /// Template for unpositioned diagnostics from class files.
    pub class_file_format: String,
    /// Rendered parts.
    pub visible: DiagnosticParts,
    /// Per-part indentation.
    pub indentation: Indentation,
    /// Sub-diagnostic limits.
    pub multiline: MultilineLimits,
    /// Whether a caret line follows the source line.
    pub caret: bool,
    /// Placement of the source line.
    pub source_position: SourcePosition,
    /// Whether file arguments render as full paths instead of simple names.
    pub full_paths: bool,
}

impl FormatterConfig {
    /// The configuration of the raw formatter: no source lines.
    pub fn raw() -> Self {
        let mut config = Self::default();
        config.visible.remove(DiagnosticParts::SOURCE);
        config
    }

    /// Turns source-line display on or off.
    pub fn show_source(mut self, show: bool) -> Self {
        self.visible.set(DiagnosticParts::SOURCE, show);
        self
    }

    /// Returns `true` if `part` is rendered.
    pub fn is_visible(&self, part: DiagnosticParts) -> bool {
        self.visible.contains(part)
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            position_format: DEFAULT_POSITION_FORMAT.to_string(),
            no_position_format: DEFAULT_NO_POSITION_FORMAT.to_string(),
            class_file_format: DEFAULT_CLASS_FILE_FORMAT.to_string(),
            visible: DiagnosticParts::all(),
            indentation: Indentation::default(),
            multiline: MultilineLimits::default(),
            caret: true,
            source_position: SourcePosition::Bottom,
            full_paths: false,
        }
    }
}
