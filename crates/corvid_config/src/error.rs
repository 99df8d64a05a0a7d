//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating a `corvid.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A diagnostic template cannot be used by the formatter.
    #[error("invalid template {slot}: {problem}")]
    InvalidTemplate {
        /// The `[format]` key holding the template.
        slot: &'static str,
        /// What is wrong with it.
        problem: TemplateProblem,
    },

    /// An indentation width is larger than the formatter accepts.
    #[error("format.indent.{part} must be at most {max}, got {width}")]
    IndentTooWide {
        /// The diagnostic part being indented.
        part: &'static str,
        /// The configured width.
        width: usize,
        /// The largest accepted width.
        max: usize,
    },
}

/// Why a diagnostic template was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateProblem {
    /// `%` is followed by a character that names no directive.
    #[error("unknown directive '%{0}'")]
    UnknownDirective(char),
    /// The template never renders the message text.
    #[error("template must contain %m")]
    MissingMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_field() {
        let err = ConfigError::MissingField("log.locale".to_string());
        assert_eq!(format!("{err}"), "missing required field: log.locale");
    }

    #[test]
    fn display_parse_error() {
        let err = ConfigError::ParseError("expected '=' at line 3".to_string());
        assert_eq!(
            format!("{err}"),
            "failed to parse configuration: expected '=' at line 3"
        );
    }

    #[test]
    fn display_invalid_template() {
        let err = ConfigError::InvalidTemplate {
            slot: "format.class_file",
            problem: TemplateProblem::UnknownDirective('z'),
        };
        assert_eq!(
            format!("{err}"),
            "invalid template format.class_file: unknown directive '%z'"
        );
        let err = ConfigError::InvalidTemplate {
            slot: "format.position",
            problem: TemplateProblem::MissingMessage,
        };
        assert_eq!(
            format!("{err}"),
            "invalid template format.position: template must contain %m"
        );
    }

    #[test]
    fn display_indent_too_wide() {
        let err = ConfigError::IndentTooWide {
            part: "details",
            width: 40,
            max: 32,
        };
        assert_eq!(format!("{err}"), "format.indent.details must be at most 32, got 40");
    }

    #[test]
    fn display_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ConfigError::IoError(io_err);
        assert!(format!("{err}").starts_with("failed to read configuration:"));
    }
}
