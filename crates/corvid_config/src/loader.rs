//! Configuration file loading and validation.

use crate::error::{ConfigError, TemplateProblem};
use crate::types::CorvidConfig;
use corvid_diagnostics::formatter::{parse_pattern, Directive, Segment};
use std::path::Path;

/// The configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "corvid.toml";

/// Largest indentation accepted for any diagnostic part.
const MAX_INDENT: usize = 32;

/// Loads and validates `<project_dir>/corvid.toml`.
pub fn load_config(project_dir: &Path) -> Result<CorvidConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    log::debug!("loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<CorvidConfig, ConfigError> {
    let config: CorvidConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks templates, indentation and locale.
///
/// Every template must contain `%m` and only known directives, and no
/// indentation may exceed 32 columns.
pub fn validate_config(config: &CorvidConfig) -> Result<(), ConfigError> {
    if config.log.locale.trim().is_empty() {
        return Err(ConfigError::MissingField("log.locale".to_string()));
    }

    let format = &config.format;
    for (slot, pattern) in [
        ("format.position", &format.position),
        ("format.no_position", &format.no_position),
        ("format.class_file", &format.class_file),
    ] {
        validate_pattern(slot, pattern)?;
    }

    let indent = &format.indent;
    for (part, width) in [
        ("summary", indent.summary),
        ("details", indent.details),
        ("subdiagnostics", indent.subdiagnostics),
        ("source", indent.source),
    ] {
        if width > MAX_INDENT {
            return Err(ConfigError::IndentTooWide {
                part,
                width,
                max: MAX_INDENT,
            });
        }
    }
    Ok(())
}

fn validate_pattern(slot: &'static str, pattern: &str) -> Result<(), ConfigError> {
    let segments = parse_pattern(pattern);
    let problem = if let Some(c) = segments.iter().find_map(|s| match s {
        Segment::Unknown(c) => Some(*c),
        _ => None,
    }) {
        TemplateProblem::UnknownDirective(c)
    } else if !segments.contains(&Segment::Directive(Directive::Message)) {
        TemplateProblem::MissingMessage
    } else {
        return Ok(());
    };
    Err(ConfigError::InvalidTemplate { slot, problem })
}
