//! Parsing and validation of `corvid.toml` diagnostic configuration files.
//!
//! This crate reads the configuration file into a strongly-typed [`CorvidConfig`]
//! and resolves it into the [`LogOptions`](corvid_diagnostics::LogOptions),
//! [`FormatterConfig`](corvid_diagnostics::FormatterConfig) and ready-to-use
//! [`Log`](corvid_diagnostics::Log) of the diagnostics crate.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::{ConfigError, TemplateProblem};
pub use loader::{load_config, load_config_from_str, validate_config, CONFIG_FILE_NAME};
pub use resolve::{build_formatter, build_log, formatter_config, locale, log_options};
pub use types::*;
