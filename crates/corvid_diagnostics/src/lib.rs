//! Diagnostic creation, localization, formatting and reporting.
//!
//! A compiler pass builds a [`Diagnostic`] through a [`DiagnosticFactory`] (or the
//! convenience methods on [`Log`]) and hands it to [`Log::report`]. The log applies
//! reporting policy (warning switches, error/warning caps, duplicate suppression,
//! deferral) and then either forwards the diagnostic to a registered
//! [`DiagnosticListener`] or renders it with a [`DiagnosticFormatter`] and writes it
//! to the sink for its kind. Messages are resolved through a [`MessageCatalog`] of
//! per-locale bundles.

#![warn(missing_docs)]

pub mod arg;
pub mod collector;
pub mod diagnostic;
pub mod error;
pub mod factory;
pub mod flags;
pub mod formatter;
pub mod kind;
pub mod listener;
pub mod messages;
pub mod reporting;
pub mod writer;

pub use arg::{Arg, Localizable, LocalizedString};
pub use collector::DiagnosticCollector;
pub use diagnostic::{Diagnostic, SourceHandle};
pub use error::BundleError;
pub use factory::DiagnosticFactory;
pub use flags::DiagnosticFlags;
pub use formatter::{
    BasicDiagnosticFormatter, DiagnosticFormatter, DiagnosticParts, FormatterConfig,
    Indentation, MultilineLimits, PositionKind, RawDiagnosticFormatter, SourcePosition,
};
pub use kind::DiagnosticKind;
pub use listener::DiagnosticListener;
pub use reporting::{ErrorPrompt, Log, LogOptions, PromptResponse, StdinPrompt};
pub use messages::{BundleFamily, BundleSource, Locale, MessageBundle, MessageCatalog};
pub use writer::{CapturedOutput, LogWriters, WriterKind};
