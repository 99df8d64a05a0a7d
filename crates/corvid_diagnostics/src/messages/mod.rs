//! Localized message lookup.
//!
//! A [`MessageCatalog`] holds an ordered list of [`BundleSource`]s. For each
//! locale it builds (once, then caches) the list of bundles to consult, newest
//! source first and, within a source, most specific locale first. Lookups that
//! find nothing produce a fixed "message file broken" text instead of failing.

pub mod bundle;
pub mod catalog;
pub mod format;
pub mod locale;

pub use bundle::{BundleFamily, BundleSource, MessageBundle};
pub use catalog::MessageCatalog;
pub use format::format_message;
pub use locale::Locale;
