//! Diagnostic arguments substituted into localized messages.

use crate::diagnostic::Diagnostic;
use crate::messages::{Locale, MessageCatalog};
use corvid_source::FileObject;
use std::fmt;
use std::sync::Arc;

/// A value that knows how to render itself for a locale.
pub trait Localizable: fmt::Debug + Send + Sync {
    /// Text for `locale`, looking up any messages it needs in `messages`.
    fn localize(&self, locale: &Locale, messages: &MessageCatalog) -> String;

    /// Locale-independent text, used by the raw formatter.
    fn raw(&self) -> String;
}

/// A message key that is localized when the enclosing diagnostic is formatted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LocalizedString {
    key: String,
}

impl LocalizedString {
    /// Wraps a fully-qualified message key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Returns the wrapped key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Localizable for LocalizedString {
    fn localize(&self, locale: &Locale, messages: &MessageCatalog) -> String {
        messages.resolve(locale, &self.key, &[])
    }

    fn raw(&self) -> String {
        self.key.clone()
    }
}

/// One positional argument of a [`Diagnostic`].
#[derive(Clone, Debug)]
pub enum Arg {
    /// Another diagnostic, rendered as its message.
    Nested(Box<Diagnostic>),
    /// A list, rendered element by element and joined with `,`.
    Sequence(Vec<Arg>),
    /// A file, rendered as its simple name unless full paths are requested.
    SourceRef(FileObject),
    /// A value with its own locale-aware rendering.
    Localizable(Arc<dyn Localizable>),
    /// Preformatted text.
    Plain(String),
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Plain(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Plain(s)
    }
}

impl From<&String> for Arg {
    fn from(s: &String) -> Self {
        Arg::Plain(s.clone())
    }
}

macro_rules! plain_from_display {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Plain(v.to_string())
            }
        })*
    };
}

plain_from_display!(i32, i64, u32, u64, usize, bool, char);

impl From<Diagnostic> for Arg {
    fn from(d: Diagnostic) -> Self {
        Arg::Nested(Box::new(d))
    }
}

impl From<FileObject> for Arg {
    fn from(f: FileObject) -> Self {
        Arg::SourceRef(f)
    }
}

impl From<LocalizedString> for Arg {
    fn from(s: LocalizedString) -> Self {
        Arg::Localizable(Arc::new(s))
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(items: Vec<T>) -> Self {
        Arg::Sequence(items.into_iter().map(Into::into).collect())
    }
}
