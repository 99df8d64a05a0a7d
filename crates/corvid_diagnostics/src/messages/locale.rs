//! Locale tags and their fallback chains.

use std::fmt;

/// A locale tag such as `en`, `ja_JP` or the root locale (empty tag).
///
/// `-` separators are normalized to `_`, so `pt-BR` and `pt_BR` are the same locale.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Locale(String);

impl Locale {
    /// Creates a locale from a tag.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('-', "_"))
    }

    /// The root locale, consulted last by every lookup.
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Returns the normalized tag.
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the root locale.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The locales to consult for this one, most specific first, ending with root.
    pub fn candidates(&self) -> Vec<Locale> {
        let mut out = Vec::new();
        let mut tag = self.0.as_str();
        while !tag.is_empty() {
            out.push(Locale(tag.to_string()));
            tag = tag.rfind('_').map_or("", |i| &tag[..i]);
        }
        out.push(Locale::root());
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
