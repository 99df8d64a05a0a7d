//! Message bundles and the sources that provide them per locale.

use super::locale::Locale;
use crate::error::BundleError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The compiler's own messages for the root locale.
const COMPILER_BUNDLE: &str = include_str!("../../resources/compiler.toml");

/// A set of message templates keyed by fully-qualified code.
#[derive(Clone, Debug, Default)]
pub struct MessageBundle {
    entries: HashMap<String, String>,
}

impl MessageBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a bundle from TOML text.
    ///
    /// Keys may be quoted (`"compiler.err.x" = "..."`) or written as dotted keys
    /// and tables; nested tables are flattened by joining their keys with `.`.
    /// Quote keys that are also prefixes of other keys, since TOML cannot hold
    /// both a string and a table under one name.
    pub fn from_toml_str(text: &str) -> Result<Self, BundleError> {
        let table: toml::Table =
            toml::from_str(text).map_err(|e| BundleError::ParseError(e.to_string()))?;
        let mut bundle = Self::new();
        flatten("", &table, &mut bundle.entries)?;
        Ok(bundle)
    }

    /// Adds (or replaces) a template.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.entries.insert(key.into(), template.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Returns the template for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the number of templates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bundle holds no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(
    prefix: &str,
    table: &toml::Table,
    out: &mut HashMap<String, String>,
) -> Result<(), BundleError> {
    for (key, value) in table {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(s) => {
                out.insert(full, s.clone());
            }
            toml::Value::Table(inner) => flatten(&full, inner, out)?,
            _ => return Err(BundleError::NotAString(full)),
        }
    }
    Ok(())
}

/// A named provider of message bundles, one per locale.
pub trait BundleSource: fmt::Debug + Send + Sync {
    /// The family name, used in traces.
    fn name(&self) -> &str;

    /// The bundle for exactly `locale`, without fallback.
    fn bundle(&self, locale: &Locale) -> Option<Arc<MessageBundle>>;
}

/// An in-memory family of bundles sharing a name, keyed by locale.
#[derive(Debug)]
pub struct BundleFamily {
    name: String,
    bundles: HashMap<Locale, Arc<MessageBundle>>,
}

impl BundleFamily {
    /// Creates an empty family.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bundles: HashMap::new(),
        }
    }

    /// The built-in `compiler` family: kind prefixes, summary counts, prompts and
    /// the common compiler messages, for the root locale.
    pub fn compiler() -> Self {
        let bundle = MessageBundle::from_toml_str(COMPILER_BUNDLE)
            .expect("built-in compiler bundle is valid");
        Self::new("compiler").with_bundle(Locale::root(), bundle)
    }

    /// Adds the bundle for `locale`, replacing any previous one.
    pub fn add_bundle(&mut self, locale: Locale, bundle: MessageBundle) {
        self.bundles.insert(locale, Arc::new(bundle));
    }

    /// Builder form of [`add_bundle`](Self::add_bundle).
    pub fn with_bundle(mut self, locale: Locale, bundle: MessageBundle) -> Self {
        self.add_bundle(locale, bundle);
        self
    }

    /// Parses TOML text and adds it as the bundle for `locale`.
    pub fn with_toml(mut self, locale: Locale, text: &str) -> Result<Self, BundleError> {
        self.add_bundle(locale, MessageBundle::from_toml_str(text)?);
        Ok(self)
    }
}

impl BundleSource for BundleFamily {
    fn name(&self) -> &str {
        &self.name
    }

    fn bundle(&self, locale: &Locale) -> Option<Arc<MessageBundle>> {
        self.bundles.get(locale).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_and_dotted_keys_flatten() {
        let text = r#"
"compiler.err.cant.resolve" = "cannot find symbol: {0}"
"compiler.err.cant.resolve.location" = "cannot find symbol: {0} in {1}"

[compiler.warn]
warning = "warning: "
"#;
        let bundle = MessageBundle::from_toml_str(text).unwrap();
        assert_eq!(bundle.len(), 3);
        assert_eq!(bundle.get("compiler.err.cant.resolve"), Some("cannot find symbol: {0}"));
        assert_eq!(bundle.get("compiler.warn.warning"), Some("warning: "));
    }

    #[test]
    fn non_string_value_rejected() {
        let err = MessageBundle::from_toml_str("\"compiler.misc.n\" = 3").unwrap_err();
        assert!(matches!(err, BundleError::NotAString(k) if k == "compiler.misc.n"));
    }

    #[test]
    fn invalid_toml_rejected() {
        let err = MessageBundle::from_toml_str("not toml at all =").unwrap_err();
        assert!(matches!(err, BundleError::ParseError(_)));
    }

    #[test]
    fn builtin_compiler_bundle_parses() {
        let family = BundleFamily::compiler();
        let root = family.bundle(&Locale::root()).unwrap();
        assert_eq!(root.get("compiler.err.error"), Some("error: "));
        assert_eq!(root.get("compiler.warn.warning"), Some("warning: "));
        assert_eq!(root.get("compiler.note.note"), Some("Note: "));
        assert!(family.bundle(&Locale::new("en")).is_none());
    }

    #[test]
    fn family_from_toml() {
        let family = BundleFamily::new("plugin")
            .with_toml(Locale::new("de"), "\"plugin.err.x\" = \"Fehler\"")
            .unwrap();
        assert_eq!(family.name(), "plugin");
        assert_eq!(family.bundle(&Locale::new("de")).unwrap().get("plugin.err.x"), Some("Fehler"));
    }
}
