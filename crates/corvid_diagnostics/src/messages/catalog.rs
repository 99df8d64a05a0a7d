//! The ordered, per-locale cached set of bundles consulted for every message.

use super::bundle::{BundleFamily, BundleSource, MessageBundle};
use super::format::format_message;
use super::locale::Locale;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Placeholder list appended to the missing-key text so that the arguments that
/// would have been substituted are still visible.
const BROKEN_ARGS: &str = "{0}, {1}, {2}, {3}, {4}, {5}, {6}, {7}";

#[derive(Debug)]
struct CatalogState {
    sources: Vec<Arc<dyn BundleSource>>,
    cache: HashMap<Locale, Arc<[Arc<MessageBundle>]>>,
    generation: u64,
    current: Locale,
}

/// Resolves message keys to localized text.
///
/// Sources are consulted newest first. For a given locale, the bundles to search
/// are computed once and cached until a source is added.
///
/// ```
/// use corvid_diagnostics::{Locale, MessageCatalog};
///
/// let messages = MessageCatalog::with_defaults();
/// let args = ["foo".to_string()];
/// let text = messages.resolve(&Locale::new("en"), "compiler.err.cant.resolve", &args);
/// assert_eq!(text, "cannot find symbol: foo");
/// ```
#[derive(Debug)]
pub struct MessageCatalog {
    state: Mutex<CatalogState>,
}

impl MessageCatalog {
    /// Creates an empty catalog whose current locale is `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            state: Mutex::new(CatalogState {
                sources: Vec::new(),
                cache: HashMap::new(),
                generation: 0,
                current: locale,
            }),
        }
    }

    /// A catalog holding the built-in `compiler` bundle, with `en` as current locale.
    pub fn with_defaults() -> Self {
        let catalog = Self::new(Locale::new("en"));
        catalog.add(BundleFamily::compiler());
        catalog
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Adds a bundle family. It takes precedence over every source added before.
    pub fn add(&self, family: BundleFamily) {
        self.add_source(Arc::new(family));
    }

    /// Adds any bundle source, invalidating every cached bundle list.
    pub fn add_source(&self, source: Arc<dyn BundleSource>) {
        let mut state = self.lock();
        log::debug!("adding message source '{}'", source.name());
        state.sources.push(source);
        state.cache.clear();
        state.generation += 1;
    }

    /// The locale used by [`localize`](Self::localize).
    pub fn current_locale(&self) -> Locale {
        self.lock().current.clone()
    }

    /// Changes the locale used by [`localize`](Self::localize).
    pub fn set_current_locale(&self, locale: Locale) {
        self.lock().current = locale;
    }

    /// The bundles consulted for `locale`, in lookup order.
    ///
    /// Sources are queried without holding the catalog lock, so a source may
    /// itself call back into the catalog.
    pub fn bundles(&self, locale: &Locale) -> Arc<[Arc<MessageBundle>]> {
        let (sources, generation) = {
            let state = self.lock();
            if let Some(cached) = state.cache.get(locale) {
                return Arc::clone(cached);
            }
            (state.sources.clone(), state.generation)
        };
        let candidates = locale.candidates();
        let list: Arc<[Arc<MessageBundle>]> = sources
            .iter()
            .rev()
            .flat_map(|source| candidates.iter().filter_map(|c| source.bundle(c)))
            .collect();
        log::trace!("built message bundle list for locale {locale}: {} bundles", list.len());
        let mut state = self.lock();
        if state.generation == generation {
            state.cache.insert(locale.clone(), Arc::clone(&list));
        }
        list
    }

    /// Returns the raw template for `key`, if any bundle defines it.
    pub fn lookup(&self, locale: &Locale, key: &str) -> Option<String> {
        self.bundles(locale)
            .iter()
            .find_map(|b| b.get(key).map(str::to_string))
    }

    /// Resolves `key` for `locale` and substitutes `args`.
    ///
    /// Never fails: a key that no bundle defines resolves to a fixed text naming
    /// the key and listing the arguments.
    pub fn resolve(&self, locale: &Locale, key: &str, args: &[String]) -> String {
        match self.lookup(locale, key) {
            Some(template) => format_message(&template, args),
            None => {
                log::debug!("no message for key '{key}' in locale {locale}");
                format!(
                    "compiler message file broken: key={key} arguments={}",
                    format_message(BROKEN_ARGS, args)
                )
            }
        }
    }

    /// Resolves `key` for the current locale.
    pub fn localize(&self, key: &str, args: &[String]) -> String {
        let locale = self.current_locale();
        self.resolve(&locale, key, args)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{OnceLock, Weak};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_from_builtin_bundle() {
        let messages = MessageCatalog::with_defaults();
        assert_eq!(
            messages.localize("compiler.err.cant.resolve", &args(&["foo"])),
            "cannot find symbol: foo"
        );
    }

    #[test]
    fn missing_key_never_fails() {
        let messages = MessageCatalog::with_defaults();
        let text = messages.localize("compiler.err.no.such.key", &args(&["a", "b"]));
        assert_eq!(
            text,
            "compiler message file broken: key=compiler.err.no.such.key \
             arguments=a, b, {2}, {3}, {4}, {5}, {6}, {7}"
        );
    }

    #[test]
    fn newest_source_wins() {
        let messages = MessageCatalog::with_defaults();
        messages.add(
            BundleFamily::new("override").with_bundle(
                Locale::root(),
                MessageBundle::new().with("compiler.err.cant.resolve", "symbol {0} not found"),
            ),
        );
        assert_eq!(
            messages.localize("compiler.err.cant.resolve", &args(&["x"])),
            "symbol x not found"
        );
        assert_eq!(messages.localize("compiler.err.error", &[]), "error: ");
    }

    #[test]
    fn specific_locale_before_root() {
        let messages = MessageCatalog::with_defaults();
        let ja = MessageBundle::new().with("compiler.err.error", "エラー: ");
        messages.add(BundleFamily::new("compiler_ja").with_bundle(Locale::new("ja"), ja));
        assert_eq!(messages.resolve(&Locale::new("ja_JP"), "compiler.err.error", &[]), "エラー: ");
        assert_eq!(messages.resolve(&Locale::new("en"), "compiler.err.error", &[]), "error: ");
    }

    #[test]
    fn adding_source_invalidates_cache() {
        let messages = MessageCatalog::new(Locale::root());
        assert_eq!(messages.bundles(&Locale::root()).len(), 0);
        messages.add(BundleFamily::compiler());
        assert_eq!(messages.bundles(&Locale::root()).len(), 1);
        let first = messages.bundles(&Locale::root());
        let second = messages.bundles(&Locale::root());
        assert!(Arc::ptr_eq(&first, &second));
    }

    /// A source that reads the catalog it is registered with.
    #[derive(Debug)]
    struct ReentrantSource {
        catalog: OnceLock<Weak<MessageCatalog>>,
    }

    impl BundleSource for ReentrantSource {
        fn name(&self) -> &str {
            "reentrant"
        }

        fn bundle(&self, locale: &Locale) -> Option<Arc<MessageBundle>> {
            let catalog = self.catalog.get()?.upgrade()?;
            let current = catalog.current_locale();
            (locale == &current)
                .then(|| Arc::new(MessageBundle::new().with("compiler.misc.x", "current")))
        }
    }

    #[test]
    fn source_may_call_back_into_catalog() {
        let messages = Arc::new(MessageCatalog::with_defaults());
        let source = Arc::new(ReentrantSource {
            catalog: OnceLock::new(),
        });
        source.catalog.set(Arc::downgrade(&messages)).unwrap();
        messages.add_source(source);
        assert_eq!(messages.localize("compiler.misc.x", &[]), "current");
        assert_eq!(messages.localize("compiler.err.error", &[]), "error: ");
    }

    #[test]
    fn current_locale_switch() {
        let messages = MessageCatalog::with_defaults();
        assert_eq!(messages.current_locale(), Locale::new("en"));
        messages.set_current_locale(Locale::new("de"));
        assert_eq!(messages.current_locale().tag(), "de");
    }
}
