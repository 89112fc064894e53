//! The localization contract handlers depend on.

use crate::error::I18nError;
use crate::i18n::format::format_message;
use crate::i18n::{Locale, LocaleNegotiator, LocaleRegistry, MessageCatalog, MessageKey};

/// Locale resolution plus message lookup and formatting.
pub trait Localize: Send + Sync {
    /// The locale answered in when no hint matches.
    fn default_locale(&self) -> Locale;

    /// Resolve a request hint to a supported locale. Never fails.
    fn resolve(&self, hint: Option<&str>) -> Locale;

    /// Resolve the first hint that matches a supported locale, in order.
    fn resolve_first(&self, hints: &[Option<&str>]) -> Locale;

    /// Raw template for `key` in `locale`, falling back to the default locale.
    fn lookup(&self, locale: Locale, key: MessageKey) -> &str;

    /// Substitute positional arguments into a template.
    fn format(&self, template: &str, args: &[&str]) -> String {
        format_message(template, args)
    }

    /// Look up and format in one step.
    fn localize(&self, locale: Locale, key: MessageKey, args: &[&str]) -> String {
        self.format(self.lookup(locale, key), args)
    }
}

/// Process-wide localizer: the negotiator and the message catalog.
///
/// Built once in `main` and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct Localizer {
    negotiator: LocaleNegotiator,
    catalog: MessageCatalog,
}

impl Localizer {
    pub fn new(negotiator: LocaleNegotiator, catalog: MessageCatalog) -> Self {
        Self {
            negotiator,
            catalog,
        }
    }

    /// Build the registry, catalog and negotiator for `default_code`.
    ///
    /// Fails if the default is unsupported or the compiled tables do not
    /// cover it.
    pub fn with_default(default_code: &str) -> Result<Self, I18nError> {
        let registry = LocaleRegistry::new(default_code)?;
        let catalog = MessageCatalog::new(&registry)?;
        Ok(Self::new(LocaleNegotiator::new(registry), catalog))
    }

    pub fn registry(&self) -> &LocaleRegistry {
        self.negotiator.registry()
    }
}

impl Localize for Localizer {
    fn default_locale(&self) -> Locale {
        self.registry().default_locale()
    }

    fn resolve(&self, hint: Option<&str>) -> Locale {
        self.negotiator.resolve(hint)
    }

    fn resolve_first(&self, hints: &[Option<&str>]) -> Locale {
        self.negotiator.resolve_first(hints.iter().copied())
    }

    fn lookup(&self, locale: Locale, key: MessageKey) -> &str {
        self.catalog.lookup(locale, key)
    }
}
