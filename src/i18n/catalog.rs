//! Message template store.
//!
//! Holds the compiled template tables, indexed by locale and key. Built once
//! at startup; construction fails if the default locale does not cover every
//! [`MessageKey`], so lookups afterwards always find something.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::I18nError;
use crate::i18n::strings::{MessageTable, BUILTIN_TABLES};
use crate::i18n::{CatalogValidator, Locale, LocaleRegistry, MessageKey};

#[derive(Debug, Clone)]
pub struct MessageCatalog {
    default: Locale,
    tables: HashMap<Locale, HashMap<MessageKey, &'static str>>,
}

impl MessageCatalog {
    /// Build the catalog from the compiled tables.
    pub fn new(registry: &LocaleRegistry) -> Result<Self, I18nError> {
        Self::from_tables(registry, BUILTIN_TABLES)
    }

    /// Build a catalog from explicit tables.
    ///
    /// # Errors
    /// - `UnsupportedLocale` if a table is given for a locale the registry
    ///   does not know
    /// - `MissingTemplate` if the default locale lacks any key
    /// - `InvalidCatalog` for other coverage errors (e.g. empty default
    ///   templates)
    pub fn from_tables(
        registry: &LocaleRegistry,
        tables: &[(&str, MessageTable)],
    ) -> Result<Self, I18nError> {
        let mut indexed: HashMap<Locale, HashMap<MessageKey, &'static str>> = HashMap::new();

        for (code, table) in tables {
            let locale = registry
                .find(code)
                .ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))?;
            indexed
                .entry(locale)
                .or_default()
                .extend(table.iter().copied());
        }

        let catalog = Self {
            default: registry.default_locale(),
            tables: indexed,
        };

        if let Some(key) = CatalogValidator::missing_default_keys(&catalog).first() {
            return Err(I18nError::MissingTemplate {
                locale: catalog.default.code().to_string(),
                key: key.as_str().to_string(),
            });
        }

        let report = CatalogValidator::validate(&catalog, registry);
        if report.has_errors() {
            return Err(I18nError::InvalidCatalog(report.errors.join("; ")));
        }
        for warning in &report.warnings {
            warn!("Message catalog: {}", warning);
        }

        Ok(catalog)
    }

    /// Look up the raw template for `key` in `locale`.
    ///
    /// Falls back to the default locale when the requested locale has no
    /// template. If neither has one, the key name itself is returned.
    pub fn lookup(&self, locale: Locale, key: MessageKey) -> &'static str {
        if let Some(template) = self.lookup_exact(locale, key) {
            return template;
        }

        debug!(
            "No '{}' template for {}, using {}",
            key, locale, self.default
        );
        self.lookup_exact(self.default, key)
            .unwrap_or_else(|| key.as_str())
    }

    /// Look up a template without falling back.
    pub fn lookup_exact(&self, locale: Locale, key: MessageKey) -> Option<&'static str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(&key))
            .copied()
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }
}
