//! Catalog coverage checks.
//!
//! Run when the catalog is built. Gaps in the default locale are errors,
//! since nothing can fall back from there. Gaps elsewhere, and templates
//! whose placeholders disagree with the default's, are warnings.

use crate::i18n::format::placeholders;
use crate::i18n::{LocaleRegistry, MessageCatalog, MessageKey};

/// Validation report containing errors and warnings about a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the catalog unusable
    pub errors: Vec<String>,

    /// Problems that only degrade output (e.g. falling back to the default)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Coverage validator for message catalogs.
pub struct CatalogValidator;

impl CatalogValidator {
    /// Check a catalog against every supported locale in `registry`.
    ///
    /// This function checks that:
    /// - the default locale has a non-empty template for every key
    /// - other locales cover every key (missing ones fall back)
    /// - other locales use the same placeholders as the default
    pub fn validate(catalog: &MessageCatalog, registry: &LocaleRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();
        let default = catalog.default_locale();

        for key in MessageKey::ALL {
            match catalog.lookup_exact(default, key) {
                None => report.errors.push(format!(
                    "Missing template for '{}' in default locale '{}'",
                    key, default
                )),
                Some(template) if template.trim().is_empty() => report.errors.push(format!(
                    "Empty template for '{}' in default locale '{}'",
                    key, default
                )),
                Some(_) => {}
            }
        }

        for locale in registry.list().filter(|locale| *locale != default) {
            for key in MessageKey::ALL {
                let Some(template) = catalog.lookup_exact(locale, key) else {
                    report.warnings.push(format!(
                        "No template for '{}' in '{}', falling back to '{}'",
                        key, locale, default
                    ));
                    continue;
                };

                if let Some(reference) = catalog.lookup_exact(default, key) {
                    let expected = placeholders(reference);
                    let found = placeholders(template);
                    if expected != found {
                        report.warnings.push(format!(
                            "Placeholder mismatch for '{}' in '{}': default has {:?}, found {:?}",
                            key, locale, expected, found
                        ));
                    }
                }
            }
        }

        report
    }

    /// Keys with no template at all in the catalog's default locale.
    pub fn missing_default_keys(catalog: &MessageCatalog) -> Vec<MessageKey> {
        MessageKey::ALL
            .into_iter()
            .filter(|key| catalog.lookup_exact(catalog.default_locale(), *key).is_none())
            .collect()
    }
}
