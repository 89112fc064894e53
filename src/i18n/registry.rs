//! Locale registry: the fixed set of locales the service can answer in.
//!
//! The registry is built once at startup with the configured default and
//! handed to whatever needs it. It never changes afterwards.

use crate::error::I18nError;
use crate::i18n::Locale;

/// Metadata for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// ISO 639-1 language code (e.g., "en", "ru")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Russian")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "Русский")
    pub native_name: &'static str,
}

/// Supported locales, in preference order.
pub const SUPPORTED_LOCALES: &[LocaleConfig] = &[
    LocaleConfig {
        code: "en",
        name: "English",
        native_name: "English",
    },
    LocaleConfig {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
    },
];

/// The supported locale set together with its designated default.
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    locales: &'static [LocaleConfig],
    default: Locale,
}

impl LocaleRegistry {
    /// Build a registry over [`SUPPORTED_LOCALES`].
    ///
    /// # Errors
    /// Returns `I18nError::UnsupportedLocale` if `default_code` is not one of
    /// the supported codes.
    pub fn new(default_code: &str) -> Result<Self, I18nError> {
        Self::with_locales(SUPPORTED_LOCALES, default_code)
    }

    /// Build a registry over an explicit locale table.
    pub fn with_locales(
        locales: &'static [LocaleConfig],
        default_code: &str,
    ) -> Result<Self, I18nError> {
        let default = locales
            .iter()
            .find(|config| config.code == default_code)
            .map(|config| Locale::new(config.code))
            .ok_or_else(|| I18nError::UnsupportedLocale(default_code.to_string()))?;

        Ok(Self { locales, default })
    }

    /// Get a locale configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&'static LocaleConfig> {
        self.locales.iter().find(|config| config.code == code)
    }

    /// Find a supported locale by code, ignoring ASCII case.
    pub fn find(&self, code: &str) -> Option<Locale> {
        self.locales
            .iter()
            .find(|config| config.code.eq_ignore_ascii_case(code))
            .map(|config| Locale::new(config.code))
    }

    /// All supported locales, in preference order.
    pub fn list(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.iter().map(|config| Locale::new(config.code))
    }

    /// The locale used when nothing better matches.
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_english_default() {
        let registry = LocaleRegistry::new("en").expect("en is supported");
        assert_eq!(registry.default_locale().code(), "en");
    }

    #[test]
    fn test_new_with_russian_default() {
        let registry = LocaleRegistry::new("ru").expect("ru is supported");
        assert_eq!(registry.default_locale().code(), "ru");
    }

    #[test]
    fn test_new_rejects_unsupported_default() {
        let err = LocaleRegistry::new("fr").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale(ref code) if code == "fr"));
    }

    #[test]
    fn test_new_rejects_empty_default() {
        assert!(LocaleRegistry::new("").is_err());
    }

    #[test]
    fn test_get_by_code_russian() {
        let registry = LocaleRegistry::new("en").unwrap();
        let config = registry.get_by_code("ru").expect("ru present");
        assert_eq!(config.name, "Russian");
        assert_eq!(config.native_name, "Русский");
    }

    #[test]
    fn test_get_by_code_is_case_sensitive() {
        let registry = LocaleRegistry::new("en").unwrap();
        assert!(registry.get_by_code("RU").is_none());
    }

    #[test]
    fn test_find_ignores_case() {
        let registry = LocaleRegistry::new("en").unwrap();
        assert_eq!(registry.find("RU"), Some(Locale::new("ru")));
        assert_eq!(registry.find("fr"), None);
    }

    #[test]
    fn test_list_preserves_order() {
        let registry = LocaleRegistry::new("en").unwrap();
        let codes: Vec<_> = registry.list().map(|locale| locale.code()).collect();
        assert_eq!(codes, vec!["en", "ru"]);
    }

    #[test]
    fn test_default_is_always_supported() {
        for config in SUPPORTED_LOCALES {
            let registry = LocaleRegistry::new(config.code).unwrap();
            assert!(registry.is_supported(registry.default_locale().code()));
        }
    }

    #[test]
    fn test_is_supported_nonexistent() {
        let registry = LocaleRegistry::new("en").unwrap();
        assert!(!registry.is_supported("fr"));
    }
}
