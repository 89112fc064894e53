//! Locale negotiation: turn a raw language hint into a supported locale.
//!
//! A hint is anything that came in with the request: a `culture` query
//! value, or an `Accept-Language` header. Both are read as a preference
//! list (`ru-RU, en;q=0.8`), so a single bare code is just the one-entry
//! case.

use crate::i18n::{Locale, LocaleRegistry};

/// Only this many preference entries are tried from a single hint.
const MAX_PREFERENCES: usize = 3;

/// Resolves request hints against a [`LocaleRegistry`].
#[derive(Debug, Clone)]
pub struct LocaleNegotiator {
    registry: LocaleRegistry,
}

impl LocaleNegotiator {
    pub fn new(registry: LocaleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Resolve a hint to a supported locale, falling back to the default.
    ///
    /// Never fails: absent, malformed, or unsupported hints all yield the
    /// registry's default locale.
    pub fn resolve(&self, hint: Option<&str>) -> Locale {
        hint.and_then(|hint| self.try_match(hint))
            .unwrap_or_else(|| self.registry.default_locale())
    }

    /// Resolve the first hint that matches, in the order given.
    pub fn resolve_first<'a, I>(&self, hints: I) -> Locale
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        hints
            .into_iter()
            .flatten()
            .find_map(|hint| self.try_match(hint))
            .unwrap_or_else(|| self.registry.default_locale())
    }

    /// Match a hint against the supported set without falling back.
    pub fn try_match(&self, hint: &str) -> Option<Locale> {
        parse_preferences(hint)
            .into_iter()
            .take(MAX_PREFERENCES)
            .find_map(|tag| self.match_tag(tag))
    }

    /// Match one language tag, trying the tag itself then its parent
    /// (`ru-RU` -> `ru`).
    fn match_tag(&self, tag: &str) -> Option<Locale> {
        if let Some(locale) = self.registry.find(tag) {
            return Some(locale);
        }

        let primary = tag.split(['-', '_']).next()?;
        if primary.len() == tag.len() {
            return None;
        }
        self.registry.find(primary)
    }
}

/// Split a preference list into tags ordered by descending weight.
///
/// Entries with a zero or unparsable weight are dropped, as is `*`. Equal
/// weights keep their original order.
fn parse_preferences(hint: &str) -> Vec<&str> {
    let mut entries: Vec<(&str, f32)> = hint
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let mut weight = 1.0;
            for param in parts {
                let param = param.trim();
                if let Some(value) = param.strip_prefix("q=") {
                    weight = value.trim().parse::<f32>().ok()?;
                }
            }

            (weight > 0.0).then_some((tag, weight))
        })
        .collect();

    // Stable sort keeps header order for ties
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries.into_iter().map(|(tag, _)| tag).collect()
}
