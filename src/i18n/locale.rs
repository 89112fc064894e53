//! Locale type: a language code known to be in the supported set.

use std::fmt;

/// A supported locale.
///
/// Values are only produced by the registry (or the constants below), so
/// holding a `Locale` means the code is one the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// ISO 639-1 language code (e.g., "en", "ru")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };

    pub const RUSSIAN: Locale = Locale { code: "ru" };

    pub(crate) const fn new(code: &'static str) -> Self {
        Self { code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
