//! Internationalization (i18n) module.
//!
//! Everything needed to answer a request in the caller's language: the set
//! of supported locales, negotiation of a request hint against that set, the
//! compiled message tables, and placeholder formatting.
//!
//! # Architecture
//!
//! - `registry`: Supported locales and the configured default
//! - `locale`: `Locale` type, only constructible for supported codes
//! - `negotiator`: Request hint -> `Locale`, always succeeds
//! - `strings`: `MessageKey` and the compiled per-locale template tables
//! - `catalog`: Template store with default-locale fallback
//! - `validator`: Coverage checks run when the catalog is built
//! - `format`: `{0}`-style positional substitution
//! - `localizer`: The `Localize` contract handlers are written against
//!
//! # Example
//!
//! ```rust,ignore
//! use localized_auth::i18n::{Localize, Localizer, MessageKey};
//!
//! let localizer = Localizer::with_default("en")?;
//! let locale = localizer.resolve(Some("ru-RU,en;q=0.5"));
//! let text = localizer.localize(locale, MessageKey::MessageUserLoggedin, &["a@b.com"]);
//! ```

mod catalog;
mod format;
mod locale;
mod localizer;
mod negotiator;
mod registry;
mod strings;
mod validator;

pub use catalog::MessageCatalog;
pub use format::{format_message, placeholders};
pub use locale::Locale;
pub use localizer::{Localize, Localizer};
pub use negotiator::LocaleNegotiator;
pub use registry::{LocaleConfig, LocaleRegistry, SUPPORTED_LOCALES};
pub use strings::{MessageKey, MessageTable, BUILTIN_TABLES, ENGLISH_MESSAGES, RUSSIAN_MESSAGES};
pub use validator::{CatalogValidator, ValidationReport};
