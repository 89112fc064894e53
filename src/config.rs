use anyhow::{bail, Context, Result};

use crate::i18n::SUPPORTED_LOCALES;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Localization
    pub default_locale: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(value) => value
                    .trim()
                    .parse()
                    .with_context(|| format!("PORT must be a port number, got '{}'", value))?,
                Err(_) => 8080,
            },

            // Localization
            default_locale: std::env::var("DEFAULT_LOCALE")
                .map(|code| code.trim().to_string())
                .unwrap_or_else(|_| "en".to_string()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check settings that can be rejected before anything is built.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_LOCALES
            .iter()
            .any(|locale| locale.code == self.default_locale)
        {
            let supported: Vec<_> = SUPPORTED_LOCALES.iter().map(|locale| locale.code).collect();
            bail!(
                "DEFAULT_LOCALE '{}' is not supported (expected one of: {})",
                self.default_locale,
                supported.join(", ")
            );
        }
        Ok(())
    }

    /// Address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
