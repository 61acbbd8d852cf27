//! Shell configuration: document metadata shown around every page.

use thiserror::Error;

pub const TITLE_KEY: &str = "STOCKDESK_TITLE";
pub const DESCRIPTION_KEY: &str = "STOCKDESK_DESCRIPTION";
pub const LANG_KEY: &str = "STOCKDESK_LANG";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("shell title cannot be empty")]
    EmptyTitle,

    #[error("invalid document language tag: {0:?}")]
    InvalidLang(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: String,
    pub description: String,
    pub lang: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Inventory Dashboard Project".to_string(),
            description: "An Inventory Dashboard App build with React, TailwindCSS".to_string(),
            lang: "en".to_string(),
        }
    }
}

impl ShellConfig {
    /// Defaults overridden by whatever `lookup` returns for the known keys.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(title) = value(TITLE_KEY) {
            config.title = title;
        }
        if let Some(description) = value(DESCRIPTION_KEY) {
            config.description = description;
        }
        if let Some(lang) = value(LANG_KEY) {
            config.lang = lang.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Overrides baked in at compile time, so they also reach the WASM bundle.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                TITLE_KEY => option_env!("STOCKDESK_TITLE"),
                DESCRIPTION_KEY => option_env!("STOCKDESK_DESCRIPTION"),
                LANG_KEY => option_env!("STOCKDESK_LANG"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::EmptyTitle);
        }

        let lang_ok = !self.lang.is_empty()
            && self
                .lang
                .split('-')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !lang_ok {
            return Err(ConfigError::InvalidLang(self.lang.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_dashboard_metadata() {
        let config = ShellConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.title, "Inventory Dashboard Project");
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = ShellConfig::from_lookup(lookup(&[
            (TITLE_KEY, "Warehouse"),
            (LANG_KEY, " en-GB "),
        ]))
        .unwrap();
        assert_eq!(config.title, "Warehouse");
        assert_eq!(config.lang, "en-GB");
        assert_eq!(config.description, ShellConfig::default().description);
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = ShellConfig::from_lookup(lookup(&[(TITLE_KEY, "   ")])).unwrap();
        assert_eq!(config.title, "Inventory Dashboard Project");
    }

    #[test]
    fn malformed_lang_is_rejected() {
        for lang in ["en_US", "en-", "fr!"] {
            let err = ShellConfig::from_lookup(lookup(&[(LANG_KEY, lang)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidLang(lang.to_string()));
        }
    }

    #[test]
    fn empty_title_fails_validation() {
        let config = ShellConfig {
            title: String::new(),
            ..ShellConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyTitle));
    }

    #[test]
    fn build_env_config_is_valid() {
        assert!(ShellConfig::from_build_env().is_ok());
    }
}
