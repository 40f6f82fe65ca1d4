//! Configuration file support
//!
//! Loads settings from ~/.restyle.toml (or %USERPROFILE%\.restyle.toml on Windows)
//!
//! Example:
//! ```toml
//! # restyle configuration
//! profile = "csharp"
//! user = "Goblin Hammer"
//! phrases = "New York,New Jersey"
//! autofill_contextual = true
//! ```
//!
//! Keys that are present override the corresponding list of the profile.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{RestyleError, Result};
use crate::syntax::builtin::{self, Profile};
use crate::syntax::{KeywordRegistry, OperatorTable, Restyler};

const CONFIG_FILE: &str = ".restyle.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Built-in profile seeding the keyword lists (none for empty lists)
    pub profile: Option<String>,
    /// Space-delimited primary keywords
    pub keywords: Option<String>,
    /// Space-delimited contextual keywords
    pub contextual: Option<String>,
    /// Space-delimited user keywords
    pub user: Option<String>,
    /// Comma-delimited multi-word phrases
    pub phrases: Option<String>,
    /// Append the profile's ambient type names to the contextual set
    pub autofill_contextual: Option<bool>,
    /// Operator spellings, one or two characters each
    pub operators: Option<Vec<String>>,
    /// Words that start an import line
    pub import_directives: Option<Vec<String>>,
    /// Move local restyles back out of multi-line comments and strings
    pub extend_to_enclosing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: Some("csharp".to_string()),
            keywords: None,
            contextual: None,
            user: None,
            phrases: None,
            autofill_contextual: None,
            operators: None,
            import_directives: None,
            extend_to_enclosing: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the user's config file, or return defaults
    /// if it is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no home directory, using default configuration");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load configuration from `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The selected built-in profile, if any
    pub fn resolve_profile(&self) -> Result<Option<Profile>> {
        match self.profile.as_deref() {
            None | Some("") | Some("none") => Ok(None),
            Some(name) => builtin::profile(name)
                .map(Some)
                .ok_or_else(|| RestyleError::UnknownProfile(name.to_string())),
        }
    }

    /// Build the keyword registry described by this configuration
    pub fn registry(&self) -> Result<KeywordRegistry> {
        let profile = self.resolve_profile()?;

        let ambient = profile.map(|p| p.ambient_types).unwrap_or_default();
        let mut registry = KeywordRegistry::new().with_ambient_types(ambient.iter().copied());

        let keywords = self
            .keywords
            .as_deref()
            .or(profile.map(|p| p.keywords))
            .unwrap_or_default();
        let contextual = self
            .contextual
            .as_deref()
            .or(profile.map(|p| p.contextual))
            .unwrap_or_default();
        let autofill = self.autofill_contextual.unwrap_or(profile.is_some());

        registry.configure(
            keywords,
            contextual,
            self.user.as_deref().unwrap_or_default(),
            self.phrases.as_deref().unwrap_or_default(),
            autofill,
        );

        if let Some(operators) = &self.operators {
            registry.set_operators(OperatorTable::new(operators));
        }
        if let Some(directives) = &self.import_directives {
            registry.set_import_directives(directives.iter().cloned());
        }

        Ok(registry)
    }

    /// Build a restyler from this configuration
    pub fn restyler(&self) -> Result<Restyler> {
        let mut restyler = Restyler::new(self.registry()?);
        restyler.extend_to_enclosing = self.extend_to_enclosing;
        Ok(restyler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_csharp_profile() {
        let config = Config::default();
        let registry = config.registry().unwrap();
        assert!(registry.is_primary("class"));
        assert!(registry.is_contextual("Console"));
        assert!(registry.phrases().is_empty());
        assert!(config.restyler().unwrap().extend_to_enclosing);
    }

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml_str(
            r#"
# Comment
profile = "csharp"
user = "Goblin Hammer"
phrases = "New York, New Jersey"
autofill_contextual = false
extend_to_enclosing = false
            "#,
        )
        .unwrap();

        assert_eq!(config.user.as_deref(), Some("Goblin Hammer"));
        assert!(!config.extend_to_enclosing);

        let registry = config.registry().unwrap();
        assert!(registry.is_user("Hammer"));
        assert!(registry.is_primary("while"));
        assert!(!registry.is_contextual("Console"));
        assert_eq!(registry.phrases(), ["New York", "New Jersey"]);
    }

    #[test]
    fn test_explicit_keys_override_profile() {
        let config = Config::from_toml_str(
            r#"
keywords = "fn let"
operators = ["+", "::"]
import_directives = ["use"]
            "#,
        )
        .unwrap();

        let registry = config.registry().unwrap();
        assert!(registry.is_primary("fn"));
        assert!(!registry.is_primary("class"));
        assert_eq!(registry.operators().match_len(':', Some(':')), Some(2));
        assert_eq!(registry.operators().match_len('-', None), None);
        assert!(registry.is_import_line("use std::fmt;"));
        assert!(!registry.is_import_line("using System;"));
    }

    #[test]
    fn test_no_profile() {
        let config = Config::from_toml_str(r#"profile = "none""#).unwrap();
        let registry = config.registry().unwrap();
        assert!(!registry.is_primary("class"));
        assert!(!registry.is_contextual("Console"));
    }

    #[test]
    fn test_unknown_profile() {
        let config = Config::from_toml_str(r#"profile = "cobol""#).unwrap();
        assert!(matches!(
            config.registry(),
            Err(RestyleError::UnknownProfile(name)) if name == "cobol"
        ));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml_str("keywords = 3"),
            Err(RestyleError::Config(_))
        ));
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(RestyleError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "user = \"Goblin\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.user.as_deref(), Some("Goblin"));
        assert_eq!(config.profile.as_deref(), Some("csharp"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(RestyleError::Io(_))));
    }
}
