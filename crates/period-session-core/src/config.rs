//! Configuration types for the session facade.

use std::path::Path;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::StartOptions;
use crate::{Error, Result};

/// Characters a session name may contain.
const NAME_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

/// Facade configuration loaded from YAML.
///
/// ```yaml
/// name: APPSESSID
/// autostart: false
/// options:
///   cookie_path: /app
///   cookie_httponly: true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FacadeConfig {
    /// Session name applied before the store is started
    pub name: Option<String>,
    /// Start the store when the facade is constructed
    pub autostart: bool,
    /// Overrides passed to the store on autostart
    pub options: StartOptions,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            name: None,
            autostart: true,
            options: StartOptions::default(),
        }
    }
}

impl FacadeConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: FacadeConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        Ok(())
    }
}

/// Check that a session name is usable as a client token name.
///
/// A name must be non-empty, use only ASCII alphanumerics, `_` or `-`, and
/// contain at least one non-digit.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config("session name cannot be empty".to_string()));
    }

    let pattern = Regex::new(NAME_PATTERN)
        .map_err(|e| Error::Config(format!("Invalid name pattern: {e}")))?;
    if !pattern.is_match(name) {
        return Err(Error::Config(format!(
            "session name '{name}' may only contain letters, digits, '_' and '-'"
        )));
    }

    if name.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Config(format!(
            "session name '{name}' cannot consist only of digits"
        )));
    }

    Ok(())
}
