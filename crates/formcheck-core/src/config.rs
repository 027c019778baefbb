use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".formcheck.toml";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Alias \"{alias}\" targets unknown field \"{target}\"")]
    UnknownAliasTarget { alias: String, target: String },
    #[error("Invalid output format: {0} (expected \"human\" or \"json\")")]
    InvalidFormat(String),
}

/// Output formats understood by the CLI
pub fn check_format(format: &str) -> std::result::Result<(), ConfigError> {
    match format {
        "human" | "json" => Ok(()),
        other => Err(ConfigError::InvalidFormat(other.to_string())),
    }
}

/// Configuration for formcheck
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormCheckConfig {
    #[serde(default)]
    pub output: OutputOptions,
    /// Submitted field name -> rule field name, e.g. `cpf = "identification_number"`
    pub aliases: Option<HashMap<String, String>>,
    pub ignore: Option<IgnoreOptions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputOptions {
    pub format: String, // "human", "json"
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreOptions {
    /// Fields skipped entirely, blank or not (hidden tokens, submit buttons)
    pub fields: Option<Vec<String>>,
}

impl FormCheckConfig {
    /// Load config from file or use defaults
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        if let Some(path) = config_path {
            let content = fs::read_to_string(path)
                .context(format!("Failed to read config file: {}", path))?;
            toml::from_str(&content).context("Failed to parse config file")
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            let content = fs::read_to_string(DEFAULT_CONFIG_FILE)?;
            toml::from_str(&content).context(format!("Failed to parse {}", DEFAULT_CONFIG_FILE))
        } else {
            Ok(Self::default())
        }
    }

    /// Check aliases and output format against the known rule field names
    pub fn validate(&self, known_fields: &[&str]) -> std::result::Result<(), ConfigError> {
        check_format(&self.output.format)?;

        if let Some(aliases) = &self.aliases {
            for (alias, target) in aliases {
                if !known_fields.contains(&target.as_str()) {
                    return Err(ConfigError::UnknownAliasTarget {
                        alias: alias.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Name used for rule dispatch; unaliased names map to themselves
    pub fn resolve_field<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .as_ref()
            .and_then(|aliases| aliases.get(name))
            .map(String::as_str)
            .unwrap_or(name)
    }

    /// Check if a field should be skipped
    pub fn should_ignore(&self, name: &str) -> bool {
        self.ignore
            .as_ref()
            .and_then(|ignore| ignore.fields.as_ref())
            .map_or(false, |fields| fields.iter().any(|f| f == name))
    }

    /// Save config to file
    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).context(format!("Failed to write config file: {}", path))?;
        Ok(())
    }
}
