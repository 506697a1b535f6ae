//! Configuration file handling for infomark-cli

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 2020;

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// InfoMark server host
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Use HTTPS (defaults to true)
    pub ssl: Option<bool>,
    /// Default output format
    pub output: Option<String>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("infomark-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(
        &self,
        host: Option<&str>,
        port: Option<u16>,
        insecure: bool,
        output: Option<&str>,
    ) -> MergedConfig {
        MergedConfig {
            host: host
                .map(String::from)
                .or_else(|| self.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(self.port).unwrap_or(DEFAULT_PORT),
            ssl: !insecure && self.ssl.unwrap_or(true),
            output: output
                .map(String::from)
                .or_else(|| self.output.clone())
                .unwrap_or_else(|| "table".to_string()),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub host: String,
    pub port: u16,
    pub ssl: bool,
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "host = \"infomark.example.org\"\nport = 443\noutput = \"json\""
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.host.as_deref(), Some("infomark.example.org"));
        assert_eq!(config.port, Some(443));
        assert_eq!(config.ssl, None);
        assert_eq!(config.output.as_deref(), Some("json"));
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_merge_defaults() {
        let merged = Config::default().merge_with_args(None, None, false, None);
        assert_eq!(
            merged,
            MergedConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                ssl: true,
                output: "table".to_string(),
            }
        );
    }

    #[test]
    fn test_args_override_file() {
        let config = Config {
            host: Some("file-host".to_string()),
            port: Some(8080),
            ssl: Some(true),
            output: Some("json".to_string()),
        };

        let merged = config.merge_with_args(Some("arg-host"), None, true, Some("table"));
        assert_eq!(merged.host, "arg-host");
        assert_eq!(merged.port, 8080);
        assert!(!merged.ssl);
        assert_eq!(merged.output, "table");
    }

    #[test]
    fn test_file_can_disable_ssl() {
        let config = Config {
            ssl: Some(false),
            ..Default::default()
        };
        assert!(!config.merge_with_args(None, None, false, None).ssl);
    }
}
