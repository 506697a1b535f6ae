//! Client configuration with YAML support

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::transport::{ConnectionTarget, DEFAULT_USER_AGENT};

/// InfoMark client configuration
///
/// Can be loaded from YAML or JSON, or constructed programmatically.
///
/// ```yaml
/// connection:
///   host: "localhost"
///   port: 2020
///   ssl: false
/// timeouts:
///   request_ms: 30000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Where requests go
    pub connection: ConnectionConfig,

    /// User agent header (defaults to `infomark-client/<version>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Optional timeouts, none by default
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
}

/// Connection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,

    /// Use HTTPS (default: true)
    #[serde(default = "default_ssl")]
    pub ssl: bool,
}

fn default_ssl() -> bool {
    true
}

/// Timeout configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    /// Whole-request timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_ms: Option<u64>,

    /// Connect timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_ms: Option<u64>,
}

impl TimeoutsConfig {
    pub fn request(&self) -> Option<Duration> {
        self.request_ms.map(Duration::from_millis)
    }

    pub fn connect(&self) -> Option<Duration> {
        self.connect_ms.map(Duration::from_millis)
    }
}

impl ClientConfig {
    /// Minimal configuration for a host and port over HTTPS
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            connection: ConnectionConfig {
                host: host.into(),
                port,
                ssl: default_ssl(),
            },
            user_agent: None,
            timeouts: TimeoutsConfig::default(),
        }
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Serialize configuration to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError(e.to_string()))
    }

    /// Create a builder for programmatic configuration
    pub fn builder(host: impl Into<String>, port: u16) -> ClientConfigBuilder {
        ClientConfigBuilder::new(host, port)
    }

    /// Connection target described by this configuration
    pub fn target(&self) -> ConnectionTarget {
        ConnectionTarget::new(
            self.connection.host.clone(),
            self.connection.port,
            self.connection.ssl,
        )
    }

    /// Effective user agent
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

/// Builder for ClientConfig
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            config: ClientConfig::new(host, port),
        }
    }

    /// Use HTTPS (true) or plain HTTP (false)
    pub fn ssl(mut self, ssl: bool) -> Self {
        self.config.connection.ssl = ssl;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set request timeout in milliseconds
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeouts.request_ms = Some(ms);
        self
    }

    /// Set connect timeout in milliseconds
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.timeouts.connect_ms = Some(ms);
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::transport::Scheme;

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
connection:
  host: "localhost"
  port: 2020
  ssl: false

user_agent: "grader/1.0"

timeouts:
  request_ms: 5000
"#;

        let config = ClientConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.connection.host, "localhost");
        assert_eq!(config.connection.port, 2020);
        assert!(!config.connection.ssl);
        assert_eq!(config.user_agent(), "grader/1.0");
        assert_eq!(config.timeouts.request(), Some(Duration::from_secs(5)));
        assert_eq!(config.timeouts.connect(), None);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_yaml("connection:\n  host: infomark.org\n  port: 443\n").unwrap();
        assert!(config.connection.ssl);
        assert!(config.user_agent().starts_with("infomark-client/"));
        assert_eq!(config.timeouts, TimeoutsConfig::default());
        assert_eq!(config.target().scheme(), Scheme::Https);
    }

    #[test]
    fn test_json_parsing() {
        let json = r#"{"connection":{"host":"127.0.0.1","port":8080,"ssl":false}}"#;
        let config = ClientConfig::from_json(json).unwrap();
        assert_eq!(config.target().origin(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder("localhost", 2020)
            .ssl(false)
            .user_agent("tests")
            .request_timeout_ms(1_000)
            .connect_timeout_ms(250)
            .build();

        assert_eq!(config.target().origin(), "http://localhost:2020");
        assert_eq!(config.user_agent(), "tests");
        assert_eq!(config.timeouts.request_ms, Some(1_000));
        assert_eq!(config.timeouts.connect(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_missing_port_is_parse_error() {
        let err = ClientConfig::from_yaml("connection:\n  host: localhost\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_yaml_file_roundtrip() {
        let config = ClientConfig::builder("localhost", 2020).ssl(false).build();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("host: localhost"));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        let loaded = ClientConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let err = ClientConfig::from_yaml_file("/nonexistent/infomark.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
