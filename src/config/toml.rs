//! TOML configuration file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Robot configuration section
    #[serde(default)]
    pub robot: RobotSection,
}

/// Robot configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotSection {
    /// Webhook URL
    pub webhook: Option<String>,

    /// Signing secret
    pub secret: Option<String>,

    /// HTTP request timeout in seconds
    pub timeout: Option<u64>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ding-robot configuration file

[robot]
# Robot webhook URL, including the access token (required)
# webhook = "https://oapi.dingtalk.com/robot/send?access_token=YOUR_TOKEN"

# Signing secret from the robot's security settings.
# Leave unset or empty if the robot does not use signed requests.
# secret = "SEC..."

# HTTP request timeout in seconds (default: 10)
# timeout = 10
"#
    .to_string()
}
