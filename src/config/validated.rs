//! Validated configuration after merging CLI and TOML sources.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use url::Url;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Robot webhook URL, kept verbatim so the signature suffix can be appended
    pub webhook: String,

    /// Signing secret; `None` when unset or empty
    pub secret: Option<String>,

    /// HTTP request timeout
    pub timeout: Duration,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Strip the query string; it carries the access token.
        let endpoint = self.webhook.split('?').next().unwrap_or_default();
        let signing = if self.secret.is_some() { "on" } else { "off" };

        write!(
            f,
            "Config {{ webhook: {endpoint}, signing: {signing}, timeout: {}s }}",
            self.timeout.as_secs(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or not an absolute URL
    /// - The timeout is zero
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let webhook = Self::resolve_webhook(cli, toml)?;
        let secret = Self::resolve_secret(cli, toml);
        let timeout = Self::resolve_timeout(cli, toml)?;

        Ok(Self {
            webhook,
            secret,
            timeout,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_webhook(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let webhook = cli
            .webhook
            .as_deref()
            .or_else(|| toml.and_then(|t| t.robot.webhook.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(
                    field::WEBHOOK,
                    "Use --webhook or set robot.webhook in config file",
                )
            })?;

        let url = Url::parse(webhook).map_err(|e| ConfigError::InvalidUrl {
            url: webhook.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: webhook.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(webhook.to_string())
    }

    fn resolve_secret(cli: &Cli, toml: Option<&TomlConfig>) -> Option<String> {
        cli.secret
            .as_deref()
            .or_else(|| toml.and_then(|t| t.robot.secret.as_deref()))
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.robot.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::TIMEOUT,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
