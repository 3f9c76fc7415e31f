//! Configuration layer for the `ding-robot` command.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! The webhook URL has no default and must come from one of the first two.
//! An empty secret from either source disables signing; the CLI can therefore
//! turn off a secret set in the file with `--secret ""`.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command};
pub use error::{ConfigError, field};
pub use toml::{RobotSection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
