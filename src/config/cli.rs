//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// Post a message to a chat-bot webhook.
///
/// Sends one text or markdown message and reports whether the robot
/// accepted it.
#[derive(Debug, Parser)]
#[command(name = "ding-robot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Robot webhook URL, including its access token query string
    #[arg(long, global = true)]
    pub webhook: Option<String>,

    /// Signing secret (empty string disables signing)
    #[arg(long, global = true)]
    pub secret: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for ding-robot
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a plain-text message
    Text {
        /// Message text
        content: String,

        /// Phone number of a member to mention (can be specified multiple times)
        #[arg(long = "at", value_name = "MOBILE")]
        at_mobiles: Vec<String>,

        /// Mention every member of the chat
        #[arg(long = "at-all")]
        at_all: bool,
    },

    /// Send a markdown message
    Markdown {
        /// Title shown in notifications
        #[arg(long)]
        title: String,

        /// Markdown body
        text: String,
    },

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
