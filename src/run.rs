//! Application execution logic.
//!
//! Builds a robot from the validated configuration and delivers the one
//! message named on the command line.

use thiserror::Error;

use ding_robot::config::{Command, ValidatedConfig};
use ding_robot::robot::{
    MarkdownMessage, Message, MessageSender, ReqwestClient, RobotError, TextMessage, WebhookRobot,
};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The robot did not accept the message.
    #[error("Failed to send message: {0}")]
    Send(#[source] RobotError),
}

/// Converts a send subcommand into the message it describes.
///
/// Returns `None` for commands that do not send anything.
pub fn message_for(command: &Command) -> Option<Message> {
    match command {
        Command::Text {
            content,
            at_mobiles,
            at_all,
        } => Some(
            TextMessage {
                content: content.clone(),
                at_mobiles: at_mobiles.clone(),
                at_all: *at_all,
            }
            .into(),
        ),
        Command::Markdown { title, text } => Some(MarkdownMessage::new(title, text).into()),
        Command::Init { .. } => None,
    }
}

/// Builds the production robot described by `config`.
///
/// # Errors
///
/// Returns [`RunError::ClientBuild`] if the HTTP client cannot be constructed.
pub fn build_robot(config: &ValidatedConfig) -> Result<WebhookRobot, RunError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(RunError::ClientBuild)?;

    let mut robot = WebhookRobot::new(ReqwestClient::from_client(client), config.webhook.clone());
    if let Some(secret) = &config.secret {
        robot.set_secret(secret.clone());
    }
    Ok(robot)
}

/// Delivers `message` through any sender, logging the outcome.
///
/// # Errors
///
/// Returns [`RunError::Send`] with the sender's error.
pub async fn deliver<S: MessageSender>(sender: &S, message: &Message) -> Result<(), RunError> {
    let msgtype = message.msg_type().unwrap_or("custom");

    match sender.send(message).await {
        Ok(()) => {
            tracing::info!(msgtype, "Message delivered");
            Ok(())
        }
        Err(e) => {
            if e.is_retryable() {
                tracing::warn!(msgtype, "Delivery failed with a transient error; safe to retry");
            }
            Err(RunError::Send(e))
        }
    }
}

/// Executes a single send.
///
/// # Errors
///
/// Returns [`RunError`] if the robot cannot be built or the send fails.
pub async fn execute(config: ValidatedConfig, message: Message) -> Result<(), RunError> {
    let robot = build_robot(&config)?;
    deliver(&robot, &message).await
}
