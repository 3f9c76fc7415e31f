//! Chat-bot webhook client.
//!
//! This module provides types and traits for:
//! - Modelling outgoing messages ([`Message`], [`TextMessage`], [`MarkdownMessage`])
//! - Signing request URLs with a shared secret ([`sign`])
//! - Abstracting HTTP clients ([`HttpClient`], [`HttpRequest`], [`HttpResponse`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Delivering messages and interpreting the reply ([`MessageSender`], [`WebhookRobot`])

mod client;
mod error;
mod http;
mod message;
mod response;
mod sender;
pub mod sign;

#[cfg(test)]
mod error_tests;
#[cfg(test)]
mod sign_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, RobotError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use message::{MarkdownMessage, Message, TextMessage};
pub use response::ResponseEnvelope;
pub use sender::{MessageSender, WebhookRobot};
