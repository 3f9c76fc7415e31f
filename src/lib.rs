//! ding-robot: chat-bot webhook client
//!
//! A library for posting text and markdown messages to a chat robot's
//! webhook, optionally signing each request with a time-bound HMAC.

pub mod config;
pub mod robot;
pub mod time;
