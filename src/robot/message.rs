//! Outgoing message payloads.

use serde::{Serialize, Serializer};

use super::RobotError;

/// A plain-text message, optionally mentioning chat members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextMessage {
    /// Message text
    pub content: String,
    /// Phone numbers of members to mention, in order
    pub at_mobiles: Vec<String>,
    /// Mention every member of the chat
    pub at_all: bool,
}

impl TextMessage {
    /// Creates a text message with no mentions.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Adds a member to mention by phone number.
    #[must_use]
    pub fn mention(mut self, mobile: impl Into<String>) -> Self {
        self.at_mobiles.push(mobile.into());
        self
    }

    /// Sets whether every member of the chat is mentioned.
    #[must_use]
    pub const fn mention_all(mut self, at_all: bool) -> Self {
        self.at_all = at_all;
        self
    }
}

/// A markdown message with a title shown in notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownMessage {
    /// Notification title
    pub title: String,
    /// Markdown body
    pub text: String,
}

impl MarkdownMessage {
    /// Creates a markdown message.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// A message that can be posted to the robot.
///
/// The built-in variants always serialize with their fixed `msgtype`
/// discriminator. [`Message::Custom`] carries any other JSON object as-is,
/// for message types this crate does not model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// `msgtype: "text"`
    Text(TextMessage),
    /// `msgtype: "markdown"`
    Markdown(MarkdownMessage),
    /// A caller-supplied JSON object, sent verbatim
    Custom(serde_json::Value),
}

impl Message {
    /// Wraps an arbitrary serializable value as a custom message.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Serialization`] if the value cannot be encoded
    /// or does not encode to a JSON object.
    pub fn custom<T: Serialize + ?Sized>(value: &T) -> Result<Self, RobotError> {
        let value = serde_json::to_value(value).map_err(RobotError::Serialization)?;
        if !value.is_object() {
            return Err(RobotError::Serialization(serde::ser::Error::custom(
                "custom message must be a JSON object",
            )));
        }
        Ok(Self::Custom(value))
    }

    /// Returns the wire `msgtype`, if known.
    #[must_use]
    pub fn msg_type(&self) -> Option<&str> {
        match self {
            Self::Text(_) => Some("text"),
            Self::Markdown(_) => Some("markdown"),
            Self::Custom(value) => value.get("msgtype").and_then(serde_json::Value::as_str),
        }
    }

    /// Encodes the message to its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<Vec<u8>, RobotError> {
        serde_json::to_vec(self).map_err(RobotError::Serialization)
    }
}

impl From<TextMessage> for Message {
    fn from(message: TextMessage) -> Self {
        Self::Text(message)
    }
}

impl From<MarkdownMessage> for Message {
    fn from(message: MarkdownMessage) -> Self {
        Self::Markdown(message)
    }
}

#[derive(Serialize)]
#[serde(tag = "msgtype", rename_all = "lowercase")]
enum Wire<'a> {
    Text { text: TextBody<'a>, at: AtBody<'a> },
    Markdown { markdown: MarkdownBody<'a> },
}

#[derive(Serialize)]
struct TextBody<'a> {
    content: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AtBody<'a> {
    at_mobiles: &'a [String],
    is_at_all: bool,
}

#[derive(Serialize)]
struct MarkdownBody<'a> {
    title: &'a str,
    text: &'a str,
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(m) => Wire::Text {
                text: TextBody {
                    content: &m.content,
                },
                at: AtBody {
                    at_mobiles: &m.at_mobiles,
                    is_at_all: m.at_all,
                },
            }
            .serialize(serializer),
            Self::Markdown(m) => Wire::Markdown {
                markdown: MarkdownBody {
                    title: &m.title,
                    text: &m.text,
                },
            }
            .serialize(serializer),
            Self::Custom(value) => value.serialize(serializer),
        }
    }
}
