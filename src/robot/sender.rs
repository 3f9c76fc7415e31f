//! Message sender trait and webhook robot implementation.

use std::fmt;

use crate::time::{Clock, SystemClock, unix_millis};

use super::{
    HttpClient, HttpError, HttpRequest, MarkdownMessage, Message, ReqwestClient, ResponseEnvelope,
    RobotError, TextMessage, sign,
};

/// Trait for posting messages to a chat.
///
/// This abstraction lets callers depend on "something that delivers a
/// [`Message`]" and substitute a mock in their own tests.
pub trait MessageSender: Send + Sync {
    /// Delivers one message.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError`] describing the first failure. No retries are
    /// attempted.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), RobotError>> + Send;
}

/// A client bound to one robot webhook endpoint.
///
/// Holds the endpoint URL and an optional signing secret. Each send is an
/// independent POST; the reply's `errcode` decides success regardless of the
/// HTTP status.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
/// - `C`: The clock used for signature timestamps (defaults to [`SystemClock`])
///
/// # Example
///
/// ```no_run
/// use ding_robot::robot::WebhookRobot;
///
/// # async fn example() -> Result<(), ding_robot::robot::RobotError> {
/// let robot = WebhookRobot::from_endpoint(
///     "https://oapi.dingtalk.com/robot/send?access_token=abc",
/// )
/// .with_secret("SEC0123");
///
/// robot.send_text("deploy finished", &["13800000000"], false).await?;
/// robot.send_markdown("Release", "**v1.2.0** is live").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct WebhookRobot<H = ReqwestClient, C = SystemClock> {
    client: H,
    clock: C,
    endpoint: String,
    secret: String,
}

impl<H: fmt::Debug, C: fmt::Debug> fmt::Debug for WebhookRobot<H, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookRobot")
            .field("client", &self.client)
            .field("clock", &self.clock)
            .field("endpoint", &self.endpoint)
            .field("signed", &self.is_signed())
            .finish_non_exhaustive()
    }
}

impl WebhookRobot<ReqwestClient, SystemClock> {
    /// Creates a robot using the default reqwest transport.
    #[must_use]
    pub fn from_endpoint(endpoint: impl Into<String>) -> Self {
        Self::new(ReqwestClient::new(), endpoint)
    }
}

impl<H> WebhookRobot<H, SystemClock> {
    /// Creates an unsigned robot that posts through `client`.
    #[must_use]
    pub fn new(client: H, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            clock: SystemClock,
            endpoint: endpoint.into(),
            secret: String::new(),
        }
    }
}

impl<H, C> WebhookRobot<H, C> {
    /// Sets a custom clock for signature timestamps.
    ///
    /// This is primarily useful for testing to get reproducible URLs.
    #[must_use]
    pub fn with_clock<C2>(self, clock: C2) -> WebhookRobot<H, C2> {
        WebhookRobot {
            client: self.client,
            clock,
            endpoint: self.endpoint,
            secret: self.secret,
        }
    }

    /// Sets the signing secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.set_secret(secret);
        self
    }

    /// Replaces the signing secret for all subsequent sends.
    ///
    /// An empty secret disables signing.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = secret.into();
    }

    /// Returns the endpoint exactly as configured.
    ///
    /// The URL actually requested is the parsed form; see [`Self::request_url`].
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns true if requests will carry a signature.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        !self.secret.is_empty()
    }
}

impl<H: HttpClient, C: Clock> WebhookRobot<H, C> {
    /// Sends a markdown message.
    ///
    /// # Errors
    ///
    /// See [`MessageSender::send`].
    pub async fn send_markdown(&self, title: &str, text: &str) -> Result<(), RobotError> {
        self.send(&MarkdownMessage::new(title, text).into()).await
    }

    /// Sends a text message, mentioning members by phone number and/or everyone.
    ///
    /// # Errors
    ///
    /// See [`MessageSender::send`].
    pub async fn send_text(
        &self,
        content: &str,
        at_mobiles: &[&str],
        at_all: bool,
    ) -> Result<(), RobotError> {
        let message = TextMessage {
            content: content.to_string(),
            at_mobiles: at_mobiles.iter().map(ToString::to_string).collect(),
            at_all,
        };
        self.send(&message.into()).await
    }

    /// Resolves the URL for the next request, signing it if a secret is set.
    ///
    /// The result is the endpoint (plus any signature suffix) parsed as a
    /// [`url::Url`], so it is normalized: scheme and host are lowercased,
    /// default ports are dropped, an empty path becomes `/`, and unescaped
    /// characters such as spaces are percent-encoded. An endpoint already in
    /// that form is requested byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Transport`] with [`HttpError::InvalidUrl`] if the
    /// result does not parse, or [`RobotError::Signing`].
    pub fn request_url(&self) -> Result<url::Url, RobotError> {
        let raw = if self.is_signed() {
            let suffix = sign::signed_suffix(&self.secret, unix_millis(&self.clock))?;
            format!("{}{suffix}", self.endpoint)
        } else {
            self.endpoint.clone()
        };

        url::Url::parse(&raw).map_err(|e| {
            RobotError::from(HttpError::InvalidUrl(format!("{}: {e}", self.endpoint)))
        })
    }

    /// Builds the complete POST request for `message`.
    ///
    /// # Errors
    ///
    /// Returns [`RobotError::Serialization`] or any error from [`Self::request_url`].
    pub fn build_request(&self, message: &Message) -> Result<HttpRequest, RobotError> {
        let body = message.to_json()?;
        let url = self.request_url()?;
        Ok(HttpRequest::post_json(url, body))
    }
}

impl<H: HttpClient, C: Clock> MessageSender for WebhookRobot<H, C> {
    async fn send(&self, message: &Message) -> Result<(), RobotError> {
        let request = self.build_request(message)?;

        tracing::debug!(
            msgtype = message.msg_type().unwrap_or("custom"),
            signed = self.is_signed(),
            "Posting robot message"
        );

        let response = self.client.request(request).await?;
        tracing::debug!(status = %response.status, "Robot replied");

        let envelope = ResponseEnvelope::parse(&response.body)?;
        if !envelope.is_success() {
            tracing::debug!(errcode = envelope.code, "Robot rejected message");
        }
        envelope.into_result()
    }
}
