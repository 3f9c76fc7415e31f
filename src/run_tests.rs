//! Tests for the run module.

use super::*;
use ding_robot::config::Cli;
use ding_robot::robot::HttpError;
use std::sync::Mutex;

const WEBHOOK: &str = "https://oapi.dingtalk.com/robot/send?access_token=abc";

fn make_config(extra: &[&str]) -> ValidatedConfig {
    let mut args = vec!["ding-robot", "--webhook", WEBHOOK];
    args.extend(extra);
    args.extend(["text", "hi"]);
    ValidatedConfig::from_raw(&Cli::parse_from_iter(args), None).unwrap()
}

/// Sender that records messages and returns a canned outcome.
struct RecordingSender {
    sent: Mutex<Vec<Message>>,
    fail_with: Mutex<Option<RobotError>>,
}

impl RecordingSender {
    fn ok() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    fn failing(error: RobotError) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Mutex::new(Some(error)),
        }
    }
}

impl MessageSender for RecordingSender {
    async fn send(&self, message: &Message) -> Result<(), RobotError> {
        self.sent.lock().unwrap().push(message.clone());
        self.fail_with.lock().unwrap().take().map_or(Ok(()), Err)
    }
}

mod message_for_command {
    use super::*;

    #[test]
    fn text_command_builds_text_message() {
        let cli = Cli::parse_from_iter(["ding-robot", "text", "hello", "--at", "13800000000"]);

        let message = message_for(&cli.command).unwrap();

        assert_eq!(
            message,
            Message::Text(TextMessage::new("hello").mention("13800000000"))
        );
    }

    #[test]
    fn text_command_with_at_all() {
        let cli = Cli::parse_from_iter(["ding-robot", "text", "all", "--at-all"]);

        let Some(Message::Text(text)) = message_for(&cli.command) else {
            panic!("expected text message");
        };
        assert!(text.at_all);
    }

    #[test]
    fn markdown_command_builds_markdown_message() {
        let cli = Cli::parse_from_iter(["ding-robot", "markdown", "--title", "T", "**bold**"]);

        let message = message_for(&cli.command).unwrap();

        assert_eq!(message, Message::Markdown(MarkdownMessage::new("T", "**bold**")));
    }

    #[test]
    fn init_sends_nothing() {
        let cli = Cli::parse_from_iter(["ding-robot", "init"]);

        assert!(message_for(&cli.command).is_none());
    }
}

mod build {
    use super::*;

    #[test]
    fn unsigned_config_builds_unsigned_robot() {
        let robot = build_robot(&make_config(&[])).unwrap();

        assert_eq!(robot.endpoint(), WEBHOOK);
        assert!(!robot.is_signed());
    }

    #[test]
    fn secret_is_applied() {
        let robot = build_robot(&make_config(&["--secret", "SECabc123"])).unwrap();

        assert!(robot.is_signed());
        let url = robot.request_url().unwrap();
        assert!(url.as_str().starts_with(WEBHOOK));
        assert!(url.query_pairs().any(|(k, _)| k == "sign"));
    }
}

mod delivery {
    use super::*;

    #[tokio::test]
    async fn deliver_passes_message_to_sender() {
        let sender = RecordingSender::ok();
        let message: Message = TextMessage::new("hi").into();

        deliver(&sender, &message).await.unwrap();

        assert_eq!(*sender.sent.lock().unwrap(), vec![message]);
    }

    #[tokio::test]
    async fn deliver_wraps_sender_error() {
        let sender = RecordingSender::failing(RobotError::Rejected {
            code: 300_001,
            message: "token is not exist".to_string(),
        });

        let err = deliver(&sender, &MarkdownMessage::new("T", "x").into())
            .await
            .unwrap_err();

        assert!(matches!(err, RunError::Send(RobotError::Rejected { .. })));
        assert!(err.to_string().contains("token is not exist"));
    }

    #[tokio::test]
    async fn deliver_reports_transient_errors() {
        let sender = RecordingSender::failing(HttpError::Timeout.into());

        let err = deliver(&sender, &TextMessage::new("hi").into())
            .await
            .unwrap_err();

        let RunError::Send(inner) = err else {
            panic!("expected send error");
        };
        assert!(inner.is_retryable());
    }
}

mod run_error {
    use super::*;

    #[test]
    fn send_error_displays_source() {
        let error = RunError::Send(RobotError::Signing);

        assert!(error.to_string().starts_with("Failed to send message"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
