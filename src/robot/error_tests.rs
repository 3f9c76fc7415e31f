//! Tests for `RobotError` classification.

use super::{HttpError, ResponseEnvelope, RobotError};

fn decode_error() -> RobotError {
    ResponseEnvelope::parse(b"not json").unwrap_err()
}

fn serialization_error() -> RobotError {
    RobotError::Serialization(serde::ser::Error::custom("boom"))
}

mod retryable {
    use super::*;

    #[test]
    fn network_failures_are_retryable() {
        let connection = RobotError::from(HttpError::Connection(Box::new(std::io::Error::other(
            "reset",
        ))));

        assert!(connection.is_retryable());
        assert!(RobotError::from(HttpError::Timeout).is_retryable());
    }

    #[test]
    fn invalid_url_is_not_retryable() {
        let err = RobotError::from(HttpError::InvalidUrl("x".to_string()));

        assert!(!err.is_retryable());
    }

    #[test]
    fn caller_and_server_bugs_are_not_retryable() {
        assert!(!serialization_error().is_retryable());
        assert!(!decode_error().is_retryable());
        assert!(!RobotError::Signing.is_retryable());
    }

    #[test]
    fn rejections_are_left_to_the_caller() {
        let err = RobotError::Rejected {
            code: 130_101,
            message: "send too fast".to_string(),
        };

        assert!(!err.is_retryable());
        assert_eq!(err.remote_code(), Some(130_101));
    }
}

mod display {
    use super::*;

    #[test]
    fn rejection_includes_remote_message_and_code() {
        let err = RobotError::Rejected {
            code: 300_001,
            message: "token is not exist".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("token is not exist"));
        assert!(text.contains("300001"));
    }

    #[test]
    fn transport_is_transparent() {
        let err = RobotError::from(HttpError::Timeout);

        assert_eq!(err.to_string(), "Request timed out");
    }

    #[test]
    fn decode_keeps_raw_body() {
        let RobotError::Decode { body, .. } = decode_error() else {
            panic!("expected decode error");
        };

        assert_eq!(body.as_deref(), Some("not json"));
    }

    #[test]
    fn remote_code_is_none_for_local_failures() {
        assert_eq!(decode_error().remote_code(), None);
        assert_eq!(RobotError::Signing.remote_code(), None);
    }
}

mod envelope {
    use super::*;

    #[test]
    fn zero_code_is_success() {
        let envelope = ResponseEnvelope::parse(br#"{"errcode":0,"errmsg":"ok"}"#).unwrap();

        assert!(envelope.is_success());
        assert!(envelope.into_result().is_ok());
    }

    #[test]
    fn missing_errmsg_defaults_to_empty() {
        let envelope = ResponseEnvelope::parse(br#"{"errcode":0}"#).unwrap();

        assert_eq!(envelope.message, "");
    }

    #[test]
    fn null_errmsg_is_empty() {
        let envelope = ResponseEnvelope::parse(br#"{"errcode":0,"errmsg":null}"#).unwrap();

        assert_eq!(envelope.message, "");
        assert!(envelope.into_result().is_ok());
    }

    #[test]
    fn null_errmsg_with_nonzero_code_is_rejection() {
        let envelope = ResponseEnvelope::parse(br#"{"errcode":40035,"errmsg":null}"#).unwrap();

        assert!(matches!(
            envelope.into_result(),
            Err(RobotError::Rejected { code: 40035, ref message }) if message.is_empty()
        ));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let envelope =
            ResponseEnvelope::parse(br#"{"errcode":0,"errmsg":"ok","request_id":"r1"}"#).unwrap();

        assert_eq!(envelope.code, 0);
    }

    #[test]
    fn missing_errcode_is_a_decode_error() {
        let result = ResponseEnvelope::parse(br#"{"errmsg":"ok"}"#);

        assert!(matches!(result, Err(RobotError::Decode { .. })));
    }

    #[test]
    fn non_integer_errcode_is_a_decode_error() {
        let result = ResponseEnvelope::parse(br#"{"errcode":"0","errmsg":""}"#);

        assert!(matches!(result, Err(RobotError::Decode { .. })));
    }

    #[test]
    fn nonzero_code_becomes_rejection() {
        let envelope =
            ResponseEnvelope::parse(br#"{"errcode":310000,"errmsg":"sign not match"}"#).unwrap();

        match envelope.into_result() {
            Err(RobotError::Rejected { code, message }) => {
                assert_eq!(code, 310_000);
                assert_eq!(message, "sign not match");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
