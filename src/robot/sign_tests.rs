//! Tests for request signing.

use super::sign::{signature, signed_suffix};

// Vectors computed independently with a reference HMAC-SHA256 implementation.
const SECRET_A: &str = "SECabc123";
const TIMESTAMP_A: u128 = 1_700_000_000_000;
const SIGNATURE_A: &str = "N5P09a4+p1AMJIJWnIvQd2Yxw9+fu/oEBnPrjCcsLXk=";

const SECRET_B: &str = "my-secret";
const TIMESTAMP_B: u128 = 1_609_459_200_000;
const SIGNATURE_B: &str = "hFYaNO6jLeCrcTlUZReivBLT6MBtz5M9QJLhPNsggYQ=";

mod signature_value {
    use super::*;

    #[test]
    fn matches_reference_vector() {
        assert_eq!(signature(SECRET_A, TIMESTAMP_A).unwrap(), SIGNATURE_A);
        assert_eq!(signature(SECRET_B, TIMESTAMP_B).unwrap(), SIGNATURE_B);
    }

    #[test]
    fn is_padded_standard_base64_of_a_sha256_digest() {
        let sig = signature(SECRET_A, TIMESTAMP_A).unwrap();

        // 32 digest bytes encode to 44 characters ending in a single '='
        assert_eq!(sig.len(), 44);
        assert!(sig.ends_with('='));
        assert!(!sig.contains('-') && !sig.contains('_'));
    }

    #[test]
    fn changes_with_timestamp() {
        let a = signature(SECRET_A, TIMESTAMP_A).unwrap();
        let b = signature(SECRET_A, TIMESTAMP_A + 1).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn changes_with_secret() {
        let a = signature("one", TIMESTAMP_A).unwrap();
        let b = signature("two", TIMESTAMP_A).unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            signature(SECRET_B, TIMESTAMP_B).unwrap(),
            signature(SECRET_B, TIMESTAMP_B).unwrap()
        );
    }

    #[test]
    fn accepts_very_long_secret() {
        let secret = "S".repeat(500);

        assert!(signature(&secret, TIMESTAMP_A).is_ok());
    }
}

mod suffix {
    use super::*;

    #[test]
    fn escapes_plus_slash_and_padding() {
        let suffix = signed_suffix(SECRET_A, TIMESTAMP_A).unwrap();

        assert_eq!(
            suffix,
            "&timestamp=1700000000000&sign=N5P09a4%2Bp1AMJIJWnIvQd2Yxw9%2Bfu%2FoEBnPrjCcsLXk%3D"
        );
    }

    #[test]
    fn escapes_padding_only_when_nothing_else_needs_it() {
        let suffix = signed_suffix(SECRET_B, TIMESTAMP_B).unwrap();

        assert_eq!(
            suffix,
            "&timestamp=1609459200000&sign=hFYaNO6jLeCrcTlUZReivBLT6MBtz5M9QJLhPNsggYQ%3D"
        );
    }

    #[test]
    fn starts_with_ampersand_never_question_mark() {
        let suffix = signed_suffix("k", 0).unwrap();

        assert!(suffix.starts_with("&timestamp=0&sign="));
        assert!(!suffix.contains('?'));
    }

    #[test]
    fn decodes_back_to_the_signature() {
        let suffix = signed_suffix(SECRET_A, TIMESTAMP_A).unwrap();
        let query = suffix.trim_start_matches('&');

        let pairs: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("timestamp".to_string(), TIMESTAMP_A.to_string()),
                ("sign".to_string(), SIGNATURE_A.to_string()),
            ]
        );
    }
}
