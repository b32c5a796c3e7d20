// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use bigdecimal::BigDecimal;
use std::str::FromStr;

use carbon_activity_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_domain_point() {
        let err = CoreError::InvalidDomainPoint("abc".into());
        assert_eq!(err.to_string(), "Invalid domain point: abc");
    }

    #[test]
    fn empty_domain() {
        assert_eq!(
            CoreError::EmptyDomain.to_string(),
            "Chart domain is empty — cannot place activities"
        );
    }

    #[test]
    fn invalid_amount() {
        let err = CoreError::InvalidAmount("1.2.3".into());
        assert_eq!(err.to_string(), "Invalid amount: 1.2.3");
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            provider: "CarbonApi".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (CarbonApi): rate limited");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("timeout".into());
        assert_eq!(err.to_string(), "Network error: timeout");
    }

    #[test]
    fn configuration() {
        let err = CoreError::Configuration("bad limit".into());
        assert_eq!(err.to_string(), "Configuration error: bad limit");
    }

    #[test]
    fn validation() {
        let err = CoreError::ValidationError("start after end".into());
        assert_eq!(err.to_string(), "Validation failed: start after end");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("eof".into());
        assert_eq!(err.to_string(), "Deserialization error: eof");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_serde_json() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn from_bigdecimal_parse() {
        let parse_err = BigDecimal::from_str("1.2.3").unwrap_err();
        let err: CoreError = parse_err.into();
        assert!(matches!(err, CoreError::InvalidAmount(_)));
    }

    #[test]
    fn question_mark_propagation() {
        fn parse(raw: &str) -> Result<BigDecimal, CoreError> {
            Ok(BigDecimal::from_str(raw)?)
        }
        assert!(parse("42.5").is_ok());
        assert!(matches!(parse("x"), Err(CoreError::InvalidAmount(_))));
    }
}

// ── Trait bounds ────────────────────────────────────────────────────

#[test]
fn error_is_send_sync_and_std_error() {
    fn assert_bounds<T: std::error::Error + Send + Sync + 'static>() {}
    assert_bounds::<CoreError>();
}
