//! Property-based tests for leveled_logger using proptest

use leveled_logger::core::render;
use leveled_logger::prelude::*;
use leveled_logger::MAX_INSPECT_DEPTH;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Warn),
        Just(Severity::Info),
        Just(Severity::Debug),
    ]
}

fn nested_meta(levels: usize) -> MetaValue {
    let mut value = MetaValue::Int(7);
    for _ in 0..levels {
        value = MetaValue::Map(vec![("inner".to_string(), value)]);
    }
    value
}

proptest! {
    /// The gate permits a call iff the configured minimum's numeric value
    /// is >= the candidate's numeric value.
    #[test]
    fn test_gate_matches_numeric_ordering(
        min in any_severity(),
        candidate in any_severity(),
    ) {
        prop_assert_eq!(min.permits(candidate), min as u8 >= candidate as u8);
    }

    /// Recognized names roundtrip through parsing; Display matches to_str.
    #[test]
    fn test_severity_str_roundtrip(level in any_severity()) {
        let parsed: Severity = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Any override string that is not one of the four exact names
    /// resolves to Info.
    #[test]
    fn test_unrecognized_override_resolves_to_info(s in "\\PC*") {
        prop_assume!(!matches!(s.as_str(), "ERROR" | "WARN" | "INFO" | "DEBUG"));
        prop_assert_eq!(Severity::resolve_override(Some(s.as_str())), Severity::Info);
    }

    /// Rendering with empty metadata is the identity on the message.
    #[test]
    fn test_render_empty_meta_identity(message in "\\PC*") {
        prop_assert_eq!(render::render_message(&message, &[]), message);
    }

    /// Rendering with metadata always appends the " meta: " separator and
    /// never loses the message prefix.
    #[test]
    fn test_render_meta_preserves_message(message in "\\PC*", n in 1i64..1000) {
        let rendered = render::render_message(&message, &[MetaValue::Int(n)]);
        prop_assert!(rendered.starts_with(&message));
        prop_assert!(rendered.contains(" meta: "));
        prop_assert!(rendered.contains(&n.to_string()));
    }

    /// Deeply nested metadata renders without panicking and stays bounded.
    #[test]
    fn test_render_depth_bounded(levels in 0usize..20) {
        let meta = [nested_meta(levels)];
        let rendered = render::render_message("m", &meta);
        prop_assert!(!rendered.is_empty());
        // The innermost scalar survives only within the depth bound
        if levels < MAX_INSPECT_DEPTH {
            prop_assert!(rendered.contains('7'));
        } else if levels > MAX_INSPECT_DEPTH {
            prop_assert!(rendered.contains("{...}"), "rendered should contain the truncation marker");
        }
    }

    /// Every record serializes to one valid JSON line with the required
    /// fields, for arbitrary message content.
    #[test]
    fn test_json_line_always_valid(message in "\\PC*", level in any_severity()) {
        let record = LogRecord::new(level, &message);
        let line = render::json_line(&record);

        prop_assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        prop_assert_eq!(parsed["level"].as_str().unwrap(), level.to_str());
        prop_assert!(parsed["timestamp"].is_string());
        prop_assert!(parsed["message"].is_string());
    }
}
