//! Property-based tests for category_logger using proptest

use category_logger::prelude::*;
use proptest::prelude::*;
use std::sync::Arc;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Error),
        Just(Severity::Assert),
        Just(Severity::Warning),
        Just(Severity::Info),
        Just(Severity::Exception),
    ]
}

#[derive(Debug, Clone)]
enum FilterOp {
    Set(Severity, bool),
    SetAll(bool),
}

fn any_op() -> impl Strategy<Value = FilterOp> {
    prop_oneof![
        4 => (any_severity(), any::<bool>()).prop_map(|(s, on)| FilterOp::Set(s, on)),
        1 => any::<bool>().prop_map(FilterOp::SetAll),
    ]
}

// ============================================================================
// Filter state
// ============================================================================

proptest! {
    /// Any sequence of filter operations matches a plain per-severity model
    #[test]
    fn test_filter_matches_model(ops in prop::collection::vec(any_op(), 0..64)) {
        let logger = CategoryLogger::detached(None);
        let mut model = [true; 5];

        for op in &ops {
            match *op {
                FilterOp::Set(severity, on) => {
                    logger.set_enabled(severity, on);
                    model[severity.slot() as usize] = on;
                }
                FilterOp::SetAll(on) => {
                    logger.set_all_enabled(on);
                    model = [on; 5];
                }
            }
        }

        for severity in Severity::ALL {
            prop_assert_eq!(logger.is_enabled(severity), model[severity.slot() as usize]);
        }
    }

    /// Unknown codes always report the Info state; known codes their own
    #[test]
    fn test_code_query_total(code in any::<i32>(), info_on in any::<bool>()) {
        let logger = CategoryLogger::detached(None);
        logger.set_enabled(Severity::Info, info_on);

        let expected = match Severity::from_code(code) {
            Some(severity) => logger.is_enabled(severity),
            None => logger.is_enabled(Severity::Info),
        };
        prop_assert_eq!(logger.is_code_enabled(code), expected);
    }

    /// Toggling one severity off and on again restores the whole filter
    #[test]
    fn test_toggle_round_trip(
        ops in prop::collection::vec(any_op(), 0..16),
        target in any_severity(),
    ) {
        let logger = CategoryLogger::detached(None);
        for op in &ops {
            match *op {
                FilterOp::Set(severity, on) => logger.set_enabled(severity, on),
                FilterOp::SetAll(on) => logger.set_all_enabled(on),
            }
        }

        let before = logger.enabled_severities();
        let was_on = logger.is_enabled(target);
        logger.set_enabled(target, !was_on);
        logger.set_enabled(target, was_on);
        prop_assert_eq!(logger.enabled_severities(), before);
    }
}

// ============================================================================
// Prefixing
// ============================================================================

proptest! {
    /// The forwarded message is the trimmed group id in brackets, or nothing
    #[test]
    fn test_prefix_is_trimmed_group_id(
        group_id in "[ \t]{0,3}[A-Za-z0-9_]{0,12}[ \t]{0,3}",
        message in "[a-z ]{0,24}",
    ) {
        let sink = Arc::new(MemorySink::new());
        let logger = CategoryLogger::with_sink(Some(group_id.as_str()), sink.clone());
        logger.info(&message);

        let trimmed = group_id.trim();
        let expected = if trimmed.is_empty() {
            message.clone()
        } else {
            format!("[{}] {}", trimmed, message)
        };
        prop_assert_eq!(sink.messages(), vec![expected]);
    }

    /// A disabled severity never produces a record
    #[test]
    fn test_disabled_never_forwards(severity in any_severity(), message in ".{0,32}") {
        let sink = Arc::new(MemorySink::new());
        let logger = CategoryLogger::with_sink(Some("P"), sink.clone());
        logger.set_enabled(severity, false);
        logger.log(severity, &message);
        prop_assert!(sink.is_empty());
    }
}

// ============================================================================
// Severity conversions
// ============================================================================

proptest! {
    #[test]
    fn test_severity_str_roundtrip(severity in any_severity()) {
        let parsed: Severity = severity.to_str().parse().unwrap();
        prop_assert_eq!(parsed, severity);
        prop_assert_eq!(format!("{}", severity), severity.to_str());
    }

    #[test]
    fn test_slot_in_range(code in any::<i32>()) {
        prop_assert!(category_logger::slot_of_code(code) < 5);
    }
}
