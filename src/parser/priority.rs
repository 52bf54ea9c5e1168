//! Importance header parsing.

use tracing::debug;

use crate::model::priority::Priority;

/// Parse an `Importance` value: `5`/`high`, `3`/`normal`, `1`/`low`.
///
/// Anything else yields [`Priority::Normal`].
pub fn parse_priority(value: &str) -> Priority {
    match value.trim().to_uppercase().as_str() {
        "5" | "HIGH" => Priority::High,
        "3" | "NORMAL" => Priority::Normal,
        "1" | "LOW" => Priority::Low,
        _ => {
            debug!(value = value, "Unrecognized Importance, defaulting to normal");
            Priority::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_words() {
        assert_eq!(parse_priority("5"), Priority::High);
        assert_eq!(parse_priority("high"), Priority::High);
        assert_eq!(parse_priority("3"), Priority::Normal);
        assert_eq!(parse_priority("Normal"), Priority::Normal);
        assert_eq!(parse_priority("1"), Priority::Low);
        assert_eq!(parse_priority("low"), Priority::Low);
    }

    #[test]
    fn test_unknown_defaults_to_normal() {
        assert_eq!(parse_priority("urgent"), Priority::Normal);
        assert_eq!(parse_priority("2"), Priority::Normal);
        assert_eq!(parse_priority(""), Priority::Normal);
    }

    #[test]
    fn test_unknown_value_is_logged() {
        let (priority, logs) = crate::parser::captured_logs(|| parse_priority("urgent"));
        assert_eq!(priority, Priority::Normal);
        assert!(logs.contains("urgent"), "logs: {logs}");

        let (_, quiet) = crate::parser::captured_logs(|| parse_priority("high"));
        assert!(!quiet.contains("Unrecognized"), "logs: {quiet}");
    }
}
