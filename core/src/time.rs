//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for chrono::DateTime<Utc>.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a request nonce from the given time.
///
/// The nonce is the Unix timestamp in milliseconds, as a decimal string.
pub fn format_nonce(time: DateTime) -> String {
    time.timestamp_millis().to_string()
}

/// Generate a fresh request nonce from the wall clock.
///
/// Every call reads the clock again; nothing is shared between callers.
pub fn nonce() -> String {
    format_nonce(now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nonce() {
        let t = chrono::DateTime::parse_from_rfc3339("2023-11-14T22:13:20.123Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_nonce(t), "1700000000123");
    }

    #[test]
    fn test_nonce_is_decimal_millis() {
        let before = now().timestamp_millis();
        let n: i64 = nonce().parse().unwrap();
        let after = now().timestamp_millis();

        assert!(before <= n && n <= after);
    }
}
