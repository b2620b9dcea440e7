//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secret material by replacing all but the first and last three bytes with asterisks.
///
/// - If the input has fewer than 12 bytes, it is entirely redacted.
/// - If the input has 12 or more bytes, only the first three and the last three are kept.
///
/// Keys are accepted as bytes because private keys are not required to be utf-8.
pub struct Redact<'a>(&'a [u8]);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Redact<'a> {
    fn from(value: &'a [u8]) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Redact<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Redact(value.as_slice())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(b""),
            Some(v) => Redact(v.as_bytes()),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.len();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            f.write_str(&String::from_utf8_lossy(&self.0[..3]))?;
            f.write_str("***")?;
            f.write_str(&String::from_utf8_lossy(&self.0[length - 3..]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Short", "***")]
    #[test_case("Hello World!", "Hel***ld!")]
    #[test_case("This is a longer string", "Thi***ing")]
    #[test_case("", "EMPTY")]
    #[test_case("HelloWorld", "***")]
    fn test_redact(input: &str, expected: &str) {
        assert_eq!(format!("{:?}", Redact::from(input)), expected);
    }

    #[test]
    fn test_redact_bytes() {
        let key = b"private_key_bytes".to_vec();
        assert_eq!(format!("{:?}", Redact::from(&key)), "pri***tes");
    }
}
