//! Size parameter parsing (RFC 2183 §2.7).

use crate::error::{FieldError, Result};

/// Parse a non-negative decimal size in octets.
pub fn parse_size(s: &str) -> Result<u64> {
    let trimmed = s.trim();
    trimmed
        .parse::<u64>()
        .map_err(|source| FieldError::InvalidSize {
            value: trimmed.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("100").unwrap(), 100);
        assert_eq!(parse_size(" 4096 ").unwrap(), 4096);
    }

    #[test]
    fn test_parse_size_rejects_garbage() {
        assert!(matches!(
            parse_size("12kb"),
            Err(FieldError::InvalidSize { .. })
        ));
        assert!(parse_size("-1").is_err());
        assert!(parse_size("").is_err());
    }
}
