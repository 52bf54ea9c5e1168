//! Charset parameter cleanup.

/// Characters allowed in a charset name: word characters plus the punctuation
/// used by registered names (`UTF-8`, `ISO_8859-1:1987`, `x-mac.roman`).
fn is_charset_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':' | '+')
}

/// Keep the first run of charset-name characters and drop everything else.
///
/// Repairs values such as `"utf-8"`, `utf-8"`, or `'iso-8859-1' ` that
/// broken senders produce. Returns `None` when nothing usable remains.
pub fn sanitize_charset(raw: &str) -> Option<String> {
    let start = raw.find(is_charset_char)?;
    let rest = &raw[start..];
    let end = rest.find(|c: char| !is_charset_char(c)).unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_charset_unchanged() {
        assert_eq!(sanitize_charset("UTF-8").as_deref(), Some("UTF-8"));
        assert_eq!(sanitize_charset("iso-8859-1").as_deref(), Some("iso-8859-1"));
    }

    #[test]
    fn test_stray_quotes_and_spaces() {
        assert_eq!(sanitize_charset("\"utf-8\"").as_deref(), Some("utf-8"));
        assert_eq!(sanitize_charset("  'us-ascii' ").as_deref(), Some("us-ascii"));
        assert_eq!(sanitize_charset("utf-8\" format").as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_nothing_usable() {
        assert_eq!(sanitize_charset(""), None);
        assert_eq!(sanitize_charset("\"\" "), None);
    }
}
