//! Message-ID / Content-ID style identifiers (`<local@domain>`).

/// Extract a single identifier: trims, then removes one trailing `>` and one
/// leading `<`.
///
/// No validation is done; `"<abc"` yields `"abc"` and `"abc>"` yields `"abc"`.
pub fn parse_id(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix('>').unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix('<').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Extract every identifier from a list such as `<a@b> <c@d>` (References,
/// In-Reply-To), preserving input order.
///
/// Segments between `>` that are empty or only whitespace are dropped, so a
/// stray `>` never yields an empty identifier: `"<a> > <b>"` gives `["a", "b"]`.
pub fn parse_multiple_ids(value: &str) -> Vec<String> {
    value
        .trim()
        .split('>')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(" <test@test.com> "), "test@test.com");
        assert_eq!(parse_id("test@test.com"), "test@test.com");
    }

    #[test]
    fn test_parse_id_asymmetric() {
        assert_eq!(parse_id("<abc"), "abc");
        assert_eq!(parse_id("abc>"), "abc");
        assert_eq!(parse_id("<<abc>>"), "<abc>");
        assert_eq!(parse_id("<>"), "");
    }

    #[test]
    fn test_parse_multiple_ids() {
        assert_eq!(parse_multiple_ids("<a@b><c@d>"), vec!["a@b", "c@d"]);
        assert_eq!(
            parse_multiple_ids("<a@b.com>\r\n <c@d.com> <e@f.com>"),
            vec!["a@b.com", "c@d.com", "e@f.com"]
        );
    }

    #[test]
    fn test_parse_multiple_ids_empty() {
        assert!(parse_multiple_ids("").is_empty());
        assert!(parse_multiple_ids("   ").is_empty());
    }

    #[test]
    fn test_parse_multiple_ids_skips_blank_segments() {
        assert_eq!(parse_multiple_ids("<a> > <b>"), vec!["a", "b"]);
        assert_eq!(parse_multiple_ids("<a>>>\t<b>"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_multiple_ids_unterminated_tail() {
        assert_eq!(parse_multiple_ids("<a@b> <c@d"), vec!["a@b", "c@d"]);
    }
}
