//! Quoted-string helpers.

/// Remove one matching pair of surrounding double quotes, if present.
///
/// Only the outermost pair is removed and the content is not unescaped:
/// `"\"a\""` becomes `a`, `"\"a"` is returned unchanged.
pub fn remove_quotes_if_any(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Quote a parameter value for output, escaping `"` and `\`.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_quotes() {
        assert_eq!(remove_quotes_if_any("\"UTF-8\""), "UTF-8");
        assert_eq!(remove_quotes_if_any("plain"), "plain");
        assert_eq!(remove_quotes_if_any("\"\""), "");
    }

    #[test]
    fn test_remove_quotes_unbalanced() {
        assert_eq!(remove_quotes_if_any("\"open"), "\"open");
        assert_eq!(remove_quotes_if_any("\""), "\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
