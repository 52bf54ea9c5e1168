//! Content-Type parsing (RFC 2045 §5, RFC 2231).

use crate::codec::encoded_word::decode_encoded_words;
use crate::codec::params::decode_parameters;
use crate::codec::quote::remove_quotes_if_any;
use crate::model::content_type::{ContentTypeInfo, DEFAULT_MEDIA_TYPE};

use super::charset::sanitize_charset;

/// Parse a `Content-Type` value such as `text/plain; charset=utf-8; name="a.txt"`.
///
/// Unknown parameters are kept in [`ContentTypeInfo::parameters`]; this parser
/// never rejects input. A repeated parameter keeps its last value.
pub fn parse_content_type(value: &str) -> ContentTypeInfo {
    let mut info = ContentTypeInfo::default();

    for (key, raw) in decode_parameters(value) {
        let val = remove_quotes_if_any(&raw);
        match key.to_uppercase().as_str() {
            "" => {
                let upper = val.to_uppercase();
                if upper == "TEXT" || upper == "TEXT/" {
                    info.media_type = DEFAULT_MEDIA_TYPE.to_string();
                } else if !val.is_empty() {
                    info.media_type = val.to_string();
                }
            }
            "BOUNDARY" => info.boundary = Some(val.to_string()),
            "CHARSET" => info.charset = sanitize_charset(val),
            "NAME" => info.name = Some(decode_encoded_words(val)),
            other => {
                info.parameters.insert(other.to_string(), val.to_string());
            }
        }
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_text_is_normalized() {
        assert_eq!(parse_content_type("text").media_type, "text/plain");
        assert_eq!(parse_content_type("TEXT/").media_type, "text/plain");
        assert_eq!(parse_content_type("text/html").media_type, "text/html");
    }

    #[test]
    fn test_charset_and_encoded_name() {
        let ct = parse_content_type(
            "text/plain; charset=\"UTF-8\"; name=\"=?utf-8?Q?r=C3=A9sum=C3=A9.txt?=\"",
        );
        assert_eq!(ct.media_type, "text/plain");
        assert_eq!(ct.charset.as_deref(), Some("UTF-8"));
        assert_eq!(ct.name.as_deref(), Some("résumé.txt"));
        assert!(ct.parameters.is_empty());
    }

    #[test]
    fn test_boundary_verbatim() {
        let ct = parse_content_type("multipart/mixed;\r\n boundary=\"----=_Part_0_1.2\"");
        assert!(ct.is_multipart());
        assert_eq!(ct.boundary.as_deref(), Some("----=_Part_0_1.2"));
    }

    #[test]
    fn test_unknown_parameters_are_kept() {
        let ct = parse_content_type(
            "multipart/report; report-type=delivery-status; Title=Report; boundary=x",
        );
        assert_eq!(ct.parameter("report-type"), Some("delivery-status"));
        assert_eq!(ct.parameters.get("TITLE").map(String::as_str), Some("Report"));
        assert_eq!(ct.boundary.as_deref(), Some("x"));
    }

    #[test]
    fn test_rfc2231_name() {
        let ct = parse_content_type("application/pdf; name*=utf-8''%E2%82%AC.pdf");
        assert_eq!(ct.name.as_deref(), Some("€.pdf"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let ct = parse_content_type("text/plain; charset=us-ascii; charset=utf-8");
        assert_eq!(ct.charset.as_deref(), Some("utf-8"));
    }

    #[test]
    fn test_empty_value_keeps_default() {
        assert_eq!(parse_content_type("").media_type, "text/plain");
        assert_eq!(parse_content_type("; charset=utf-8").media_type, "text/plain");
    }

    #[test]
    fn test_quoted_media_type_with_semicolon_reparses() {
        let ct = parse_content_type("\"a;b\"; charset=utf-8");
        assert_eq!(ct.media_type, "a;b");
        assert_eq!(ct.to_string(), "\"a;b\"; charset=utf-8");
        assert_eq!(parse_content_type(&ct.to_string()), ct);
    }

    #[test]
    fn test_display_reparses() {
        let ct = parse_content_type(
            "Application/Octet-Stream; name=\"=?utf-8?B?w6l0w6kucGRm?=\"; x-mac-type=PDF; boundary=\"a b\"",
        );
        assert_eq!(ct.name.as_deref(), Some("été.pdf"));
        assert_eq!(parse_content_type(&ct.to_string()), ct);
    }
}
