//! Content-Disposition parsing (RFC 2183, RFC 2231).

use chrono::{NaiveDateTime, SubsecRound};
use tracing::debug;

use crate::codec::date::parse_date;
use crate::codec::encoded_word::decode_encoded_words;
use crate::codec::params::decode_parameters;
use crate::codec::quote::remove_quotes_if_any;
use crate::codec::size::parse_size;
use crate::error::{FieldError, Result};
use crate::model::content_disposition::ContentDispositionInfo;

/// Parse a `Content-Disposition` value such as
/// `attachment; filename="a.txt"; size=100`.
///
/// Unlike Content-Type, the parameter set is closed: a name that is neither
/// recognized nor prefixed with `X-` fails with
/// [`FieldError::UnrecognizedParameter`]. Malformed dates and sizes fail with
/// the corresponding error. A repeated parameter keeps its last value.
pub fn parse_content_disposition(value: &str) -> Result<ContentDispositionInfo> {
    let mut info = ContentDispositionInfo::default();

    for (key, raw) in decode_parameters(value) {
        let val = remove_quotes_if_any(&raw);
        match key.to_uppercase().as_str() {
            "" => info.disposition_type = val.to_string(),
            "NAME" | "FILENAME" => info.file_name = Some(decode_encoded_words(val)),
            "CREATION-DATE" => info.creation_date = Some(naive_date(val)?),
            "MODIFICATION-DATE" => info.modification_date = Some(naive_date(val)?),
            "READ-DATE" => info.read_date = Some(naive_date(val)?),
            "SIZE" => info.size = Some(parse_size(val)?),
            "CHARSET" => {
                debug!(value = val, "Ignoring charset parameter in Content-Disposition");
            }
            other if other.starts_with("X-") => {
                info.parameters.insert(other.to_string(), val.to_string());
            }
            other => return Err(FieldError::UnrecognizedParameter(other.to_string())),
        }
    }

    Ok(info)
}

/// Parse a date parameter into its UTC clock value, whole seconds only
/// (RFC 2822 has no sub-second precision).
fn naive_date(value: &str) -> Result<NaiveDateTime> {
    Ok(parse_date(value)?.trunc_subsecs(0).naive_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_filename_and_size() {
        let cd = parse_content_disposition("attachment; filename=\"a.txt\"; size=100").unwrap();
        assert_eq!(cd.disposition_type, "attachment");
        assert!(cd.is_attachment());
        assert_eq!(cd.file_name.as_deref(), Some("a.txt"));
        assert_eq!(cd.size, Some(100));
    }

    #[test]
    fn test_name_is_a_synonym() {
        let cd = parse_content_disposition("inline; name=logo.png").unwrap();
        assert!(cd.is_inline());
        assert_eq!(cd.file_name.as_deref(), Some("logo.png"));
    }

    #[test]
    fn test_unknown_parameter_fails() {
        let err = parse_content_disposition("attachment; bogus=1").unwrap_err();
        assert_eq!(err, FieldError::UnrecognizedParameter("BOGUS".to_string()));
    }

    #[test]
    fn test_x_parameter_is_kept() {
        let cd = parse_content_disposition("attachment; X-custom=1").unwrap();
        assert_eq!(cd.parameters.get("X-CUSTOM").map(String::as_str), Some("1"));
        assert_eq!(cd.parameter("x-custom"), Some("1"));
    }

    #[test]
    fn test_charset_is_ignored() {
        let cd = parse_content_disposition("attachment; charset=utf-8; filename=a").unwrap();
        assert_eq!(cd.file_name.as_deref(), Some("a"));
        assert!(cd.parameters.is_empty());
    }

    #[test]
    fn test_dates_are_naive_utc() {
        let cd = parse_content_disposition(
            "attachment; creation-date=\"Wed, 12 Feb 1997 16:29:51 -0500\"; \
             modification-date=\"Thu, 13 Feb 1997 10:00:00 +0000\"; \
             read-date=\"Fri, 14 Feb 1997 23:30:00 +0100\"",
        )
        .unwrap();
        let expect = |d, h, m, s| {
            NaiveDate::from_ymd_opt(1997, 2, d)
                .and_then(|date| date.and_hms_opt(h, m, s))
                .unwrap()
        };
        assert_eq!(cd.creation_date, Some(expect(12, 21, 29, 51)));
        assert_eq!(cd.modification_date, Some(expect(13, 10, 0, 0)));
        assert_eq!(cd.read_date, Some(expect(14, 22, 30, 0)));
    }

    #[test]
    fn test_fractional_seconds_are_dropped() {
        let cd =
            parse_content_disposition("attachment; creation-date=\"2024-01-04T10:00:00.5Z\"")
                .unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 4)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        assert_eq!(cd.creation_date, Some(expected));
        assert_eq!(parse_content_disposition(&cd.to_string()).unwrap(), cd);
    }

    #[test]
    fn test_bad_date_propagates() {
        let err = parse_content_disposition("attachment; read-date=\"yesterday\"").unwrap_err();
        assert!(matches!(err, FieldError::InvalidDate { .. }));
    }

    #[test]
    fn test_bad_size_propagates() {
        let err = parse_content_disposition("attachment; size=big").unwrap_err();
        assert!(matches!(err, FieldError::InvalidSize { ref value, .. } if value == "big"));
    }

    #[test]
    fn test_rfc2231_filename() {
        let cd = parse_content_disposition(
            "attachment; filename*0*=utf-8''r%C3%A9sum; filename*1*=%C3%A9.txt",
        )
        .unwrap();
        assert_eq!(cd.file_name.as_deref(), Some("résumé.txt"));
    }

    #[test]
    fn test_display_reparses() {
        let cd = parse_content_disposition(
            "attachment; filename=\"=?ISO-8859-1?Q?caf=E9 menu.pdf?=\"; \
             creation-date=\"Wed, 12 Feb 1997 16:29:51 -0500\"; size=2048; x-origin=scanner",
        )
        .unwrap();
        assert_eq!(cd.file_name.as_deref(), Some("café menu.pdf"));
        assert_eq!(parse_content_disposition(&cd.to_string()).unwrap(), cd);
    }
}
