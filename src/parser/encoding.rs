//! Content-Transfer-Encoding parsing (RFC 2045 §6).

use tracing::debug;

use crate::model::transfer_encoding::TransferEncoding;

/// Parse a `Content-Transfer-Encoding` value.
///
/// Matching ignores case and surrounding whitespace. Unknown tokens fall back
/// to [`TransferEncoding::SevenBit`] so that a typo never aborts processing of
/// the message.
pub fn parse_transfer_encoding(value: &str) -> TransferEncoding {
    match value.trim().to_uppercase().as_str() {
        "7BIT" => TransferEncoding::SevenBit,
        "8BIT" => TransferEncoding::EightBit,
        "QUOTED-PRINTABLE" => TransferEncoding::QuotedPrintable,
        "BASE64" => TransferEncoding::Base64,
        "BINARY" => TransferEncoding::Binary,
        _ => {
            debug!(
                value = value,
                "Unrecognized Content-Transfer-Encoding, defaulting to 7bit"
            );
            TransferEncoding::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(parse_transfer_encoding("7bit"), TransferEncoding::SevenBit);
        assert_eq!(parse_transfer_encoding("8BIT"), TransferEncoding::EightBit);
        assert_eq!(
            parse_transfer_encoding(" Quoted-Printable "),
            TransferEncoding::QuotedPrintable
        );
        assert_eq!(parse_transfer_encoding("BASE64"), TransferEncoding::Base64);
        assert_eq!(parse_transfer_encoding("Binary"), TransferEncoding::Binary);
    }

    #[test]
    fn test_unknown_defaults_to_7bit() {
        assert_eq!(parse_transfer_encoding("foo"), TransferEncoding::SevenBit);
        assert_eq!(parse_transfer_encoding(""), TransferEncoding::SevenBit);
        assert_eq!(parse_transfer_encoding("base-64"), TransferEncoding::SevenBit);
    }

    #[test]
    fn test_unknown_token_is_logged() {
        let (enc, logs) = crate::parser::captured_logs(|| parse_transfer_encoding("foo"));
        assert_eq!(enc, TransferEncoding::SevenBit);
        assert!(logs.contains("DEBUG"), "logs: {logs}");
        assert!(logs.contains("foo"), "logs: {logs}");
    }

    #[test]
    fn test_display_reparses() {
        for enc in [
            TransferEncoding::SevenBit,
            TransferEncoding::EightBit,
            TransferEncoding::QuotedPrintable,
            TransferEncoding::Base64,
            TransferEncoding::Binary,
        ] {
            assert_eq!(parse_transfer_encoding(&enc.to_string()), enc);
        }
    }
}
