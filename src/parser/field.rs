//! Dispatch from a header name to the matching field parser.

use crate::error::{FieldError, Result};
use crate::model::field::{FieldKind, ParsedField};

use super::content_disposition::parse_content_disposition;
use super::content_type::parse_content_type;
use super::encoding::parse_transfer_encoding;
use super::identifier::{parse_id, parse_multiple_ids};
use super::priority::parse_priority;

/// Parse a value with the parser for `kind`.
pub fn parse_kind(kind: FieldKind, value: &str) -> Result<ParsedField> {
    Ok(match kind {
        FieldKind::ContentTransferEncoding => {
            ParsedField::TransferEncoding(parse_transfer_encoding(value))
        }
        FieldKind::Importance => ParsedField::Priority(parse_priority(value)),
        FieldKind::ContentType => ParsedField::ContentType(parse_content_type(value)),
        FieldKind::ContentDisposition => {
            ParsedField::ContentDisposition(parse_content_disposition(value)?)
        }
        FieldKind::Identifier => ParsedField::Identifier(parse_id(value)),
        FieldKind::IdentifierList => ParsedField::Identifiers(parse_multiple_ids(value)),
    })
}

/// Parse the value of the header called `name`.
///
/// Returns `Ok(None)` for header names no parser handles, and
/// [`FieldError::MissingValue`] when a recognized header has no value.
pub fn parse_field(name: &str, value: Option<&str>) -> Result<Option<ParsedField>> {
    let Some(kind) = FieldKind::from_name(name) else {
        return Ok(None);
    };
    let value = value.ok_or_else(|| FieldError::missing(name))?;
    parse_kind(kind, value).map(Some)
}
