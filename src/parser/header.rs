//! Raw header blocks: byte decoding, unfolding, and per-field parsing.

use tracing::warn;

use crate::error::Result;
use crate::model::field::{FieldKind, ParsedField};

use super::field::parse_kind;

/// One recognized header of a block together with its parse outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldOutcome {
    /// Header name as written in the block.
    pub name: String,
    /// Unfolded raw value.
    pub raw: String,
    pub result: Result<ParsedField>,
}

/// Parse every recognized field of a raw header block.
///
/// Each field is parsed independently: a failure is logged and recorded in its
/// own [`FieldOutcome`] without affecting the others. Unrecognized headers are
/// omitted.
pub fn parse_header_block(raw_headers: &[u8]) -> Vec<FieldOutcome> {
    let text = decode_header_bytes(raw_headers);
    unfold_headers(&text)
        .into_iter()
        .filter_map(|(name, raw)| {
            let kind = FieldKind::from_name(&name)?;
            let result = parse_kind(kind, &raw);
            if let Err(ref e) = result {
                warn!(header = %name, value = %raw, error = %e, "Failed to parse header field");
            }
            Some(FieldOutcome { name, raw, result })
        })
        .collect()
}

/// Decode raw header bytes to a string.
///
/// Tries UTF-8 first, then falls back to Windows-1252 (which accepts every byte).
pub fn decode_header_bytes(bytes: &[u8]) -> String {
    // Strip BOM if present
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Unfold headers: join continuation lines (starting with space or tab) with the previous header.
///
/// Returns `(name, value)` pairs in order; the name keeps its original case.
/// Parsing stops at the first empty line (end of the header section).
pub fn unfold_headers(text: &str) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(last) = result.last_mut() {
                last.1.push(' ');
                last.1.push_str(line.trim());
            }
        } else if let Some(colon_pos) = line.find(':') {
            let name = line[..colon_pos].trim().to_string();
            let value = line[colon_pos + 1..].trim().to_string();
            result.push((name, value));
        }
        // Lines without a colon and not a continuation are silently skipped
    }

    result
}
