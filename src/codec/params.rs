//! MIME parameter list decoding (RFC 2045 §5.1, RFC 2231).
//!
//! A header value such as
//!
//! ```text
//! attachment; filename*0*=utf-8''r%C3%A9sum; filename*1*=%C3%A9.txt; size=10
//! ```
//!
//! is split into an ordered list of `(key, value)` pairs. The first pair always
//! has an empty key and holds the bare leading token (`attachment`). RFC 2231
//! continuations and charset-tagged segments are merged into a single pair named
//! after the base parameter (`filename` → `résumé.txt`).
//!
//! Decoding never fails: malformed segments are skipped or kept literally.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

use super::encoded_word::decode_charset;
use super::quote::{quote, remove_quotes_if_any};

/// Characters that must be percent-encoded in an RFC 2231 `attribute-char` run.
const ATTR_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'*')
    .add(b'\'')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b'<')
    .add(b'>')
    .add(b'@')
    .add(b',')
    .add(b';')
    .add(b':')
    .add(b'\\')
    .add(b'"')
    .add(b'/')
    .add(b'[')
    .add(b']')
    .add(b'?')
    .add(b'=');

/// Decode a raw header value into its leading token and named parameters.
///
/// Keys are lower-cased. Plain values are returned trimmed but otherwise as
/// written (quotes included); RFC 2231 values are returned fully decoded.
/// Pairs appear in the order their key was first seen.
pub fn decode_parameters(raw: &str) -> Vec<(String, String)> {
    let mut segments = split_segments(raw).into_iter();

    let mut result = vec![(
        String::new(),
        segments.next().unwrap_or_default().trim().to_string(),
    )];

    // Index into `result` for each slot, so continuations land where their
    // parameter first appeared.
    let mut slots: Vec<Slot> = Vec::new();

    for segment in segments {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some(eq) = segment.find('=') else {
            debug!(segment = segment, "Skipping MIME parameter without '='");
            continue;
        };
        let key = segment[..eq].trim().to_lowercase();
        let value = segment[eq + 1..].trim();
        if key.is_empty() {
            debug!(segment = segment, "Skipping MIME parameter without a name");
            continue;
        }

        match ExtendedKey::parse(&key) {
            Some(ext) => {
                let pos = match slots.iter().position(|s| s.name == ext.name) {
                    Some(pos) => pos,
                    None => {
                        result.push((ext.name.to_string(), String::new()));
                        slots.push(Slot {
                            name: ext.name.to_string(),
                            index: result.len() - 1,
                            sections: Vec::new(),
                        });
                        slots.len() - 1
                    }
                };
                slots[pos].sections.push(Section {
                    number: ext.section,
                    encoded: ext.encoded,
                    value: value.to_string(),
                });
            }
            None => result.push((key, value.to_string())),
        }
    }

    for slot in slots {
        result[slot.index].1 = merge_sections(slot.sections);
    }

    result
}

/// Format a single `; key=value` parameter for output.
///
/// Tokens are written bare, other printable ASCII is quoted, and anything else
/// (non-ASCII, quotes, backslashes) uses the RFC 2231 `key*=utf-8''...` form so
/// that [`decode_parameters`] reproduces the value exactly.
pub fn format_parameter(key: &str, value: &str) -> String {
    if !value.is_empty() && value.bytes().all(is_token_char) {
        format!("; {key}={value}")
    } else if value
        .bytes()
        .all(|b| (b == b' ' || b.is_ascii_graphic()) && b != b'"' && b != b'\\')
    {
        format!("; {key}={}", quote(value))
    } else {
        format!("; {key}*=utf-8''{}", utf8_percent_encode(value, ATTR_ESCAPE))
    }
}

/// Checks if a byte is valid in an RFC 2045 token.
pub fn is_token_char(c: u8) -> bool {
    matches!(c,
        b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z' |
        b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' |
        b'^' | b'_' | b'`' | b'{' | b'|' | b'}' | b'~'
    )
}

/// A parameter name carrying RFC 2231 markers (`name*`, `name*N`, `name*N*`).
struct ExtendedKey<'a> {
    name: &'a str,
    section: u32,
    encoded: bool,
}

impl<'a> ExtendedKey<'a> {
    fn parse(key: &'a str) -> Option<Self> {
        let star = key.find('*')?;
        let name = &key[..star];
        if name.is_empty() {
            return None;
        }
        let rest = &key[star + 1..];

        // "name*"
        if rest.is_empty() {
            return Some(Self {
                name,
                section: 0,
                encoded: true,
            });
        }

        // "name*N" or "name*N*"
        let (digits, encoded) = match rest.strip_suffix('*') {
            Some(d) => (d, true),
            None => (rest, false),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let section = digits.parse().ok()?;
        Some(Self {
            name,
            section,
            encoded,
        })
    }
}

struct Slot {
    name: String,
    index: usize,
    sections: Vec<Section>,
}

struct Section {
    number: u32,
    encoded: bool,
    value: String,
}

/// Join continuation sections in index order and decode the result.
fn merge_sections(mut sections: Vec<Section>) -> String {
    sections.sort_by_key(|s| s.number);

    let mut charset: Option<String> = None;
    let mut bytes: Vec<u8> = Vec::new();

    for (i, section) in sections.iter().enumerate() {
        let value = remove_quotes_if_any(&section.value);
        if !section.encoded {
            bytes.extend_from_slice(value.as_bytes());
            continue;
        }

        let data = if i == 0 {
            // charset'language'data
            let mut parts = value.splitn(3, '\'');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(cs), Some(_lang), Some(data)) => {
                    charset = Some(cs.to_string());
                    data
                }
                _ => value,
            }
        } else {
            value
        };
        bytes.extend(percent_decode_str(data));
    }

    decode_charset(charset.as_deref().unwrap_or(""), &bytes)
}

/// Split on `;` outside of double-quoted strings.
fn split_segments(raw: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut escaped = false;

    for ch in raw.chars() {
        match ch {
            _ if escaped => {
                escaped = false;
                current.push(ch);
            }
            '\\' if in_quotes => {
                escaped = true;
                current.push(ch);
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ';' if !in_quotes => {
                segments.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    segments.push(current);
    segments
}
