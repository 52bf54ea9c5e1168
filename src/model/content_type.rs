//! Content-Type entity (RFC 2045 §5).

use std::collections::BTreeMap;
use std::fmt;

use crate::codec::params::{format_parameter, is_token_char};
use crate::codec::quote::quote;

/// RFC 2045 §5.2 default media type.
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// A parsed `Content-Type` header.
///
/// # Examples
/// - `text/plain; charset=utf-8` → `media_type = "text/plain"`, `charset = Some("utf-8")`
/// - `multipart/mixed; boundary="b1"` → `boundary = Some("b1")`
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentTypeInfo {
    /// `type/subtype`, as sent. Malformed `text` variants are normalized to `text/plain`.
    pub media_type: String,

    /// Multipart boundary delimiter.
    pub boundary: Option<String>,

    /// Charset name, stripped of quoting and whitespace artifacts.
    pub charset: Option<String>,

    /// Human-readable name with encoded-words resolved.
    pub name: Option<String>,

    /// Any other parameter, keyed by upper-cased name. Values are not decoded.
    pub parameters: BTreeMap<String, String>,
}

impl Default for ContentTypeInfo {
    fn default() -> Self {
        Self {
            media_type: DEFAULT_MEDIA_TYPE.to_string(),
            boundary: None,
            charset: None,
            name: None,
            parameters: BTreeMap::new(),
        }
    }
}

impl ContentTypeInfo {
    /// Look up an extension parameter, case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_uppercase())
            .map(String::as_str)
    }

    /// `true` for any `multipart/*` media type.
    pub fn is_multipart(&self) -> bool {
        self.media_type
            .get(..10)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("multipart/"))
    }
}

impl fmt::Display for ContentTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `type/subtype` goes out bare; anything else must be quoted to survive a `;`
        if self
            .media_type
            .bytes()
            .all(|b| b == b'/' || is_token_char(b))
        {
            f.write_str(&self.media_type)?;
        } else {
            f.write_str(&quote(&self.media_type))?;
        }
        if let Some(ref boundary) = self.boundary {
            f.write_str(&format_parameter("boundary", boundary))?;
        }
        if let Some(ref charset) = self.charset {
            f.write_str(&format_parameter("charset", charset))?;
        }
        if let Some(ref name) = self.name {
            f.write_str(&format_parameter("name", name))?;
        }
        for (key, value) in &self.parameters {
            f.write_str(&format_parameter(&key.to_lowercase(), value))?;
        }
        Ok(())
    }
}
