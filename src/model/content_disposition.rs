//! Content-Disposition entity (RFC 2183).

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;

use crate::codec::params::format_parameter;

/// A parsed `Content-Disposition` header.
///
/// Dates carry no timezone: they hold the UTC clock value of the instant sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentDispositionInfo {
    /// `attachment`, `inline`, or whatever token the sender used.
    pub disposition_type: String,

    /// Suggested file name (from `filename` or `name`), encoded-words resolved.
    pub file_name: Option<String>,

    pub creation_date: Option<NaiveDateTime>,
    pub modification_date: Option<NaiveDateTime>,
    pub read_date: Option<NaiveDateTime>,

    /// Approximate size in octets.
    pub size: Option<u64>,

    /// `X-` extension parameters, keyed by upper-cased name.
    pub parameters: BTreeMap<String, String>,
}

impl ContentDispositionInfo {
    /// Look up an `X-` extension parameter, case-insensitively.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_uppercase())
            .map(String::as_str)
    }

    pub fn is_attachment(&self) -> bool {
        self.disposition_type.eq_ignore_ascii_case("attachment")
    }

    pub fn is_inline(&self) -> bool {
        self.disposition_type.eq_ignore_ascii_case("inline")
    }
}

/// RFC 2822 rendering of a UTC clock value.
fn format_date(date: &NaiveDateTime) -> String {
    date.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
}

impl fmt::Display for ContentDispositionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.disposition_type)?;
        if let Some(ref file_name) = self.file_name {
            f.write_str(&format_parameter("filename", file_name))?;
        }
        let dates = [
            ("creation-date", &self.creation_date),
            ("modification-date", &self.modification_date),
            ("read-date", &self.read_date),
        ];
        for (key, date) in dates {
            if let Some(date) = date {
                f.write_str(&format_parameter(key, &format_date(date)))?;
            }
        }
        if let Some(size) = self.size {
            f.write_str(&format_parameter("size", &size.to_string()))?;
        }
        for (key, value) in &self.parameters {
            f.write_str(&format_parameter(&key.to_lowercase(), value))?;
        }
        Ok(())
    }
}
