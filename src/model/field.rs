//! Header names understood by the dispatch layer and their parsed values.

use std::fmt;

use super::content_disposition::ContentDispositionInfo;
use super::content_type::ContentTypeInfo;
use super::priority::Priority;
use super::transfer_encoding::TransferEncoding;

/// A structured header field this crate knows how to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    ContentTransferEncoding,
    Importance,
    ContentType,
    ContentDisposition,
    /// `Message-ID`, `Content-ID`: a single identifier.
    Identifier,
    /// `In-Reply-To`, `References`: a list of identifiers.
    IdentifierList,
}

impl FieldKind {
    /// Map a header name (case-insensitive) to its field kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "content-transfer-encoding" => Some(Self::ContentTransferEncoding),
            "importance" => Some(Self::Importance),
            "content-type" => Some(Self::ContentType),
            "content-disposition" => Some(Self::ContentDisposition),
            "message-id" | "content-id" | "resent-message-id" => Some(Self::Identifier),
            "in-reply-to" | "references" => Some(Self::IdentifierList),
            _ => None,
        }
    }
}

/// The typed value of one parsed header field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ParsedField {
    TransferEncoding(TransferEncoding),
    Priority(Priority),
    ContentType(ContentTypeInfo),
    ContentDisposition(ContentDispositionInfo),
    Identifier(String),
    Identifiers(Vec<String>),
}

impl fmt::Display for ParsedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransferEncoding(e) => e.fmt(f),
            Self::Priority(p) => p.fmt(f),
            Self::ContentType(ct) => ct.fmt(f),
            Self::ContentDisposition(cd) => cd.fmt(f),
            Self::Identifier(id) => write!(f, "<{id}>"),
            Self::Identifiers(ids) => {
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "<{id}>")?;
                }
                Ok(())
            }
        }
    }
}
