//! `mimefield` — lenient parsers for structured MIME header fields.
//!
//! Each parser is a pure function from a raw header value to a typed entity:
//!
//! - [`parse_transfer_encoding`]: `Content-Transfer-Encoding` → [`TransferEncoding`]
//! - [`parse_priority`]: `Importance` → [`Priority`]
//! - [`parse_content_type`]: `Content-Type` → [`ContentTypeInfo`]
//! - [`parse_content_disposition`]: `Content-Disposition` → [`ContentDispositionInfo`]
//! - [`parse_id`] / [`parse_multiple_ids`]: `Message-ID`, `References`, …
//!
//! Unrecognized enum tokens degrade to a default; only Content-Disposition
//! rejects input (unknown parameters, bad dates or sizes).

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;

pub use error::{FieldError, Result};
pub use model::content_disposition::ContentDispositionInfo;
pub use model::content_type::ContentTypeInfo;
pub use model::field::{FieldKind, ParsedField};
pub use model::priority::Priority;
pub use model::transfer_encoding::TransferEncoding;
pub use parser::content_disposition::parse_content_disposition;
pub use parser::content_type::parse_content_type;
pub use parser::encoding::parse_transfer_encoding;
pub use parser::field::parse_field;
pub use parser::header::parse_header_block;
pub use parser::identifier::{parse_id, parse_multiple_ids};
pub use parser::priority::parse_priority;
