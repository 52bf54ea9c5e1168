//! Typed results of header field parsing.

pub mod content_disposition;
pub mod content_type;
pub mod field;
pub mod priority;
pub mod transfer_encoding;
