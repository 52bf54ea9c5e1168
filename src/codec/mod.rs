//! Low-level decoders used by the field parsers: RFC 2231 parameters,
//! RFC 2047 encoded-words, dates, sizes and quoted strings.

pub mod date;
pub mod encoded_word;
pub mod params;
pub mod quote;
pub mod size;
