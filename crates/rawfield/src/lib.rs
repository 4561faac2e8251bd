//! A byte-exact tokenizer for Internet-message header fields.
//!
//! Given the raw octets of one field, e.g.
//! `Content-Type: text/plain; charset="utf-8"`, this crate
//!
//! 1. splits it at the first `:` into a name and a body ([`parse_field`]), and
//! 2. scans the body into a principal value and an ordered list of
//!    `name[=value]` parameters, honouring double quotes and backslash
//!    escapes ([`parse_raw_body`]).
//!
//! Octets are decoded one `char` per byte. Encoded words, folding, charset
//! conversion and parameter-name validation are left to callers.
//!
//! ```rust
//! let field = rawfield::parse_field(b"Content-Disposition: attachment; filename=\"a;b.txt\"")?;
//! let body = rawfield::parse_raw_body(&field);
//!
//! assert_eq!(body.value(), "attachment");
//! assert_eq!(body.param("filename").and_then(|p| p.value()), Some("a;b.txt"));
//! # Ok::<(), rawfield::FieldError>(())
//! ```
//!
//! With the `std` feature, [`StructuredField`] wraps a field with a grammar
//! of its own and memoizes the parse outcome.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod body;
mod cursor;
mod error;
mod field;
#[cfg(feature = "std")]
mod structured;
pub mod text;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use body::{NameValuePair, RawBody};
pub use cursor::ParserCursor;
pub use error::FieldError;
pub use field::RawField;
#[cfg(feature = "std")]
pub use structured::{FieldGrammar, StructuredField};
pub use tokenizer::{DELIMS, RawFieldParser, parse_field, parse_raw_body};
