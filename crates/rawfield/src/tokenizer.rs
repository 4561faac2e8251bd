//! The field tokenizer.
//!
//! Every scan reads forward from a [`ParserCursor`] and leaves the cursor just
//! past what it consumed. There is no backtracking and no lookahead beyond the
//! current octet.
//!
//! Scope
//! - Splitting a field at its first `:` is strict and fails if there is none.
//! - Body and parameter scanning never fail. Stray delimiters, empty names and
//!   unterminated quotes all resolve to a best-effort value.
//!
//! Quoting
//! - An unescaped `"` toggles the quoted state while scanning a value.
//! - Inside quotes, `\` escapes exactly the next octet: that octet neither
//!   toggles quoting nor ends the value.
//! - Outside quotes, `\` is an ordinary octet.
//! - After scanning, a trimmed value of at least two octets that starts and
//!   ends with `"` has both quotes removed and its interior unescaped.

use alloc::vec::Vec;

use bstr::BString;
use log::{debug, trace};

use crate::{
    body::{NameValuePair, RawBody},
    cursor::ParserCursor,
    error::FieldError,
    field::RawField,
    text::{self, BACKSLASH, DQUOTE, copy, copy_escaped, copy_trimmed, is_one_of, is_whitespace},
};

const COLON: u8 = b':';
const EQUALS: u8 = b'=';

/// Default parameter delimiters.
pub const DELIMS: &[u8] = b";";

/// Stateless tokenizer for header fields.
///
/// All state lives in the [`ParserCursor`] handed to each call, so one value
/// may be shared freely between threads.
///
/// ```rust
/// use rawfield::RawFieldParser;
///
/// let field = RawFieldParser::DEFAULT
///     .parse_field(b"Content-Type: text/plain; charset=\"utf-8\"")
///     .unwrap();
/// let body = RawFieldParser::DEFAULT.parse_raw_body(&field);
///
/// assert_eq!(field.name(), "Content-Type");
/// assert_eq!(body.value(), "text/plain");
/// assert_eq!(body.params()[0].value(), Some("utf-8"));
/// assert!(body.params()[0].is_quoted());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawFieldParser;

impl RawFieldParser {
    /// The shared instance.
    pub const DEFAULT: RawFieldParser = RawFieldParser;

    /// Splits `raw` at its first `:`.
    ///
    /// # Errors
    ///
    /// [`FieldError::MissingSeparator`] if `raw` contains no `:`.
    pub fn parse_field(&self, raw: &[u8]) -> Result<RawField, FieldError> {
        let Some(idx) = text::index_of(raw, COLON) else {
            debug!("no name/value separator in {} byte field", raw.len());
            return Err(FieldError::MissingSeparator {
                raw: BString::from(raw),
            });
        };
        let name = copy_trimmed(raw, 0, idx);
        trace!("split field {name:?} at {idx}");
        Ok(RawField::from_raw(BString::from(raw), idx, name))
    }

    /// Scans the body of `field` into a principal value and parameters.
    ///
    /// Uses the raw bytes after the separator when the field has them, and
    /// otherwise the decoded body mapped back to bytes.
    #[must_use]
    pub fn parse_raw_body(&self, field: &RawField) -> RawBody {
        if let Some(raw) = field.raw() {
            let mut cursor = ParserCursor::new(field.delimiter_idx() + 1, raw.len());
            return self.parse_raw_body_at(raw, &mut cursor);
        }
        let buf = text::encode(&field.body());
        let mut cursor = ParserCursor::over(&buf);
        self.parse_raw_body_at(&buf, &mut cursor)
    }

    /// Scans a body starting at the cursor.
    ///
    /// The principal value runs up to the first `;` or the upper bound.
    /// Parameters follow the `;`, if there is one.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's upper bound is past the end of `buf`.
    pub fn parse_raw_body_at(&self, buf: &[u8], cursor: &mut ParserCursor) -> RawBody {
        check_bound(buf, cursor);
        let from = cursor.pos();
        let to = cursor.upper_bound();
        let pos = buf[from..to]
            .iter()
            .position(|&b| is_one_of(b, DELIMS))
            .map_or(to, |off| from + off);

        let value = copy_trimmed(buf, from, pos);
        if pos == to {
            cursor.update_pos(pos);
            trace!("body {value:?} has no parameters");
            return RawBody::new(value, Vec::new());
        }
        trace!("body {value:?} ends at {pos}");
        cursor.update_pos(pos + 1);
        let params = self.parse_parameters(buf, cursor);
        RawBody::new(value, params)
    }

    /// Scans parameters until the cursor reaches its upper bound.
    ///
    /// Returns nothing if only whitespace is left.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's upper bound is past the end of `buf`.
    pub fn parse_parameters(&self, buf: &[u8], cursor: &mut ParserCursor) -> Vec<NameValuePair> {
        check_bound(buf, cursor);
        let mut params = Vec::new();
        let from = cursor.pos();
        let to = cursor.upper_bound();
        let pos = buf[from..to]
            .iter()
            .position(|&b| !is_whitespace(b))
            .map_or(to, |off| from + off);
        cursor.update_pos(pos);

        while !cursor.at_end() {
            params.push(self.parse_parameter(buf, cursor));
        }
        params
    }

    /// Scans one parameter delimited by `;`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's upper bound is past the end of `buf`.
    pub fn parse_parameter(&self, buf: &[u8], cursor: &mut ParserCursor) -> NameValuePair {
        self.parse_parameter_with(buf, cursor, DELIMS)
    }

    /// Scans one parameter, ending it at any octet in `delimiters` found
    /// outside quotes.
    ///
    /// The cursor ends just past the delimiter, or at the upper bound if none
    /// was found. A cursor already at its upper bound yields an empty,
    /// valueless parameter and stays put.
    ///
    /// # Panics
    ///
    /// Panics if the cursor's upper bound is past the end of `buf`.
    pub fn parse_parameter_with(
        &self,
        buf: &[u8],
        cursor: &mut ParserCursor,
        delimiters: &[u8],
    ) -> NameValuePair {
        check_bound(buf, cursor);
        let index_from = cursor.pos();
        let index_to = cursor.upper_bound();
        let mut pos = index_from;
        let mut terminated = false;

        while pos < index_to {
            let b = buf[pos];
            if b == EQUALS {
                break;
            }
            if is_one_of(b, delimiters) {
                terminated = true;
                break;
            }
            pos += 1;
        }

        let name = if pos == index_to {
            terminated = true;
            copy_trimmed(buf, index_from, index_to)
        } else {
            let name = copy_trimmed(buf, index_from, pos);
            pos += 1;
            name
        };

        if terminated {
            cursor.update_pos(pos);
            trace!("parameter {name:?} has no value");
            return NameValuePair::from_parts(name, None, false);
        }

        let value_from = pos;
        let mut quoted = false;
        let mut escaped = false;
        while pos < index_to {
            let b = buf[pos];
            if b == DQUOTE && !escaped {
                quoted = !quoted;
            }
            if !quoted && !escaped && is_one_of(b, delimiters) {
                terminated = true;
                break;
            }
            escaped = !escaped && quoted && b == BACKSLASH;
            pos += 1;
        }

        let (mut i1, mut i2) = text::trim_range(buf, value_from, pos);
        let stripped = i2 - i1 >= 2 && buf[i1] == DQUOTE && buf[i2 - 1] == DQUOTE;
        if stripped {
            i1 += 1;
            i2 -= 1;
        }
        let value = if stripped {
            copy_escaped(buf, i1, i2)
        } else {
            copy(buf, i1, i2)
        };

        if terminated {
            pos += 1;
        }
        cursor.update_pos(pos);
        trace!("parameter {name:?} = {value:?} (quoted: {stripped})");
        NameValuePair::from_parts(name, Some(value), stripped)
    }
}

fn check_bound(buf: &[u8], cursor: &ParserCursor) {
    assert!(
        cursor.upper_bound() <= buf.len(),
        "cursor bound {} is past the end of a {} byte buffer",
        cursor.upper_bound(),
        buf.len()
    );
}

/// Splits `raw` with [`RawFieldParser::DEFAULT`].
///
/// # Errors
///
/// [`FieldError::MissingSeparator`] if `raw` contains no `:`.
pub fn parse_field(raw: &[u8]) -> Result<RawField, FieldError> {
    RawFieldParser::DEFAULT.parse_field(raw)
}

/// Scans the body of `field` with [`RawFieldParser::DEFAULT`].
#[must_use]
pub fn parse_raw_body(field: &RawField) -> RawBody {
    RawFieldParser::DEFAULT.parse_raw_body(field)
}
