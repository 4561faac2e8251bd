use alloc::string::String;

use crate::{NameValuePair, ParserCursor, RawBody, RawFieldParser};

/// Scans `buf` as a whole field body and returns the final cursor too.
pub(crate) fn scan_body(buf: &[u8]) -> (RawBody, ParserCursor) {
    let mut cursor = ParserCursor::over(buf);
    let body = RawFieldParser::DEFAULT.parse_raw_body_at(buf, &mut cursor);
    (body, cursor)
}

pub(crate) fn token(name: &str, value: &str) -> NameValuePair {
    NameValuePair::new(name, Some(String::from(value)))
}

pub(crate) fn quoted(name: &str, value: &str) -> NameValuePair {
    NameValuePair::quoted(name, value)
}

pub(crate) fn bare(name: &str) -> NameValuePair {
    NameValuePair::new(name, None)
}
