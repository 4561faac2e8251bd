//! Byte-range helpers shared by the field splitter and the tokenizer.
//!
//! Header tokens are read one octet per `char` (Latin-1): byte `0xE9` becomes
//! `'\u{e9}'`, never part of a multi-byte UTF-8 sequence. Trimming and quote
//! detection are done on the bytes, so this mapping must stay exactly
//! byte-per-char.

use alloc::{string::String, vec::Vec};

use bstr::ByteSlice;

pub(crate) const SPACE: u8 = 0x20;
pub(crate) const TAB: u8 = 0x09;
pub(crate) const CR: u8 = 0x0d;
pub(crate) const LF: u8 = 0x0a;
pub(crate) const DQUOTE: u8 = b'"';
pub(crate) const BACKSLASH: u8 = b'\\';

/// Substitute for chars that have no single-octet form.
const UNMAPPABLE: u8 = b'?';

/// The header whitespace class: SP, HT, CR and LF. Nothing else is blank.
#[inline]
#[must_use]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, SPACE | TAB | CR | LF)
}

#[inline]
pub(crate) fn is_one_of(b: u8, set: &[u8]) -> bool {
    set.contains(&b)
}

/// Offset of the first `needle` in `buf`.
#[inline]
#[must_use]
pub fn index_of(buf: &[u8], needle: u8) -> Option<usize> {
    buf.find_byte(needle)
}

/// Narrows `[from, to)` past leading and trailing whitespace.
#[must_use]
pub fn trim_range(buf: &[u8], mut from: usize, mut to: usize) -> (usize, usize) {
    while from < to && is_whitespace(buf[from]) {
        from += 1;
    }
    while to > from && is_whitespace(buf[to - 1]) {
        to -= 1;
    }
    (from, to)
}

/// Decodes `buf[from..to]` one char per byte.
#[must_use]
pub fn copy(buf: &[u8], from: usize, to: usize) -> String {
    buf[from..to].iter().map(|&b| char::from(b)).collect()
}

/// [`copy`] after [`trim_range`].
#[must_use]
pub fn copy_trimmed(buf: &[u8], from: usize, to: usize) -> String {
    let (from, to) = trim_range(buf, from, to);
    copy(buf, from, to)
}

/// Decodes the interior of a quoted string.
///
/// Every `\X` yields `X`, whatever `X` is. A trailing lone `\` yields
/// nothing.
#[must_use]
pub fn copy_escaped(buf: &[u8], from: usize, to: usize) -> String {
    let mut out = String::with_capacity(to - from);
    let mut escaped = false;
    for &b in &buf[from..to] {
        if escaped {
            out.push(char::from(b));
            escaped = false;
        } else if b == BACKSLASH {
            escaped = true;
        } else {
            out.push(char::from(b));
        }
    }
    out
}

/// Maps a decoded string back to octets, the inverse of [`copy`].
///
/// Chars above U+00FF cannot come out of [`copy`]; they become `?`.
#[must_use]
pub fn encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(UNMAPPABLE))
        .collect()
}
