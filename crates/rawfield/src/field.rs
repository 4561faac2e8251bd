use alloc::{borrow::Cow, string::String};
use core::fmt;

use bstr::{BStr, BString};

use crate::text;

/// A header field split at its first `:`.
///
/// A field parsed from bytes keeps those bytes and the separator offset so
/// the body can be scanned in place. A field built from decoded strings has
/// no backing bytes; its body is re-encoded byte-per-char when scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    raw: Option<BString>,
    delimiter_idx: usize,
    name: String,
    body: Option<String>,
}

impl RawField {
    /// Creates a field from an already decoded name and body.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            raw: None,
            delimiter_idx: 0,
            name: name.into(),
            body: Some(body.into()),
        }
    }

    pub(crate) fn from_raw(raw: BString, delimiter_idx: usize, name: String) -> Self {
        debug_assert_eq!(raw.get(delimiter_idx), Some(&b':'));
        Self {
            raw: Some(raw),
            delimiter_idx,
            name,
            body: None,
        }
    }

    /// The trimmed field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The original bytes, when the field was parsed from them.
    #[must_use]
    pub fn raw(&self) -> Option<&BStr> {
        self.raw.as_ref().map(BStr::new)
    }

    /// Offset of the `:` in [`raw`](Self::raw). Zero when there are no raw
    /// bytes.
    #[must_use]
    pub fn delimiter_idx(&self) -> usize {
        self.delimiter_idx
    }

    /// The decoded field body.
    ///
    /// For parsed fields this is everything after the `:`, read one char per
    /// byte. A single leading space is dropped when more octets follow it, so
    /// `X: ` keeps its space. Tabs and folding are left in place.
    #[must_use]
    pub fn body(&self) -> Cow<'_, str> {
        if let Some(body) = &self.body {
            return Cow::Borrowed(body);
        }
        let Some(raw) = &self.raw else {
            return Cow::Borrowed("");
        };
        let mut off = (self.delimiter_idx + 1).min(raw.len());
        if raw.len() > off + 1 && raw[off] == text::SPACE {
            off += 1;
        }
        Cow::Owned(text::copy(raw, off, raw.len()))
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.body())
    }
}
