use bstr::{BStr, BString};
use thiserror::Error;

/// Failure to split a header field into name and value.
///
/// Only field splitting can fail. Body and parameter scanning resolve every
/// malformed input deterministically instead of rejecting it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    /// The field contains no `:` octet.
    #[error("invalid MIME field: no name/value separator found: {raw}")]
    MissingSeparator {
        /// The offending field, kept for diagnostics.
        raw: BString,
    },
}

impl FieldError {
    /// The raw bytes that failed to parse.
    #[must_use]
    pub fn raw(&self) -> &BStr {
        match self {
            FieldError::MissingSeparator { raw } => raw.as_ref(),
        }
    }
}
