//! Fields whose bodies follow a richer grammar than `value; params`.
//!
//! A [`StructuredField`] pairs a [`RawField`] with a [`FieldGrammar`] (an
//! address-list parser, a date parser, ...) and runs the grammar at most once,
//! on first access. Success and failure are both cached: afterwards exactly
//! one of [`StructuredField::structured_value`] and
//! [`StructuredField::parse_error`] is `Some`.
//!
//! ```rust
//! use rawfield::{RawField, StructuredField};
//!
//! let field = RawField::new("Lines", "42");
//! let lines = StructuredField::new(field, |body: &str| body.trim().parse::<u32>());
//!
//! assert_eq!(lines.structured_value(), Some(&42));
//! assert!(lines.parse_error().is_none());
//! ```

use alloc::borrow::Cow;
use core::fmt;

use log::trace;
use once_cell::sync::OnceCell;

use crate::field::RawField;

/// A parser for the decoded body of one kind of field.
pub trait FieldGrammar {
    /// The structured result.
    type Output;
    /// The failure reported when the body does not match the grammar.
    type Error;

    /// Parses a decoded field body.
    ///
    /// # Errors
    ///
    /// When `body` does not match the grammar.
    fn parse(&self, body: &str) -> Result<Self::Output, Self::Error>;
}

impl<F, T, E> FieldGrammar for F
where
    F: Fn(&str) -> Result<T, E>,
{
    type Output = T;
    type Error = E;

    fn parse(&self, body: &str) -> Result<T, E> {
        self(body)
    }
}

/// A field parsed lazily by a [`FieldGrammar`], with the outcome memoized.
///
/// Concurrent first accesses block on a single parse and all observe its
/// outcome.
pub struct StructuredField<G: FieldGrammar> {
    field: RawField,
    grammar: G,
    outcome: OnceCell<Result<G::Output, G::Error>>,
}

impl<G: FieldGrammar> StructuredField<G> {
    /// Wraps `field` without parsing it.
    pub fn new(field: RawField, grammar: G) -> Self {
        Self {
            field,
            grammar,
            outcome: OnceCell::new(),
        }
    }

    /// The wrapped field.
    #[must_use]
    pub fn field(&self) -> &RawField {
        &self.field
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// The decoded body the grammar sees.
    #[must_use]
    pub fn body(&self) -> Cow<'_, str> {
        self.field.body()
    }

    /// Whether the grammar has run.
    #[must_use]
    pub fn is_parsed(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// The parse outcome, parsing on first call.
    pub fn outcome(&self) -> &Result<G::Output, G::Error> {
        self.outcome.get_or_init(|| {
            let body = self.field.body();
            let outcome = self.grammar.parse(&body);
            trace!(
                "parsed structured field {:?}: {}",
                self.field.name(),
                if outcome.is_ok() { "ok" } else { "error" }
            );
            outcome
        })
    }

    /// The structured value, or `None` if the body failed to parse.
    pub fn structured_value(&self) -> Option<&G::Output> {
        self.outcome().as_ref().ok()
    }

    /// The cached parse failure, or `None` if the body parsed.
    pub fn parse_error(&self) -> Option<&G::Error> {
        self.outcome().as_ref().err()
    }

    /// Consumes the field and returns the outcome, parsing if needed.
    ///
    /// # Errors
    ///
    /// The grammar's failure, if the body did not parse.
    pub fn into_outcome(self) -> Result<G::Output, G::Error> {
        let Self {
            field,
            grammar,
            outcome,
        } = self;
        match outcome.into_inner() {
            Some(outcome) => outcome,
            None => grammar.parse(&field.body()),
        }
    }
}

impl<G> fmt::Debug for StructuredField<G>
where
    G: FieldGrammar,
    G::Output: fmt::Debug,
    G::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredField")
            .field("field", &self.field)
            .field("outcome", &self.outcome.get())
            .finish_non_exhaustive()
    }
}
