//! Scan position over a borrowed byte range.
//!
//! A [`ParserCursor`] is the only mutable state the tokenizer owns. One is
//! created per top-level parse call and threaded by `&mut` through every scan
//! step; each step moves it forward and never back.
//!
//! Invariants
//! - `lower_bound <= pos <= upper_bound` at all times.
//! - `pos` is monotonically non-decreasing.
//!
//! Violations are caller bugs. Debug builds assert; release builds clamp so
//! the invariant still holds and scanning stays in bounds.

use core::fmt;

/// A forward-only position bounded by `[lower_bound, upper_bound]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserCursor {
    lower_bound: usize,
    upper_bound: usize,
    pos: usize,
}

impl ParserCursor {
    /// Creates a cursor positioned at `lower_bound`.
    #[must_use]
    pub fn new(lower_bound: usize, upper_bound: usize) -> Self {
        debug_assert!(
            lower_bound <= upper_bound,
            "lower bound {lower_bound} exceeds upper bound {upper_bound}"
        );
        let lower_bound = lower_bound.min(upper_bound);
        Self {
            lower_bound,
            upper_bound,
            pos: lower_bound,
        }
    }

    /// Creates a cursor spanning all of `buf`.
    #[must_use]
    pub fn over(buf: &[u8]) -> Self {
        Self::new(0, buf.len())
    }

    /// First addressable offset.
    #[inline]
    #[must_use]
    pub fn lower_bound(&self) -> usize {
        self.lower_bound
    }

    /// Exclusive end of the scannable range.
    #[inline]
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.upper_bound
    }

    /// Current offset.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left between the position and the upper bound.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.upper_bound - self.pos
    }

    /// `true` once the position has reached the upper bound.
    #[inline]
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.pos >= self.upper_bound
    }

    /// Moves the cursor to `pos`.
    ///
    /// `pos` must not be behind the current position nor past the upper
    /// bound.
    pub fn update_pos(&mut self, pos: usize) {
        debug_assert!(
            pos >= self.pos,
            "cursor moved backward from {} to {pos}",
            self.pos
        );
        debug_assert!(
            pos <= self.upper_bound,
            "cursor moved to {pos} past upper bound {}",
            self.upper_bound
        );
        self.pos = pos.clamp(self.pos, self.upper_bound);
    }

    /// Checks the bounds invariant. Used by the fuzz target.
    #[cfg(any(test, feature = "fuzzing"))]
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.lower_bound <= self.pos && self.pos <= self.upper_bound
    }
}

impl fmt::Display for ParserCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}>{}>{}]", self.lower_bound, self.pos, self.upper_bound)
    }
}
