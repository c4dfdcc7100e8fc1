// Copyright (C) 2026 The Jay Team.
// This file is part of the Jay library.

// The Jay library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The Jay library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the Jay library. If not, see <https://www.gnu.org/licenses/>.

//! Defines the [`Span`] type, a range of byte offsets into the source text
//! carried by every token and AST node.

use serde::{Deserialize, Serialize};

use std::{fmt, ops::Add};

/// A byte offset into the source text.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct BytePos(pub u32);

impl BytePos {
    /// Converts a `usize` offset into a [`BytePos`].
    pub fn from_usize(n: usize) -> Self {
        Self(n as u32)
    }

    /// Converts the position back into a `usize` offset.
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl Add for BytePos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The span between two byte positions in the source text.
/// `hi` is exclusive, so the span covers `source[lo..hi]`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// The start position of the span.
    pub lo: BytePos,
    /// The end position of the span, exclusive.
    pub hi: BytePos,
}

impl Span {
    /// Generates a new span from the `lo` and `hi` positions.
    pub fn new(lo: BytePos, hi: BytePos) -> Self {
        Self { lo, hi }
    }

    /// Generates a dummy span with zero values.
    pub const fn dummy() -> Self {
        Self { lo: BytePos(0), hi: BytePos(0) }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}

impl Add for Span {
    type Output = Self;

    /// Joins two spans, covering everything from the earlier start to the
    /// later end regardless of argument order.
    fn add(self, other: Self) -> Self {
        Span::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_order_independent() {
        let first = Span::new(BytePos(0), BytePos(4));
        let second = Span::new(BytePos(6), BytePos(9));

        assert_eq!(first + second, Span::new(BytePos(0), BytePos(9)));
        assert_eq!(second + first, Span::new(BytePos(0), BytePos(9)));
    }

    #[test]
    fn test_join_of_nested_spans() {
        let outer = Span::new(BytePos(0), BytePos(10));
        let inner = Span::new(BytePos(2), BytePos(5));

        assert_eq!(outer + inner, outer);
    }
}
