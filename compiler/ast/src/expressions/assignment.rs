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

use super::*;

/// A simple or compound assignment operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentOperation {
    /// Simple assignment, i.e. `=`.
    Assign,
    /// Addition assignment, i.e. `+=`.
    AddAssign,
    /// Division assignment, i.e. `/=`.
    DivAssign,
    /// Multiplication assignment, i.e. `*=`.
    MulAssign,
    /// Subtraction assignment, i.e. `-=`.
    SubAssign,
}

impl AssignmentOperation {
    /// The spelling of the operator in the source, e.g. `+=`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::DivAssign => "/=",
            Self::MulAssign => "*=",
            Self::SubAssign => "-=",
        }
    }
}

impl fmt::Display for AssignmentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An assignment expression, e.g., `x = 1` or `total += price`.
///
/// The parser guarantees that `left` is an [`Identifier`] or a
/// [`MemberExpression`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignmentExpression {
    /// The assignee.
    pub left: Box<Expression>,
    /// The value assigned to `left`.
    pub right: Box<Expression>,
    /// The assignment operator.
    pub op: AssignmentOperation,
    /// The span of the whole expression.
    pub span: Span,
}

simple_node_impl!(AssignmentExpression);

impl fmt::Display for AssignmentExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Serialize for AssignmentExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AssignmentExpression", 6)?;
        state.serialize_field("type", "AssignmentExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("operator", self.op.as_str())?;
        state.serialize_field("left", &self.left)?;
        state.serialize_field("right", &self.right)?;
        state.end()
    }
}
