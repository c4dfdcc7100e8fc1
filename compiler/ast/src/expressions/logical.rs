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

/// A short-circuiting logical operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LogicalOperation {
    /// Logical AND, i.e. `&&`.
    And,
    /// Logical OR, i.e. `||`.
    Or,
}

impl LogicalOperation {
    /// The spelling of the operator in the source, e.g. `&&`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl fmt::Display for LogicalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A short-circuiting logical expression, e.g., `a && b`.
///
/// Distinct from [`BinaryExpression`] in the reference format because the
/// right operand may never be evaluated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicalExpression {
    /// The left operand of the expression.
    pub left: Box<Expression>,
    /// The right operand of the expression.
    pub right: Box<Expression>,
    /// The operand defining the meaning of the resulting logical expression.
    pub op: LogicalOperation,
    /// The span covering both operands, including any enclosing parentheses.
    pub span: Span,
}

simple_node_impl!(LogicalExpression);

impl fmt::Display for LogicalExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Serialize for LogicalExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("LogicalExpression", 6)?;
        state.serialize_field("type", "LogicalExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("operator", self.op.as_str())?;
        state.serialize_field("left", &self.left)?;
        state.serialize_field("right", &self.right)?;
        state.end()
    }
}
