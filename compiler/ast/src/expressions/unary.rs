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

/// A unary prefix operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UnaryOperation {
    /// Arithmetic negation, i.e. `-`.
    Negate,
    /// Logical negation, i.e. `!`.
    Not,
    /// The no-op numeric prefix, i.e. `+`.
    Plus,
}

impl UnaryOperation {
    /// The spelling of the operator in the source, e.g. `!`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Plus => "+",
        }
    }
}

impl fmt::Display for UnaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unary prefix expression applying an operator to a single operand,
/// e.g., `!ok` or `-x`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnaryExpression {
    /// The argument the operation applies to.
    pub argument: Box<Expression>,
    /// The unary operator to apply to `argument`.
    pub op: UnaryOperation,
    /// The span of the whole expression.
    pub span: Span,
}

simple_node_impl!(UnaryExpression);

impl fmt::Display for UnaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.argument)
    }
}

impl Serialize for UnaryExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("UnaryExpression", 6)?;
        state.serialize_field("type", "UnaryExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("operator", self.op.as_str())?;
        // The grammar has no postfix operators.
        state.serialize_field("prefix", &true)?;
        state.serialize_field("argument", &self.argument)?;
        state.end()
    }
}
