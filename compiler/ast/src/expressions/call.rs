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

/// A call expression, e.g., `fib(10)` or `point.scale(2)()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallExpression {
    /// The expression resolving to the callee.
    pub callee: Box<Expression>,
    /// Expressions for the arguments passed to the callee.
    pub arguments: Vec<Expression>,
    /// The span of the whole call, from the callee to the closing parenthesis.
    pub span: Span,
}

simple_node_impl!(CallExpression);

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.callee)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{argument}")?;
        }
        write!(f, ")")
    }
}

impl Serialize for CallExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CallExpression", 5)?;
        state.serialize_field("type", "CallExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("callee", &self.callee)?;
        state.serialize_field("arguments", &self.arguments)?;
        state.end()
    }
}
