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

/// An anonymous function value, produced for method and constructor
/// definitions in a class body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionExpression {
    /// The parameters of the function.
    pub params: Vec<Identifier>,
    /// The body of the function.
    pub body: BlockStatement,
    /// The span from the opening parenthesis of the parameter list to the
    /// closing brace of the body.
    pub span: Span,
}

simple_node_impl!(FunctionExpression);

impl fmt::Display for FunctionExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.body)
    }
}

impl Serialize for FunctionExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FunctionExpression", 8)?;
        state.serialize_field("type", "FunctionExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("expression", &false)?;
        state.serialize_field("generator", &false)?;
        state.serialize_field("async", &false)?;
        state.serialize_field("params", &self.params)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
