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

/// An expression in statement position, terminated by a semicolon.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpressionStatement {
    /// The expression to evaluate.
    pub expression: Expression,
    /// The unquoted value of the expression when the statement is part of
    /// a directive prologue, e.g. `use strict`.
    pub directive: Option<String>,
    /// The span of the expression including the terminating semicolon.
    pub span: Span,
}

simple_node_impl!(ExpressionStatement);

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};", self.expression)
    }
}

impl Serialize for ExpressionStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.directive.is_some() { 5 } else { 4 };
        let mut state = serializer.serialize_struct("ExpressionStatement", len)?;
        state.serialize_field("type", "ExpressionStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("expression", &self.expression)?;
        if let Some(directive) = &self.directive {
            state.serialize_field("directive", directive)?;
        }
        state.end()
    }
}
