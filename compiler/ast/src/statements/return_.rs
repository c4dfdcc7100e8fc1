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

/// A `return argument?;` statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReturnStatement {
    /// The optional expression to return.
    pub argument: Option<Expression>,
    /// The span from the `return` keyword to the terminating semicolon.
    pub span: Span,
}

simple_node_impl!(ReturnStatement);

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.argument {
            Some(argument) => write!(f, "return {argument};"),
            None => write!(f, "return;"),
        }
    }
}

impl Serialize for ReturnStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ReturnStatement", 4)?;
        state.serialize_field("type", "ReturnStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("argument", &self.argument)?;
        state.end()
    }
}
