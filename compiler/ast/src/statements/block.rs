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

/// A block `{ [stmt]* }` consisting of a list of statements to execute
/// in order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BlockStatement {
    /// The statements to execute.
    pub body: Vec<Statement>,
    /// The span from the opening brace to the closing brace.
    pub span: Span,
}

simple_node_impl!(BlockStatement);

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{")?;
        for statement in self.body.iter() {
            write!(f, " {statement}")?;
        }
        write!(f, " }}")
    }
}

impl Serialize for BlockStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BlockStatement", 4)?;
        state.serialize_field("type", "BlockStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
