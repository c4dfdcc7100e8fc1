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

/// A function declaration, e.g., `function add(a, b) { return a + b; }`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FunctionDeclaration {
    /// The name of the function.
    pub id: Identifier,
    /// The parameters of the function. Only plain identifiers; the grammar
    /// has no patterns.
    pub params: Vec<Identifier>,
    /// The body of the function.
    pub body: BlockStatement,
    /// The span from the `function` keyword to the closing brace.
    pub span: Span,
}

simple_node_impl!(FunctionDeclaration);

impl fmt::Display for FunctionDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function {}(", self.id)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {}", self.body)
    }
}

impl Serialize for FunctionDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FunctionDeclaration", 9)?;
        state.serialize_field("type", "FunctionDeclaration")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("id", &self.id)?;
        // The grammar has no function expressions in statement position,
        // arrows, async functions, or generators.
        state.serialize_field("expression", &false)?;
        state.serialize_field("generator", &false)?;
        state.serialize_field("async", &false)?;
        state.serialize_field("params", &self.params)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
