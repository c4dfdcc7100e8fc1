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

/// An `if (test) consequent else alternate` statement. An `else` always
/// binds to the nearest unmatched `if`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IfStatement {
    /// The condition deciding the branch to take.
    pub test: Expression,
    /// The statement to execute when `test` holds.
    pub consequent: Box<Statement>,
    /// An optional statement to execute when `test` does not hold.
    pub alternate: Option<Box<Statement>>,
    /// The span from the `if` keyword to the end of the taken branch.
    pub span: Span,
}

simple_node_impl!(IfStatement);

impl fmt::Display for IfStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", self.test, self.consequent)?;
        if let Some(alternate) = &self.alternate {
            write!(f, " else {alternate}")?;
        }
        Ok(())
    }
}

impl Serialize for IfStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IfStatement", 6)?;
        state.serialize_field("type", "IfStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("test", &self.test)?;
        state.serialize_field("consequent", &self.consequent)?;
        state.serialize_field("alternate", &self.alternate)?;
        state.end()
    }
}
