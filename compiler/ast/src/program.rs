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

//! A Jay program consists of a list of statements.

use crate::{simple_node_impl, Node, Statement};
use jay_span::Span;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// The root node of the AST: the top-level statements of a source file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    /// The top-level statements, in source order.
    pub body: Vec<Statement>,
    /// The span of the whole source text.
    pub span: Span,
}

simple_node_impl!(Program);

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in self.body.iter() {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Program", 5)?;
        state.serialize_field("type", "Program")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        // Modules are not part of the grammar.
        state.serialize_field("sourceType", "script")?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
