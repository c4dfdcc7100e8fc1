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

/// A class declaration with an optional superclass, e.g.,
/// `class Point extends Vector2D { ... }`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassDeclaration {
    /// The name of the class.
    pub id: Identifier,
    /// The optional superclass name after `extends`.
    pub super_class: Option<Identifier>,
    /// The member definitions of the class.
    pub body: ClassBody,
    /// The span from the `class` keyword to the closing brace.
    pub span: Span,
}

simple_node_impl!(ClassDeclaration);

impl fmt::Display for ClassDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.id)?;
        if let Some(super_class) = &self.super_class {
            write!(f, " extends {super_class}")?;
        }
        write!(f, " {}", self.body)
    }
}

impl Serialize for ClassDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClassDeclaration", 6)?;
        state.serialize_field("type", "ClassDeclaration")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("superClass", &self.super_class)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
