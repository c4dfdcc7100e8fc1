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

/// The kind of a method definition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MethodKind {
    /// The `constructor` method of a class.
    Constructor,
    /// Any other method.
    Method,
}

impl MethodKind {
    /// The kind as spelled in the reference format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A method definition in a class body, e.g., `scale(factor) { ... }`.
/// A member named `constructor` has `kind` `Constructor`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MethodDefinition {
    /// The name of the method.
    pub key: Identifier,
    /// Whether the method is the class constructor.
    pub kind: MethodKind,
    /// The function value holding parameters and body.
    pub value: FunctionExpression,
    /// The span from the key to the closing brace of the body.
    pub span: Span,
}

simple_node_impl!(MethodDefinition);

impl fmt::Display for MethodDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.value)
    }
}

impl Serialize for MethodDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MethodDefinition", 7)?;
        state.serialize_field("type", "MethodDefinition")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("kind", self.kind.as_str())?;
        // No static members in the grammar.
        state.serialize_field("static", &false)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}
