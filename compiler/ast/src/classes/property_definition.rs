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

/// A property definition in a class body with an optional initializer,
/// e.g., `count = 0;`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PropertyDefinition {
    /// The name of the property.
    pub key: Identifier,
    /// The optional initializer expression.
    pub value: Option<Expression>,
    /// The span from the key to the terminating semicolon.
    pub span: Span,
}

simple_node_impl!(PropertyDefinition);

impl fmt::Display for PropertyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} = {value};", self.key),
            None => write!(f, "{};", self.key),
        }
    }
}

impl Serialize for PropertyDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PropertyDefinition", 6)?;
        state.serialize_field("type", "PropertyDefinition")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("value", &self.value)?;
        // No static members in the grammar.
        state.serialize_field("static", &false)?;
        state.end()
    }
}
