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

/// A member access expression, e.g., `point.x` or `list[0]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberExpression {
    /// The expression the member belongs to.
    pub object: Box<Expression>,
    /// The accessed member: an identifier for `object.name`, an arbitrary
    /// expression for `object[expr]`.
    pub property: Box<Expression>,
    /// Whether the access is computed, i.e. written with brackets.
    pub computed: bool,
    /// The span of the whole access.
    pub span: Span,
}

simple_node_impl!(MemberExpression);

impl fmt::Display for MemberExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.computed {
            write!(f, "{}[{}]", self.object, self.property)
        } else {
            write!(f, "{}.{}", self.object, self.property)
        }
    }
}

impl Serialize for MemberExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MemberExpression", 6)?;
        state.serialize_field("type", "MemberExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("object", &self.object)?;
        state.serialize_field("property", &self.property)?;
        state.serialize_field("computed", &self.computed)?;
        state.end()
    }
}
