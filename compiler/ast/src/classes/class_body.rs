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

/// A member of a class body.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassMember {
    /// A method or constructor definition.
    Method(MethodDefinition),
    /// A property definition.
    Property(PropertyDefinition),
}

impl Node for ClassMember {
    fn span(&self) -> Span {
        match self {
            Self::Method(member) => member.span(),
            Self::Property(member) => member.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Self::Method(member) => member.set_span(span),
            Self::Property(member) => member.set_span(span),
        }
    }
}

impl fmt::Display for ClassMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Method(member) => member.fmt(f),
            Self::Property(member) => member.fmt(f),
        }
    }
}

/// The braced list of member definitions of a class.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassBody {
    /// The members of the class.
    pub body: Vec<ClassMember>,
    /// The span from the opening brace to the closing brace.
    pub span: Span,
}

simple_node_impl!(ClassBody);

impl fmt::Display for ClassBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            return write!(f, "{{}}");
        }
        write!(f, "{{")?;
        for member in self.body.iter() {
            write!(f, " {member}")?;
        }
        write!(f, " }}")
    }
}

impl Serialize for ClassBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClassBody", 4)?;
        state.serialize_field("type", "ClassBody")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
