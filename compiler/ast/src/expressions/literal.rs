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

/// The value carried by a literal expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LiteralValue {
    /// A decimal number literal, e.g., `42`.
    Number(i64),
    /// A string literal with its quotes stripped, e.g., `Hello World!`.
    String(String),
    /// A boolean literal, either `true` or `false`.
    Boolean(bool),
    /// The `null` literal.
    Null,
}

impl Serialize for LiteralValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_i64(*value),
            Self::String(value) => serializer.serialize_str(value),
            Self::Boolean(value) => serializer.serialize_bool(*value),
            Self::Null => serializer.serialize_none(),
        }
    }
}

/// A literal expression, e.g., `42`, `"Hello World!"`, `true`, or `null`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    /// The parsed value of the literal.
    pub value: LiteralValue,
    /// The verbatim source text of the literal, with quotes for strings.
    pub raw: String,
    /// The span of the literal.
    pub span: Span,
}

simple_node_impl!(Literal);

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Literal", 5)?;
        state.serialize_field("type", "Literal")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("raw", &self.raw)?;
        state.end()
    }
}
