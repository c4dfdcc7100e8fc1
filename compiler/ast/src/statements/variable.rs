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

/// The declaration keyword of a variable declaration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclarationKind {
    /// A `const` declaration.
    Const,
    /// A `let` declaration.
    Let,
}

impl DeclarationKind {
    /// The spelling of the keyword in the source.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Let => "let",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single declared variable with an optional initializer, e.g., the
/// `b = 1` in `let a, b = 1;`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDeclarator {
    /// The name of the declared variable.
    pub id: Identifier,
    /// An optional initializer expression.
    pub init: Option<Expression>,
    /// The span from the name to the end of the initializer, if any.
    pub span: Span,
}

simple_node_impl!(VariableDeclarator);

impl fmt::Display for VariableDeclarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.init {
            Some(init) => write!(f, "{} = {init}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}

impl Serialize for VariableDeclarator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VariableDeclarator", 5)?;
        state.serialize_field("type", "VariableDeclarator")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("init", &self.init)?;
        state.end()
    }
}

/// A variable declaration statement, e.g., `let a, b = 1;`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDeclaration {
    /// The declared variables.
    pub declarations: Vec<VariableDeclarator>,
    /// The declaration keyword, `let` or `const`.
    pub kind: DeclarationKind,
    /// The span of the declaration. Includes the terminating semicolon in
    /// statement position; ends at the last declarator in a `for` init.
    pub span: Span,
}

simple_node_impl!(VariableDeclaration);

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{declaration}")?;
        }
        write!(f, ";")
    }
}

impl Serialize for VariableDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VariableDeclaration", 5)?;
        state.serialize_field("type", "VariableDeclaration")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("declarations", &self.declarations)?;
        state.serialize_field("kind", self.kind.as_str())?;
        state.end()
    }
}
