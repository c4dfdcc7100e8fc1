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

/// A `while (test) body` loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhileStatement {
    /// The condition checked before every iteration.
    pub test: Expression,
    /// The statement to iterate.
    pub body: Box<Statement>,
    /// The span from the `while` keyword to the end of the body.
    pub span: Span,
}

simple_node_impl!(WhileStatement);

impl fmt::Display for WhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "while ({}) {}", self.test, self.body)
    }
}

impl Serialize for WhileStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WhileStatement", 5)?;
        state.serialize_field("type", "WhileStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("test", &self.test)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}

/// A `do body while (test);` loop. The body runs before the first check
/// of `test`; the terminating semicolon is required.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoWhileStatement {
    /// The condition checked after every iteration.
    pub test: Expression,
    /// The statement to iterate.
    pub body: Box<Statement>,
    /// The span from the `do` keyword to the terminating semicolon.
    pub span: Span,
}

simple_node_impl!(DoWhileStatement);

impl fmt::Display for DoWhileStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "do {} while ({});", self.body, self.test)
    }
}

impl Serialize for DoWhileStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DoWhileStatement", 5)?;
        state.serialize_field("type", "DoWhileStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("body", &self.body)?;
        state.serialize_field("test", &self.test)?;
        state.end()
    }
}

/// The init slot of a `for` statement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    /// A declaration init, e.g., `for (let i = 0; ...)`. The declaration
    /// has no terminating semicolon of its own.
    VariableDeclaration(VariableDeclaration),
    /// A bare expression init, e.g., `for (i = 0; ...)`.
    Expression(Expression),
}

impl fmt::Display for ForInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // A for-init declaration carries no semicolon of its own.
            Self::VariableDeclaration(declaration) => {
                write!(f, "{} ", declaration.kind)?;
                for (i, declarator) in declaration.declarations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{declarator}")?;
                }
                Ok(())
            }
            Self::Expression(expression) => expression.fmt(f),
        }
    }
}

/// A `for (init; test; update) body` loop with three optional slots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ForStatement {
    /// The optional init slot, run once before the loop.
    pub init: Option<ForInit>,
    /// The optional condition checked before every iteration.
    pub test: Option<Expression>,
    /// The optional update expression, run after every iteration.
    pub update: Option<Expression>,
    /// The statement to iterate.
    pub body: Box<Statement>,
    /// The span from the `for` keyword to the end of the body.
    pub span: Span,
}

simple_node_impl!(ForStatement);

impl fmt::Display for ForStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "for (")?;
        if let Some(init) = &self.init {
            write!(f, "{init}")?;
        }
        write!(f, ";")?;
        if let Some(test) = &self.test {
            write!(f, " {test}")?;
        }
        write!(f, ";")?;
        if let Some(update) = &self.update {
            write!(f, " {update}")?;
        }
        write!(f, ") {}", self.body)
    }
}

impl Serialize for ForStatement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ForStatement", 7)?;
        state.serialize_field("type", "ForStatement")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("init", &self.init)?;
        state.serialize_field("test", &self.test)?;
        state.serialize_field("update", &self.update)?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
