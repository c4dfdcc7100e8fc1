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

use crate::{simple_node_impl, FunctionExpression, Identifier, Node};
use jay_span::Span;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

mod assignment;
pub use assignment::*;

mod binary;
pub use binary::*;

mod call;
pub use call::*;

mod literal;
pub use literal::*;

mod logical;
pub use logical::*;

mod member;
pub use member::*;

mod unary;
pub use unary::*;

/// Expression that evaluates to a value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    /// An assignment expression, e.g., `x = 1`.
    Assignment(AssignmentExpression),
    /// A binary expression, e.g., `42 + 24`.
    Binary(BinaryExpression),
    /// A call expression, e.g., `fib(10)`.
    Call(CallExpression),
    /// An anonymous function, e.g., the value of a method definition.
    Function(FunctionExpression),
    /// An identifier expression.
    Identifier(Identifier),
    /// A literal expression, e.g., `42` or `"use strict"`.
    Literal(Literal),
    /// A short-circuiting logical expression, e.g., `a || b`.
    Logical(LogicalExpression),
    /// A member access expression, e.g., `point.x`.
    Member(MemberExpression),
    /// A unary prefix expression, e.g., `!ok`.
    Unary(UnaryExpression),
}

impl Node for Expression {
    fn span(&self) -> Span {
        use Expression::*;
        match self {
            Assignment(n) => n.span(),
            Binary(n) => n.span(),
            Call(n) => n.span(),
            Function(n) => n.span(),
            Identifier(n) => n.span(),
            Literal(n) => n.span(),
            Logical(n) => n.span(),
            Member(n) => n.span(),
            Unary(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Expression::*;
        match self {
            Assignment(n) => n.set_span(span),
            Binary(n) => n.set_span(span),
            Call(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            Identifier(n) => n.set_span(span),
            Literal(n) => n.set_span(span),
            Logical(n) => n.set_span(span),
            Member(n) => n.set_span(span),
            Unary(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expression::*;
        match self {
            Assignment(n) => n.fmt(f),
            Binary(n) => n.fmt(f),
            Call(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            Identifier(n) => n.fmt(f),
            Literal(n) => n.fmt(f),
            Logical(n) => n.fmt(f),
            Member(n) => n.fmt(f),
            Unary(n) => n.fmt(f),
        }
    }
}
