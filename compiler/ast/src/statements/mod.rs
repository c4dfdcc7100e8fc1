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

use crate::{simple_node_impl, ClassDeclaration, Expression, FunctionDeclaration, Identifier, Node};
use jay_span::Span;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

mod block;
pub use block::*;

mod conditional;
pub use conditional::*;

mod empty;
pub use empty::*;

mod expression;
pub use expression::*;

mod iteration;
pub use iteration::*;

mod return_;
pub use return_::*;

mod variable;
pub use variable::*;

/// Program statement that defines some action to be carried out.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Statement {
    /// A block statement.
    Block(BlockStatement),
    /// A class declaration.
    Class(ClassDeclaration),
    /// A `do ... while` loop.
    DoWhile(DoWhileStatement),
    /// An empty statement.
    Empty(EmptyStatement),
    /// An expression statement.
    Expression(ExpressionStatement),
    /// A `for` loop.
    For(ForStatement),
    /// A function declaration.
    Function(FunctionDeclaration),
    /// An `if` statement.
    If(IfStatement),
    /// A return statement.
    Return(ReturnStatement),
    /// A variable declaration.
    Variable(VariableDeclaration),
    /// A `while` loop.
    While(WhileStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        use Statement::*;
        match self {
            Block(n) => n.span(),
            Class(n) => n.span(),
            DoWhile(n) => n.span(),
            Empty(n) => n.span(),
            Expression(n) => n.span(),
            For(n) => n.span(),
            Function(n) => n.span(),
            If(n) => n.span(),
            Return(n) => n.span(),
            Variable(n) => n.span(),
            While(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        use Statement::*;
        match self {
            Block(n) => n.set_span(span),
            Class(n) => n.set_span(span),
            DoWhile(n) => n.set_span(span),
            Empty(n) => n.set_span(span),
            Expression(n) => n.set_span(span),
            For(n) => n.set_span(span),
            Function(n) => n.set_span(span),
            If(n) => n.set_span(span),
            Return(n) => n.set_span(span),
            Variable(n) => n.set_span(span),
            While(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Statement::*;
        match self {
            Block(n) => n.fmt(f),
            Class(n) => n.fmt(f),
            DoWhile(n) => n.fmt(f),
            Empty(n) => n.fmt(f),
            Expression(n) => n.fmt(f),
            For(n) => n.fmt(f),
            Function(n) => n.fmt(f),
            If(n) => n.fmt(f),
            Return(n) => n.fmt(f),
            Variable(n) => n.fmt(f),
            While(n) => n.fmt(f),
        }
    }
}
