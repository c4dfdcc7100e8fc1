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

/// A binary operator.
///
/// Precedence is defined in the parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BinaryOperation {
    /// Addition, i.e. `+`.
    Add,
    /// Division, i.e. `/`.
    Div,
    /// Loose equality relation, i.e. `==`.
    Eq,
    /// Greater-than relation, i.e. `>`.
    Gt,
    /// Greater-or-equal relation, i.e. `>=`.
    Gte,
    /// Lesser-than relation, i.e. `<`.
    Lt,
    /// Lesser-or-equal relation, i.e. `<=`.
    Lte,
    /// Multiplication, i.e. `*`.
    Mul,
    /// Loose in-equality relation, i.e. `!=`.
    Neq,
    /// Strict equality relation, i.e. `===`.
    StrictEq,
    /// Strict in-equality relation, i.e. `!==`.
    StrictNeq,
    /// Subtraction, i.e. `-`.
    Sub,
}

impl BinaryOperation {
    /// The spelling of the operator in the source, e.g. `+`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Div => "/",
            Self::Eq => "==",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Mul => "*",
            Self::Neq => "!=",
            Self::StrictEq => "===",
            Self::StrictNeq => "!==",
            Self::Sub => "-",
        }
    }
}

impl fmt::Display for BinaryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A binary expression `left op right` of two operands at the same
/// precedence level, e.g., `1 + 2` or `a < b`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryExpression {
    /// The left operand of the expression.
    pub left: Box<Expression>,
    /// The right operand of the expression.
    pub right: Box<Expression>,
    /// The operand defining the meaning of the resulting binary expression.
    pub op: BinaryOperation,
    /// The span covering both operands, including any enclosing parentheses.
    pub span: Span,
}

simple_node_impl!(BinaryExpression);

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Serialize for BinaryExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BinaryExpression", 6)?;
        state.serialize_field("type", "BinaryExpression")?;
        state.serialize_field("start", &self.span.lo)?;
        state.serialize_field("end", &self.span.hi)?;
        state.serialize_field("operator", self.op.as_str())?;
        state.serialize_field("left", &self.left)?;
        state.serialize_field("right", &self.right)?;
        state.end()
    }
}
