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

use jay_errors::{ParserError, Result};

impl ParserContext {
    /// Returns an [`Expression`] AST node if the next tokens represent an expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression> {
        self.parse_assignment_expression()
    }

    /// Returns an [`Expression`] AST node if the next tokens represent an
    /// assignment expression. Assignment is right-associative, so the right
    /// side recurses into this production.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_logical_or_expression`].
    pub(super) fn parse_assignment_expression(&mut self) -> Result<Expression> {
        let start = self.token.span;
        let expr = self.parse_logical_or_expression()?;

        if self.token.token.is_assignment_operator() {
            self.bump();
            let op = match &self.prev_token.token {
                Token::Assign => AssignmentOperation::Assign,
                Token::AddAssign => AssignmentOperation::AddAssign,
                Token::SubAssign => AssignmentOperation::SubAssign,
                Token::MulAssign => AssignmentOperation::MulAssign,
                Token::DivAssign => AssignmentOperation::DivAssign,
                _ => unreachable!("`parse_assignment_expression` shouldn't produce this"),
            };

            // Only identifiers and member accesses can be assigned to.
            if !matches!(expr, Expression::Identifier(_) | Expression::Member(_)) {
                return Err(ParserError::invalid_assignment_target(expr.span()).into());
            }

            let right = self.parse_assignment_expression()?;
            let span = start + self.prev_token.span;
            return Ok(Expression::Assignment(AssignmentExpression {
                left: Box::new(expr),
                right: Box::new(right),
                op,
                span,
            }));
        }

        Ok(expr)
    }

    /// Constructs a binary expression `left op right` covering `span`.
    fn bin_expr(left: Expression, right: Expression, op: BinaryOperation, span: Span) -> Expression {
        Expression::Binary(BinaryExpression { left: Box::new(left), right: Box::new(right), op, span })
    }

    /// Parses a left-associative binary expression `<left> token <right>` using `f` for left/right.
    /// The `token` is translated to `op` in the AST.
    ///
    /// The folded node spans from the first token of the left operand to the
    /// last token consumed, so a parenthesized operand widens it to the
    /// parentheses.
    fn parse_bin_expr(
        &mut self,
        tokens: &[Token],
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let start = self.token.span;
        let mut expr = f(self)?;
        while let Some(op) = self.eat_bin_op(tokens) {
            let right = f(self)?;
            expr = Self::bin_expr(expr, right, op, start + self.prev_token.span);
        }
        Ok(expr)
    }

    /// Eats one of binary operators matching any in `tokens`.
    fn eat_bin_op(&mut self, tokens: &[Token]) -> Option<BinaryOperation> {
        self.eat_any(tokens).then(|| match &self.prev_token.token {
            Token::Eq => BinaryOperation::Eq,
            Token::NotEq => BinaryOperation::Neq,
            Token::StrictEq => BinaryOperation::StrictEq,
            Token::StrictNotEq => BinaryOperation::StrictNeq,
            Token::Lt => BinaryOperation::Lt,
            Token::LtEq => BinaryOperation::Lte,
            Token::Gt => BinaryOperation::Gt,
            Token::GtEq => BinaryOperation::Gte,
            Token::Add => BinaryOperation::Add,
            Token::Minus => BinaryOperation::Sub,
            Token::Mul => BinaryOperation::Mul,
            Token::Div => BinaryOperation::Div,
            _ => unreachable!("`eat_bin_op` shouldn't produce this"),
        })
    }

    /// Parses a left-associative chain of `token` producing [`LogicalExpression`]
    /// nodes, using `f` for the operands.
    fn parse_logical_expr(
        &mut self,
        token: &Token,
        op: LogicalOperation,
        mut f: impl FnMut(&mut Self) -> Result<Expression>,
    ) -> Result<Expression> {
        let start = self.token.span;
        let mut expr = f(self)?;
        while self.eat(token) {
            let right = f(self)?;
            expr = Expression::Logical(LogicalExpression {
                left: Box::new(expr),
                right: Box::new(right),
                op,
                span: start + self.prev_token.span,
            });
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// logical OR expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_logical_and_expression`].
    fn parse_logical_or_expression(&mut self) -> Result<Expression> {
        self.parse_logical_expr(&Token::Or, LogicalOperation::Or, Self::parse_logical_and_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// logical AND expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_equality_expression`].
    fn parse_logical_and_expression(&mut self) -> Result<Expression> {
        self.parse_logical_expr(&Token::And, LogicalOperation::And, Self::parse_equality_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary equals or not equals expression, loose or strict.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_relational_expression`].
    fn parse_equality_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(
            &[Token::Eq, Token::NotEq, Token::StrictEq, Token::StrictNotEq],
            Self::parse_relational_expression,
        )
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary relational expression: less than, less than or equals, greater
    /// than, greater than or equals.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_additive_expression`].
    fn parse_relational_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Lt, Token::LtEq, Token::Gt, Token::GtEq], Self::parse_additive_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary addition or subtraction expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_multiplicative_expression`].
    fn parse_additive_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Add, Token::Minus], Self::parse_multiplicative_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// binary multiplication or division expression.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_unary_expression`].
    fn parse_multiplicative_expression(&mut self) -> Result<Expression> {
        self.parse_bin_expr(&[Token::Mul, Token::Div], Self::parse_unary_expression)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// unary not, negate, or plus expression. Prefix operators are
    /// right-associative.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_call_expression`].
    pub(super) fn parse_unary_expression(&mut self) -> Result<Expression> {
        let mut ops = Vec::new();
        while self.eat_any(&[Token::Not, Token::Add, Token::Minus]) {
            let operation = match self.prev_token.token {
                Token::Not => UnaryOperation::Not,
                Token::Add => UnaryOperation::Plus,
                Token::Minus => UnaryOperation::Negate,
                _ => unreachable!("`parse_unary_expression` shouldn't produce this"),
            };
            ops.push((operation, self.prev_token.span));
        }

        let mut argument = self.parse_call_expression()?;
        let end = self.prev_token.span;
        for (op, op_span) in ops.into_iter().rev() {
            argument = Expression::Unary(UnaryExpression {
                argument: Box::new(argument),
                op,
                span: op_span + end,
            });
        }
        Ok(argument)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// call expression: a member expression followed by any number of
    /// argument lists.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_member_expression`].
    fn parse_call_expression(&mut self) -> Result<Expression> {
        let start = self.token.span;
        let mut expr = self.parse_member_expression()?;
        while self.check(&Token::LeftParen) {
            let (arguments, _, _) = self.parse_paren_comma_list(|p| p.parse_expression().map(Some))?;
            expr = Expression::Call(CallExpression {
                callee: Box::new(expr),
                arguments,
                span: start + self.prev_token.span,
            });
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next tokens represent a
    /// member expression: a primary expression grown by `.name` and
    /// `[expr]` accesses.
    ///
    /// Otherwise, tries to parse the next tokens using [`parse_primary_expression`].
    fn parse_member_expression(&mut self) -> Result<Expression> {
        let start = self.token.span;
        let mut expr = self.parse_primary_expression()?;
        loop {
            if self.eat(&Token::Dot) {
                let property = self.expect_identifier()?;
                expr = Expression::Member(MemberExpression {
                    object: Box::new(expr),
                    property: Box::new(Expression::Identifier(property)),
                    computed: false,
                    span: start + self.prev_token.span,
                });
            } else if self.eat(&Token::LeftSquare) {
                let property = self.parse_expression()?;
                self.expect(&Token::RightSquare)?;
                expr = Expression::Member(MemberExpression {
                    object: Box::new(expr),
                    property: Box::new(property),
                    computed: true,
                    span: start + self.prev_token.span,
                });
            } else {
                break;
            }
        }
        Ok(expr)
    }

    /// Returns an [`Expression`] AST node if the next token is a literal:
    /// number, string, boolean, or null.
    ///
    /// Returns a literal error if the token is not one.
    fn parse_literal(&mut self) -> Result<Expression> {
        let SpannedToken { token, span } = self.token.clone();
        let (value, raw) = match token {
            Token::Int(digits) => {
                let value = digits
                    .parse::<i64>()
                    .map_err(|_| ParserError::invalid_integer(&digits, span))?;
                (LiteralValue::Number(value), digits)
            }
            Token::StaticString(text) => {
                let value = text[1..text.len() - 1].to_string();
                (LiteralValue::String(value), text)
            }
            Token::True => (LiteralValue::Boolean(true), "true".to_string()),
            Token::False => (LiteralValue::Boolean(false), "false".to_string()),
            Token::Null => (LiteralValue::Null, "null".to_string()),
            token => return Err(ParserError::invalid_literal(token, span).into()),
        };
        self.bump();

        Ok(Expression::Literal(Literal { value, raw, span }))
    }

    /// Returns an [`Expression`] AST node if the next token is a primary expression:
    /// - Literals: number, string, boolean, null
    /// - A parenthesized expression
    /// - Identifiers, including the keywords `this` and `super`
    ///
    /// Returns an expression error if the token cannot be matched.
    fn parse_primary_expression(&mut self) -> Result<Expression> {
        if self.token.token.is_literal() {
            return self.parse_literal();
        }

        // A parenthesized expression yields the inner node unchanged; the
        // enclosing fold picks the parentheses up through `prev_token`.
        if self.eat(&Token::LeftParen) {
            let expr = self.parse_expression()?;
            self.expect(&Token::RightParen)?;
            return Ok(expr);
        }

        let SpannedToken { token, span } = self.token.clone();
        Ok(match token {
            Token::Ident(name) => {
                self.bump();
                Expression::Identifier(Identifier { name, span })
            }
            // `this` and `super` have no dedicated node in the reference subset.
            Token::This => {
                self.bump();
                Expression::Identifier(Identifier { name: "this".to_string(), span })
            }
            Token::Super => {
                self.bump();
                Expression::Identifier(Identifier { name: "super".to_string(), span })
            }
            token => {
                return Err(ParserError::expected_expression(token, span).into());
            }
        })
    }
}
