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

use jay_errors::Result;

impl ParserContext {
    /// Returns a [`Statement`] AST node if the next tokens represent a statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Statement> {
        match &self.token.token {
            Token::LeftCurly => Ok(Statement::Block(self.parse_block()?)),
            Token::Semicolon => Ok(Statement::Empty(self.parse_empty_statement()?)),
            Token::Let | Token::Const => Ok(Statement::Variable(self.parse_variable_statement()?)),
            Token::If => Ok(Statement::If(self.parse_if_statement()?)),
            Token::While => Ok(Statement::While(self.parse_while_statement()?)),
            Token::Do => Ok(Statement::DoWhile(self.parse_do_while_statement()?)),
            Token::For => Ok(Statement::For(self.parse_for_statement()?)),
            Token::Function => Ok(Statement::Function(self.parse_function_declaration()?)),
            Token::Return => Ok(Statement::Return(self.parse_return_statement()?)),
            Token::Class => Ok(Statement::Class(self.parse_class_declaration()?)),
            _ => Ok(Statement::Expression(self.parse_expression_statement()?)),
        }
    }

    /// Returns a [`BlockStatement`] AST node if the next tokens represent a
    /// block of statements.
    pub(super) fn parse_block(&mut self) -> Result<BlockStatement> {
        self.parse_list(Delimiter::Brace, None, |p| p.parse_statement().map(Some))
            .map(|(body, _, span)| BlockStatement { body, span })
    }

    /// Returns an [`EmptyStatement`] AST node if the next token is a semicolon.
    fn parse_empty_statement(&mut self) -> Result<EmptyStatement> {
        let span = self.expect(&Token::Semicolon)?;
        Ok(EmptyStatement { span })
    }

    /// Returns an [`ExpressionStatement`] AST node if the next tokens
    /// represent an expression terminated by a semicolon.
    fn parse_expression_statement(&mut self) -> Result<ExpressionStatement> {
        let start = self.token.span;
        let expression = self.parse_expression()?;
        let end = self.expect(&Token::Semicolon)?;

        Ok(ExpressionStatement { expression, directive: None, span: start + end })
    }

    /// Parses the keyword and declarator list of a variable declaration,
    /// without the terminator. Returns the keyword span, the declaration
    /// kind, and the declarators, so callers can construct the node once
    /// its full extent is known.
    fn parse_variable_declarators(&mut self) -> Result<(Span, DeclarationKind, Vec<VariableDeclarator>)> {
        let start = self.expect_any(&[Token::Let, Token::Const])?;
        let kind = match &self.prev_token.token {
            Token::Let => DeclarationKind::Let,
            Token::Const => DeclarationKind::Const,
            _ => unreachable!("`parse_variable_declarators` shouldn't produce this"),
        };

        let mut declarations = vec![self.parse_variable_declarator()?];
        while self.eat(&Token::Comma) {
            declarations.push(self.parse_variable_declarator()?);
        }

        Ok((start, kind, declarations))
    }

    /// Returns a [`VariableDeclarator`] AST node: an identifier with an
    /// optional initializer.
    fn parse_variable_declarator(&mut self) -> Result<VariableDeclarator> {
        let id = self.expect_identifier()?;
        let init = if self.eat(&Token::Assign) { Some(self.parse_assignment_expression()?) } else { None };
        let span = id.span + self.prev_token.span;

        Ok(VariableDeclarator { id, init, span })
    }

    /// Returns a [`VariableDeclaration`] AST node if the next tokens
    /// represent a `let` or `const` declaration terminated by a semicolon.
    /// The node span includes the terminator.
    fn parse_variable_statement(&mut self) -> Result<VariableDeclaration> {
        let (start, kind, declarations) = self.parse_variable_declarators()?;
        let end = self.expect(&Token::Semicolon)?;

        Ok(VariableDeclaration { declarations, kind, span: start + end })
    }

    /// Returns an [`IfStatement`] AST node if the next tokens represent a
    /// conditional statement. A dangling `else` binds to the nearest `if`.
    fn parse_if_statement(&mut self) -> Result<IfStatement> {
        let start = self.expect(&Token::If)?;
        self.expect(&Token::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&Token::RightParen)?;

        let consequent = Box::new(self.parse_statement()?);
        let alternate = if self.eat(&Token::Else) { Some(Box::new(self.parse_statement()?)) } else { None };

        Ok(IfStatement { test, consequent, alternate, span: start + self.prev_token.span })
    }

    /// Returns a [`WhileStatement`] AST node if the next tokens represent a
    /// while loop.
    fn parse_while_statement(&mut self) -> Result<WhileStatement> {
        let start = self.expect(&Token::While)?;
        self.expect(&Token::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(WhileStatement { test, body, span: start + self.prev_token.span })
    }

    /// Returns a [`DoWhileStatement`] AST node if the next tokens represent
    /// a do-while loop. The terminating semicolon is required.
    fn parse_do_while_statement(&mut self) -> Result<DoWhileStatement> {
        let start = self.expect(&Token::Do)?;
        let body = Box::new(self.parse_statement()?);
        self.expect(&Token::While)?;
        self.expect(&Token::LeftParen)?;
        let test = self.parse_expression()?;
        self.expect(&Token::RightParen)?;
        let end = self.expect(&Token::Semicolon)?;

        Ok(DoWhileStatement { test, body, span: start + end })
    }

    /// Returns a [`ForStatement`] AST node if the next tokens represent a
    /// for loop. All three header slots are optional; an init declaration
    /// has no terminator of its own.
    fn parse_for_statement(&mut self) -> Result<ForStatement> {
        let start = self.expect(&Token::For)?;
        self.expect(&Token::LeftParen)?;

        let init = match &self.token.token {
            Token::Semicolon => None,
            Token::Let | Token::Const => {
                let (decl_start, kind, declarations) = self.parse_variable_declarators()?;
                let span = decl_start + self.prev_token.span;
                Some(ForInit::VariableDeclaration(VariableDeclaration { declarations, kind, span }))
            }
            _ => Some(ForInit::Expression(self.parse_expression()?)),
        };
        self.expect(&Token::Semicolon)?;

        let test = if self.check(&Token::Semicolon) { None } else { Some(self.parse_expression()?) };
        self.expect(&Token::Semicolon)?;

        let update = if self.check(&Token::RightParen) { None } else { Some(self.parse_expression()?) };
        self.expect(&Token::RightParen)?;

        let body = Box::new(self.parse_statement()?);

        Ok(ForStatement { init, test, update, body, span: start + self.prev_token.span })
    }

    /// Returns a [`FunctionDeclaration`] AST node if the next tokens
    /// represent a function declaration.
    fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration> {
        let start = self.expect(&Token::Function)?;
        let id = self.expect_identifier()?;
        let (params, _, _) = self.parse_paren_comma_list(|p| p.expect_identifier().map(Some))?;
        let body = self.parse_block()?;
        let span = start + body.span;

        Ok(FunctionDeclaration { id, params, body, span })
    }

    /// Returns a [`ReturnStatement`] AST node if the next tokens represent
    /// a return statement. A missing argument yields `None`.
    fn parse_return_statement(&mut self) -> Result<ReturnStatement> {
        let start = self.expect(&Token::Return)?;
        let argument = match self.token.token {
            Token::Semicolon => None,
            _ => Some(self.parse_expression()?),
        };
        let end = self.expect(&Token::Semicolon)?;

        Ok(ReturnStatement { argument, span: start + end })
    }

    /// Returns a [`ClassDeclaration`] AST node if the next tokens represent
    /// a class declaration with an optional superclass.
    fn parse_class_declaration(&mut self) -> Result<ClassDeclaration> {
        let start = self.expect(&Token::Class)?;
        let id = self.expect_identifier()?;
        let super_class = if self.eat(&Token::Extends) { Some(self.expect_identifier()?) } else { None };
        let body = self.parse_class_body()?;
        let span = start + body.span;

        Ok(ClassDeclaration { id, super_class, body, span })
    }

    /// Returns a [`ClassBody`] AST node: the braced member definitions of a
    /// class.
    fn parse_class_body(&mut self) -> Result<ClassBody> {
        self.parse_list(Delimiter::Brace, None, |p| p.parse_class_member().map(Some))
            .map(|(body, _, span)| ClassBody { body, span })
    }

    /// Returns a [`ClassMember`] AST node. A key followed by a parameter
    /// list is a method definition, with kind `constructor` when the key is
    /// named `constructor`; anything else is a property definition with an
    /// optional initializer.
    fn parse_class_member(&mut self) -> Result<ClassMember> {
        let key = self.expect_identifier()?;

        if self.check(&Token::LeftParen) {
            let value_start = self.token.span;
            let (params, _, _) = self.parse_paren_comma_list(|p| p.expect_identifier().map(Some))?;
            let body = self.parse_block()?;

            let kind = if key.name == "constructor" { MethodKind::Constructor } else { MethodKind::Method };
            let value_span = value_start + body.span;
            let span = key.span + value_span;

            return Ok(ClassMember::Method(MethodDefinition {
                key,
                kind,
                value: FunctionExpression { params, body, span: value_span },
                span,
            }));
        }

        let value = if self.eat(&Token::Assign) { Some(self.parse_assignment_expression()?) } else { None };
        let end = self.expect(&Token::Semicolon)?;
        let span = key.span + end;

        Ok(ClassMember::Property(PropertyDefinition { key, value, span }))
    }
}
