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
    /// Returns a [`Program`] AST if all tokens parse as a list of
    /// statements. `span` covers the whole source text.
    pub fn parse_program(&mut self, span: Span) -> Result<Program> {
        let mut body = Vec::new();
        while self.has_next() {
            body.push(self.parse_statement()?);
        }

        mark_directives(&mut body);

        Ok(Program { body, span })
    }
}

/// Attaches the `directive` field to the directive prologue: the leading
/// run of expression statements whose expression is a string literal. The
/// first statement of any other shape ends the prologue.
fn mark_directives(body: &mut [Statement]) {
    for statement in body.iter_mut() {
        match statement {
            Statement::Expression(stmt) => match &stmt.expression {
                Expression::Literal(Literal { value: LiteralValue::String(value), .. }) => {
                    stmt.directive = Some(value.clone());
                }
                _ => break,
            },
            _ => break,
        }
    }
}
