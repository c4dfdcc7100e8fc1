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

use crate::create_messages;
use std::fmt::Display;

create_messages!(
    /// ParserError enum that represents all the errors for the `jay-parser` crate.
    ParserError,
    code_mask: 0370000i32,
    code_prefix: "PAR",

    /// For when the scanner cannot match any token at the current offset.
    @formatted
    could_not_lex {
        args: (input: impl Display),
        msg: format!("Could not lex the following content: `{input}`."),
        help: None,
    }

    /// For when a string literal is not closed before a newline or the end of input.
    @formatted
    lexer_string_not_closed {
        args: (input: impl Display),
        msg: format!("Expected a closed string but found `{input}`."),
        help: None,
    }

    /// For when a block comment is not closed before the end of input.
    @formatted
    lexer_block_comment_not_closed {
        args: (input: impl Display),
        msg: format!("Expected a closed block comment but found `{input}`."),
        help: None,
    }

    /// For when the parser expected one token but found another.
    @formatted
    unexpected {
        args: (found: impl Display, expected: impl Display),
        msg: format!("Expected {expected} -- found '{found}'"),
        help: None,
    }

    /// For when the primary expression production is reached with a token
    /// that cannot start an expression.
    @formatted
    expected_expression {
        args: (found: impl Display),
        msg: format!("Expected an expression -- found '{found}'"),
        help: None,
    }

    /// For when the literal production is reached with a non-literal lookahead.
    @formatted
    invalid_literal {
        args: (found: impl Display),
        msg: format!("Expected a literal -- found '{found}'"),
        help: None,
    }

    /// For when the left side of an assignment is not an assignable expression.
    @formatted
    invalid_assignment_target {
        args: (),
        msg: format!("Invalid left-hand side in assignment."),
        help: Some("Only identifiers and member accesses can be assigned to.".to_string()),
    }

    /// For when a numeric literal does not fit the supported integer range.
    @formatted
    invalid_integer {
        args: (value: impl Display),
        msg: format!("The value `{value}` is out of range for a numeric literal."),
        help: None,
    }
);
