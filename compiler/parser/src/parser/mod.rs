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

//! The parser to convert Jay code text into a [`Program`] AST type.
//!
//! This module contains the [`parse()`] method which calls the underlying
//! [`tokenize()`](crate::tokenizer::tokenize) method to create a new
//! program AST.

use crate::tokenizer::*;

use jay_ast::*;
use jay_errors::Result;
use jay_span::{BytePos, Span};

mod context;
pub use context::*;

pub mod expression;
pub mod file;
pub mod statement;

/// Creates a new program from the given source code text.
pub fn parse(source: &str) -> Result<Program> {
    let mut tokens = ParserContext::new(crate::tokenize(source, BytePos(0))?);

    tokens.parse_program(Span::new(BytePos(0), BytePos::from_usize(source.len())))
}
