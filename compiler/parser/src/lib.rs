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

//! The parser to convert Jay code text into an [`Ast`] type.
//!
//! This module contains the [`parse_ast()`] method which calls the
//! underlying [`parse()`] method to create a new program AST.

#![forbid(unsafe_code)]

pub mod tokenizer;
pub use tokenizer::KEYWORD_TOKENS;
pub(crate) use tokenizer::*;

pub mod parser;
pub use parser::*;

use jay_ast::Ast;
use jay_errors::Result;

/// Creates a new AST from the given source code text.
pub fn parse_ast(source: &str) -> Result<Ast> {
    Ok(Ast::new(parser::parse(source)?))
}
