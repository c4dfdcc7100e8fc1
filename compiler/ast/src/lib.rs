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

//! The abstract syntax tree (ast) for a Jay program.
//!
//! This module contains the [`Ast`] type, a wrapper around the [`Program`]
//! type. Each AST node carries the span of the source it was parsed from
//! and serializes to the JSON shape of the ESTree reference format.

#![forbid(unsafe_code)]

pub mod classes;
pub use self::classes::*;

pub mod common;
pub use self::common::*;

pub mod expressions;
pub use self::expressions::*;

pub mod functions;
pub use self::functions::*;

pub mod program;
pub use self::program::*;

pub mod statements;
pub use self::statements::*;

use jay_errors::{AstError, Result};

/// The abstract syntax tree (AST) for a Jay program.
///
/// The [`Ast`] type represents a Jay program as a series of recursive data
/// types. These data types form a tree that begins from a [`Program`] type
/// root.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Ast {
    pub ast: Program,
}

impl Ast {
    /// Creates a new AST from a given program tree.
    pub fn new(program: Program) -> Self {
        Self { ast: program }
    }

    /// Returns a reference to the inner program AST representation.
    pub fn as_repr(&self) -> &Program {
        &self.ast
    }

    /// Consumes the AST and returns the inner program representation.
    pub fn into_repr(self) -> Program {
        self.ast
    }

    /// Serializes the ast into a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.ast)
            .map_err(|e| AstError::failed_to_convert_ast_to_json_string(&e))?)
    }

    /// Converts the ast into a JSON value.
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(&self.ast).map_err(|e| AstError::failed_to_convert_ast_to_json_value(&e))?)
    }

    /// Serializes the ast into a JSON file.
    pub fn to_json_file(&self, mut path: std::path::PathBuf, file_name: &str) -> Result<()> {
        path.push(file_name);
        let file = std::fs::File::create(&path).map_err(|e| AstError::failed_to_create_ast_json_file(&path, &e))?;
        let writer = std::io::BufWriter::new(file);
        Ok(serde_json::to_writer_pretty(writer, &self.ast)
            .map_err(|e| AstError::failed_to_write_ast_to_json_file(&path, &e))?)
    }
}
