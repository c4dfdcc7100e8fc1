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

/// Contains the AST error definitions.
pub mod ast;
pub use self::ast::*;

/// Contains the CLI error definitions.
pub mod cli;
pub use self::cli::*;

/// Contains the Parser error definitions.
pub mod parser;
pub use self::parser::*;

/// The JayError type that contains all sub error types.
/// This allows a single error type for the entire library.
#[derive(Debug, thiserror::Error)]
pub enum JayError {
    /// Represents an AST Error in a JayError.
    #[error(transparent)]
    AstError(#[from] AstError),

    /// Represents a CLI Error in a JayError.
    #[error(transparent)]
    CliError(#[from] CliError),

    /// Represents a Parser Error in a JayError.
    #[error(transparent)]
    ParserError(#[from] ParserError),
}

impl JayError {
    /// Implement exit code for each type of error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AstError(error) => error.exit_code(),
            Self::CliError(error) => error.exit_code(),
            Self::ParserError(error) => error.exit_code(),
        }
    }

    /// Implement error code for each type of error.
    pub fn error_code(&self) -> String {
        match self {
            Self::AstError(error) => error.error_code(),
            Self::CliError(error) => error.error_code(),
            Self::ParserError(error) => error.error_code(),
        }
    }
}
