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

use jay_span::Span;

use backtrace::Backtrace;
use colored::Colorize;
use std::fmt;

pub const INDENT: &str = "    ";

/// A formatted error with a span pointing into the offending source.
///
/// Renders as:
/// ```text
/// Error [EPAR0370003]: Expected ';' -- found '<eof>'
///     --> 12..13
/// ```
#[derive(Debug)]
pub struct Formatted {
    /// The error message.
    pub message: String,
    /// Optional help text pointing the user towards a fix.
    pub help: Option<String>,
    /// The exit code of the error.
    pub exit_code: i32,
    /// The rendered error code, e.g. `EPAR0370003`.
    pub code: String,
    /// The span of the source that caused the error.
    pub span: Span,
    /// The backtrace at the point the error was constructed.
    pub backtrace: Backtrace,
}

impl Formatted {
    /// Creates a formatted error from the given message, help text, exit
    /// code, rendered code, span, and backtrace.
    pub fn new_from_span<S: fmt::Display>(
        message: S,
        help: Option<String>,
        exit_code: i32,
        code: String,
        span: Span,
        backtrace: Backtrace,
    ) -> Self {
        Self { message: message.to_string(), help, exit_code, code, span, backtrace }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = "Error".bold().red();
        let code = format!("[{}]", self.code).bold();

        writeln!(f, "{error} {code}: {message}", message = self.message)?;
        write!(f, "{INDENT}--> {span}", span = self.span)?;

        if let Some(help) = &self.help {
            write!(f, "\n{INDENT} = {help}")?;
        }

        if std::env::var("JAY_BACKTRACE").is_ok() {
            write!(f, "\n{:?}", self.backtrace)?;
        }

        Ok(())
    }
}

impl std::error::Error for Formatted {}
