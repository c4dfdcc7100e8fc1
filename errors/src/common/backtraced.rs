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

use backtrace::Backtrace;
use colored::Colorize;
use std::fmt;

/// An error without a source location, e.g. an I/O failure.
#[derive(Debug)]
pub struct Backtraced {
    /// The error message.
    pub message: String,
    /// Optional help text pointing the user towards a fix.
    pub help: Option<String>,
    /// The exit code of the error.
    pub exit_code: i32,
    /// The rendered error code, e.g. `EAST0002000`.
    pub code: String,
    /// The backtrace at the point the error was constructed.
    pub backtrace: Backtrace,
}

impl Backtraced {
    /// Creates a backtraced error from the given message, help text, exit
    /// code, rendered code, and backtrace.
    pub fn new_from_backtrace<S: fmt::Display>(
        message: S,
        help: Option<String>,
        exit_code: i32,
        code: String,
        backtrace: Backtrace,
    ) -> Self {
        Self { message: message.to_string(), help, exit_code, code, backtrace }
    }
}

impl fmt::Display for Backtraced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error = "Error".bold().red();
        let code = format!("[{}]", self.code).bold();

        write!(f, "{error} {code}: {message}", message = self.message)?;

        if let Some(help) = &self.help {
            write!(f, "\n = {help}")?;
        }

        if std::env::var("JAY_BACKTRACE").is_ok() {
            write!(f, "\n{:?}", self.backtrace)?;
        }

        Ok(())
    }
}

impl std::error::Error for Backtraced {}
