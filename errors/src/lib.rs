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

//! The error types of the Jay library.
//!
//! Errors are constructed through the [`create_messages!`] macro, which
//! assigns each message a stable error code. Formatted errors carry the
//! span of the offending source; backtraced errors only capture where
//! they were constructed.

#![forbid(unsafe_code)]

/// Contains the common functionalities for defining errors.
#[macro_use]
pub mod common;
pub use self::common::*;

/// Contains the errors for the Jay library.
pub mod errors;
pub use self::errors::*;

/// A result type with a pre-filled error component.
pub type Result<T = ()> = core::result::Result<T, JayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jay_span::{BytePos, Span};

    #[test]
    fn test_error_codes_are_stable() {
        let err = ParserError::could_not_lex("@", Span::new(BytePos(0), BytePos(1)));
        assert_eq!(err.error_code(), "EPAR0370000");
        assert_eq!(err.exit_code(), 370000);

        let err = ParserError::unexpected("<eof>", "';'", Span::dummy());
        assert_eq!(err.error_code(), "EPAR0370003");
    }

    #[test]
    fn test_formatted_rendering_includes_span() {
        let err = ParserError::unexpected("1", "';'", Span::new(BytePos(4), BytePos(5)));
        let rendered = err.to_string();
        assert!(rendered.contains("Expected ';' -- found '1'"));
        assert!(rendered.contains("--> 4..5"));
    }

    #[test]
    fn test_num_exit_codes_counts_messages() {
        assert_eq!(ParserError::num_exit_codes(), 8);
        assert_eq!(AstError::num_exit_codes(), 4);
        assert_eq!(CliError::num_exit_codes(), 2);
    }
}
