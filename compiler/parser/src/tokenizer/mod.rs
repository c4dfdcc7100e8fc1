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

//! The tokenizer to convert Jay code text into tokens.
//!
//! This module contains the [`tokenize()`] method which breaks down string
//! text into tokens, separated by whitespace.

pub mod token;
use std::iter;

pub use self::token::*;

pub mod lexer;
pub use self::lexer::*;

use jay_errors::Result;
use jay_span::{BytePos, Span};

/// Creates a new vector of spanned tokens from the given source code text.
pub(crate) fn tokenize(input: &str, start_pos: BytePos) -> Result<Vec<SpannedToken>> {
    tokenize_iter(input, start_pos).collect()
}

/// Yields spanned tokens from the given source code text.
///
/// The parser pulls from this iterator one token at a time; the `lo` byte
/// position determines where spans start. Whitespace is skipped here,
/// comment tokens are stripped by the parser context.
pub(crate) fn tokenize_iter(input: &str, mut lo: BytePos) -> impl '_ + Iterator<Item = Result<SpannedToken>> {
    let mut index = 0usize;
    iter::from_fn(move || {
        while input.len() > index {
            let (token_len, token) = match Token::eat(&input[index..], lo) {
                Err(e) => return Some(Err(e)),
                Ok(t) => t,
            };
            index += token_len;

            let span = Span::new(lo, lo + BytePos::from_usize(token_len));
            lo = span.hi;

            match token {
                Token::WhiteSpace => continue,
                _ => return Some(Ok(SpannedToken { token, span })),
            }
        }

        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer() {
        let raw = r#"
    "test"
    'test'
    test_ident
    $dollar
    12345
    class
    const
    do
    else
    extends
    false
    for
    function
    get
    if
    let
    new
    null
    return
    set
    super
    this
    true
    while
    !
    !=
    !==
    &&
    (
    )
    *
    *=
    +
    +=
    ,
    -
    -=
    .
    /
    /=
    ;
    <
    <=
    =
    ==
    ===
    >
    >=
    [
    ]
    {
    }
    ||
    /* block */
    // line comment"#;
        let tokens = tokenize(raw, BytePos(0)).unwrap();
        let mut output = String::new();
        for SpannedToken { token, .. } in tokens.iter() {
            output += &format!("{token} ");
        }

        assert_eq!(
            output,
            r#""test" 'test' test_ident $dollar 12345 class const do else extends false for function get if let new null return set super this true while ! != !== && ( ) * *= + += , - -= . / /= ; < <= = == === > >= [ ] { } || /* block */ // line comment "#
        );
    }

    #[test]
    fn test_spans() {
        let raw = r#"
let a = 1;
// line comment
if (a > 1) { a = 2; }
/* block
   comment */
"done";
"#;
        let tokens = tokenize(raw, BytePos(0)).unwrap();
        assert!(!tokens.is_empty());
        for SpannedToken { token, span } in tokens.iter() {
            assert!(span.lo < span.hi);
            assert!(span.hi.to_usize() <= raw.len());
            assert_eq!(token.to_string(), &raw[span.lo.to_usize()..span.hi.to_usize()]);
        }
    }

    #[test]
    fn test_keyword_needs_word_boundary() {
        let tokens = tokenize("letter", BytePos(0)).unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::Ident("letter".to_string()));

        let tokens = tokenize("newest classic iffy", BytePos(0)).unwrap();
        let names: Vec<_> = tokens.iter().map(|t| t.token.clone()).collect();
        assert_eq!(
            names,
            vec![
                Token::Ident("newest".to_string()),
                Token::Ident("classic".to_string()),
                Token::Ident("iffy".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_token() {
        let err = tokenize("@", BytePos(0)).unwrap_err();
        assert_eq!(err.error_code(), "EPAR0370000");
    }

    #[test]
    fn test_string_not_closed() {
        let err = tokenize("\"not closed", BytePos(0)).unwrap_err();
        assert_eq!(err.error_code(), "EPAR0370001");

        // A newline terminates the scan before the closing quote.
        let err = tokenize("\"broken\nstring\"", BytePos(0)).unwrap_err();
        assert_eq!(err.error_code(), "EPAR0370001");
    }

    #[test]
    fn test_block_comment_not_closed() {
        let err = tokenize("/* never ends", BytePos(0)).unwrap_err();
        assert_eq!(err.error_code(), "EPAR0370002");
    }

    #[test]
    fn test_dollar_only_leads() {
        // '$' may start an identifier but may not continue one.
        let tokens = tokenize("a$b", BytePos(0)).unwrap();
        let names: Vec<_> = tokens.iter().map(|t| t.token.clone()).collect();
        assert_eq!(names, vec![Token::Ident("a".to_string()), Token::Ident("$b".to_string())]);
    }
}
