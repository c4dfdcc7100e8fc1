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

use crate::tokenizer::Token;
use jay_errors::{ParserError, Result};
use jay_span::{BytePos, Span};

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::{from_fn, Peekable},
};

/// Eat an identifier, that is, a string matching '[a-zA-Z_$][a-zA-Z\d_]*', if any.
fn eat_identifier(input: &mut Peekable<impl Iterator<Item = char>>) -> Option<String> {
    let head = input.next_if(|c| c.is_ascii_alphabetic() || matches!(c, '_' | '$'))?;

    let mut ident = String::from(head);
    ident.extend(from_fn(|| input.next_if(|c| c.is_ascii_alphanumeric() || c == &'_')));
    Some(ident)
}

impl Token {
    /// Returns a tuple: [(integer length, integer token)] if an integer can be eaten.
    /// An integer can be eaten if its digits are at the front of the given `input` string.
    fn eat_integer(input: &mut Peekable<impl Iterator<Item = char>>) -> (usize, Token) {
        let mut int = String::new();
        while let Some(c) = input.next_if(|c| c.is_ascii_digit()) {
            int.push(c);
        }

        (int.len(), Token::Int(int))
    }

    /// Returns a tuple: [(token length, token)] if the next token can be eaten, otherwise errors.
    /// The next token can be eaten if the bytes at the front of the given `input` string can be
    /// scanned into a token. `lo` is the absolute position of `input` in the source, used to
    /// attach a span to lexical errors.
    pub(crate) fn eat(input: &str, lo: BytePos) -> Result<(usize, Token)> {
        let mut input = input.chars().peekable();

        // Consumes a single character token.
        let single = |input: &mut Peekable<_>, token| {
            input.next();
            Ok((1, token))
        };
        // Consumes a character followed by `on` with `then` if found or `els` otherwise.
        let followed_by = |input: &mut Peekable<_>, on, then, els| {
            input.next();
            Ok(if input.next_if_eq(&on).is_some() { (2, then) } else { (1, els) })
        };

        let first = match input.peek() {
            Some(first) => *first,
            None => return Err(ParserError::could_not_lex("<empty input>", Span::new(lo, lo)).into()),
        };

        match first {
            x if x.is_ascii_whitespace() => return single(&mut input, Token::WhiteSpace),
            quote @ ('"' | '\'') => {
                let mut string = String::new();
                string.push(quote);
                input.next();

                // Greedy up to the matching quote on the same line, no escapes.
                let mut ended = false;
                while let Some(c) = input.next_if(|c| c != &'\n') {
                    string.push(c);
                    if c == quote {
                        ended = true;
                        break;
                    }
                }

                if !ended {
                    let span = Span::new(lo, lo + BytePos::from_usize(string.len()));
                    return Err(ParserError::lexer_string_not_closed(string, span).into());
                }

                return Ok((string.len(), Token::StaticString(string)));
            }
            x if x.is_ascii_digit() => return Ok(Self::eat_integer(&mut input)),
            '!' => {
                input.next();
                if input.next_if_eq(&'=').is_some() {
                    return Ok(if input.next_if_eq(&'=').is_some() {
                        (3, Token::StrictNotEq)
                    } else {
                        (2, Token::NotEq)
                    });
                }
                return Ok((1, Token::Not));
            }
            '=' => {
                input.next();
                if input.next_if_eq(&'=').is_some() {
                    return Ok(if input.next_if_eq(&'=').is_some() {
                        (3, Token::StrictEq)
                    } else {
                        (2, Token::Eq)
                    });
                }
                return Ok((1, Token::Assign));
            }
            '&' => {
                input.next();
                if input.next_if_eq(&'&').is_some() {
                    return Ok((2, Token::And));
                }
                return Err(ParserError::could_not_lex("&", Span::new(lo, lo + BytePos(1))).into());
            }
            '|' => {
                input.next();
                if input.next_if_eq(&'|').is_some() {
                    return Ok((2, Token::Or));
                }
                return Err(ParserError::could_not_lex("|", Span::new(lo, lo + BytePos(1))).into());
            }
            '<' => return followed_by(&mut input, '=', Token::LtEq, Token::Lt),
            '>' => return followed_by(&mut input, '=', Token::GtEq, Token::Gt),
            '+' => return followed_by(&mut input, '=', Token::AddAssign, Token::Add),
            '-' => return followed_by(&mut input, '=', Token::SubAssign, Token::Minus),
            '*' => return followed_by(&mut input, '=', Token::MulAssign, Token::Mul),
            '/' => {
                input.next();
                if input.next_if_eq(&'/').is_some() {
                    let mut comment = String::from("//");

                    while let Some(c) = input.next_if(|c| c != &'\n') {
                        comment.push(c);
                    }

                    if let Some(newline) = input.next_if_eq(&'\n') {
                        comment.push(newline);
                    }

                    return Ok((comment.len(), Token::CommentLine(comment)));
                } else if input.next_if_eq(&'*').is_some() {
                    let mut comment = String::from("/*");

                    let mut ended = false;
                    while let Some(c) = input.next() {
                        comment.push(c);
                        if c == '*' && input.next_if_eq(&'/').is_some() {
                            comment.push('/');
                            ended = true;
                            break;
                        }
                    }

                    if !ended {
                        let span = Span::new(lo, lo + BytePos::from_usize(comment.len()));
                        return Err(ParserError::lexer_block_comment_not_closed(comment, span).into());
                    }

                    return Ok((comment.len(), Token::CommentBlock(comment)));
                } else if input.next_if_eq(&'=').is_some() {
                    return Ok((2, Token::DivAssign));
                }
                return Ok((1, Token::Div));
            }
            '(' => return single(&mut input, Token::LeftParen),
            ')' => return single(&mut input, Token::RightParen),
            '[' => return single(&mut input, Token::LeftSquare),
            ']' => return single(&mut input, Token::RightSquare),
            '{' => return single(&mut input, Token::LeftCurly),
            '}' => return single(&mut input, Token::RightCurly),
            ',' => return single(&mut input, Token::Comma),
            '.' => return single(&mut input, Token::Dot),
            ';' => return single(&mut input, Token::Semicolon),
            _ => (),
        }

        // Identifiers are matched first and then looked up in the keyword
        // table, so a keyword never matches a prefix of a longer word.
        if let Some(ident) = eat_identifier(&mut input) {
            return Ok((
                ident.len(),
                match &*ident {
                    "class" => Token::Class,
                    "const" => Token::Const,
                    "do" => Token::Do,
                    "else" => Token::Else,
                    "extends" => Token::Extends,
                    "false" => Token::False,
                    "for" => Token::For,
                    "function" => Token::Function,
                    "get" => Token::Get,
                    "if" => Token::If,
                    "let" => Token::Let,
                    "new" => Token::New,
                    "null" => Token::Null,
                    "return" => Token::Return,
                    "set" => Token::Set,
                    "super" => Token::Super,
                    "this" => Token::This,
                    "true" => Token::True,
                    "while" => Token::While,
                    _ => Token::Ident(ident),
                },
            ));
        }

        let snippet: String = input.take_while(|c| *c != ';' && !c.is_whitespace()).collect();
        let span = Span::new(lo, lo + BytePos::from_usize(snippet.len()));
        Err(ParserError::could_not_lex(snippet, span).into())
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    /// Returns a dummy token at a dummy span.
    pub const fn dummy() -> Self {
        Self { token: Token::WhiteSpace, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' @ ", self.token.to_string().trim())?;
        self.span.fmt(f)
    }
}

impl fmt::Debug for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <SpannedToken as fmt::Display>::fmt(self, f)
    }
}
