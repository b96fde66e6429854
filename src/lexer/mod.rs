// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::Result;

mod scanner;
mod tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- structure ---
    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Assign,
    Comma,

    // --- literals ---
    Ident,
    Int,
    Float,
    String,
    True,
    False,
    Null,

    Eof,
}

impl TokenKind {
    /// Kinds that can stand alone as a value.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Assign => "'='",
            TokenKind::Comma => "','",
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Float => "float",
            TokenKind::String => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.literal)
    }
}

/// Single-character tokens, built once per process.
static SINGLE_CHAR_TOKENS: Lazy<HashMap<u8, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        (b'[', TokenKind::LBracket),
        (b']', TokenKind::RBracket),
        (b'(', TokenKind::LParen),
        (b')', TokenKind::RParen),
        (b'{', TokenKind::LBrace),
        (b'}', TokenKind::RBrace),
        (b'=', TokenKind::Assign),
        (b',', TokenKind::Comma),
    ])
});

pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Lexer { input, pos: 0 }
    }

    /// Next token from the input. Once the input is exhausted every call
    /// returns `Eof`.
    pub fn next_token(&mut self) -> Result<Token> {
        tokenizer::next_token(self)
    }

    /// Drain the lexer, returning every token up to and including `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let done = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if done {
                return Ok(tokens);
            }
        }
    }
}

#[cfg(test)]
mod tests;
