use tracing::debug;

use crate::ast::{Document, Value};
use crate::error::{GcfgError, Result};
use crate::lexer::{Lexer, Token, TokenKind};

mod document;
mod value;

/// Recursive-descent parser over a two-token window.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur: Token,
    peek: Token,
}

impl<'a> Parser<'a> {
    /// Build a parser and prime both the current and the lookahead token.
    pub fn new(input: &'a [u8]) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let cur = lexer.next_token()?;
        let peek = lexer.next_token()?;
        Ok(Self { lexer, cur, peek })
    }

    /// Shift the window by one token and return the token that was current.
    pub(crate) fn bump(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        let prev = std::mem::replace(&mut self.cur, std::mem::replace(&mut self.peek, next));
        Ok(prev)
    }

    pub(crate) fn cur(&self) -> &Token {
        &self.cur
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.peek
    }

    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.cur.kind == kind
    }

    pub(crate) fn expect(&mut self, expected: TokenKind, context: &str) -> Result<Token> {
        if self.cur.kind != expected {
            return Err(GcfgError::syntax(
                format!("Expected {} {}, got {}", expected, context, self.cur.kind),
                None,
                202,
            ));
        }
        self.bump()
    }

    pub fn parse_file(&mut self) -> Result<Document> {
        debug!("parsing gcfg document");
        let doc = document::parse_document(self)?;
        debug!(entries = doc.len(), "parsed gcfg document");
        Ok(doc)
    }

    /// Parse a single right-hand side value at the current position.
    pub fn parse_value(&mut self) -> Result<Value> {
        value::parse_value(self)
    }
}
