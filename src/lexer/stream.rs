//! Cursor over the tokens produced by `tokenize`.
//!
//! The token sequence never changes after construction; only the cursor
//! moves. A stream has a single consumer, share it only behind external
//! synchronization.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, TokenType};

#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    /// The scanned tokens, in input order
    tokens: Vec<Token>,
    /// Index of the next token to read, `0 <= pos <= tokens.len()`
    pos: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens, pos: 0 }
    }

    /// Returns the token at the cursor and advances past it.
    ///
    /// Returns `None` once the end is reached, leaving the cursor there.
    pub fn read(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Returns the token at the cursor without advancing.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Steps the cursor back by one. Does nothing at the start.
    pub fn unread(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor to an absolute position saved with `position`.
    ///
    /// Positions outside `0..len()` are ignored.
    pub fn set_position(&mut self, position: usize) {
        if position < self.tokens.len() {
            self.pos = position;
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reads the next token if it is of `expected_kind`.
    ///
    /// On a mismatch or at the end of the stream the cursor is left where it
    /// was and an error positioned at the offending spot is returned.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The TokenType the caller requires next
    pub fn expect(&mut self, expected_kind: TokenType) -> Result<Token, Error> {
        match self.peek() {
            Some(token) if token.kind == expected_kind => {
                let token = token.clone();
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.text.clone(),
                    expected: expected_kind,
                },
                token.span.start,
            )),
            None => Err(Error::new(
                ErrorImpl::UnexpectedEndOfStream {
                    expected: expected_kind,
                },
                self.end_position(),
            )),
        }
    }

    fn end_position(&self) -> Position {
        self.tokens
            .last()
            .map(|token| token.span.end)
            .unwrap_or_else(Position::null)
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.read().cloned()
    }
}
