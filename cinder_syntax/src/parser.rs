//! Contains the [`Parser`] logic.

use cinder_base::source_file::Span;
use cinder_lexical::{
    token::{Identifier, Keyword, Punctuation, PunctuationKind, Token, TokenKind},
    token_stream::TokenStream,
};

use crate::error::{Error, ExpressionTooDeep, UnexpectedKeyword, UnexpectedToken};

/// The deepest an expression may nest. Every enclosing parenthesis and every operator folded
/// into the left operand counts as one level.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// The parser of the front-end.
///
/// Holds a cursor over a [`TokenStream`]. Every `parse_*` method starts at the current token and
/// leaves the cursor at the first token after the parsed syntax. Parsing stops at the first error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parser<'a> {
    token_stream: &'a TokenStream,
    current_index: usize,
    expression_depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from the given token stream.
    #[must_use]
    pub fn new(token_stream: &'a TokenStream) -> Self {
        Self {
            token_stream,
            current_index: 0,
            expression_depth: 0,
        }
    }

    /// Returns the [`Token`] pointed by the cursor.
    #[must_use]
    pub fn peek(&self) -> &'a Token { self.peek_offset(0) }

    /// Returns the [`Token`] `offset` tokens after the cursor.
    ///
    /// Looking past the end of the stream yields the end of input token.
    #[must_use]
    pub fn peek_offset(&self, offset: usize) -> &'a Token {
        let last = self.token_stream.len() - 1;
        let index = self.current_index.saturating_add(offset).min(last);

        &self.token_stream[index]
    }

    /// Returns the [`Token`] pointed by the cursor and moves the cursor forward.
    pub fn next_token(&mut self) -> &'a Token {
        let token = self.peek();

        self.forward();

        token
    }

    /// Moves the cursor forward by one token unless it is at the end of input token.
    pub fn forward(&mut self) {
        if !self.peek().is_end_of_input() {
            self.current_index += 1;
        }
    }

    /// Checks if the cursor has reached the end of input token.
    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.peek().is_end_of_input() }

    /// Consumes and returns the current [`Token`] if its kind is one of `expected`.
    ///
    /// # Errors
    /// [`Error::UnexpectedToken`] if the current token is of any other kind. The cursor is not
    /// moved in that case.
    pub fn expect(&mut self, expected: &[TokenKind]) -> Result<&'a Token, Error> {
        let token = self.peek();

        if expected.contains(&token.kind()) {
            self.forward();
            Ok(token)
        } else {
            Err(Self::unexpected(expected, token))
        }
    }

    /// Expects the next [`Token`] to be an [`Identifier`], and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not an [`Identifier`].
    pub fn parse_identifier(&mut self) -> Result<&'a Identifier, Error> {
        match self.peek() {
            Token::Identifier(identifier) => {
                self.forward();
                Ok(identifier)
            }
            found => Err(Self::unexpected(&[TokenKind::Identifier], found)),
        }
    }

    /// Expects the next [`Token`] to be a type [`Keyword`], and returns it.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`] if the next [`Token`] is not a [`Keyword`].
    /// - [`Error::UnexpectedKeyword`] if the keyword is `void` and `allow_void` is `false`.
    pub fn parse_type(&mut self, allow_void: bool) -> Result<&'a Keyword, Error> {
        match self.peek() {
            Token::Keyword(keyword) if keyword.keyword.is_void() && !allow_void => {
                Err(UnexpectedKeyword {
                    keyword: keyword.clone(),
                }
                .into())
            }
            Token::Keyword(keyword) => {
                self.forward();
                Ok(keyword)
            }
            found => Err(Self::unexpected(&[TokenKind::Keyword], found)),
        }
    }

    /// Expects the next [`Token`] to be a [`Punctuation`] of specific kind, and returns it.
    ///
    /// # Errors
    /// If the next [`Token`] is not a [`Punctuation`] of specific kind.
    pub fn parse_punctuation(
        &mut self,
        expected: PunctuationKind,
    ) -> Result<&'a Punctuation, Error> {
        match self.peek() {
            Token::Punctuation(punctuation) if punctuation.kind == expected => {
                self.forward();
                Ok(punctuation)
            }
            found => Err(Self::unexpected(&[expected.into()], found)),
        }
    }

    /// Gets the nesting depth of the expression being parsed.
    #[must_use]
    pub fn expression_depth(&self) -> usize { self.expression_depth }

    /// Restores the expression depth saved before a nested parse.
    pub(crate) fn set_expression_depth(&mut self, depth: usize) { self.expression_depth = depth; }

    /// Goes one level deeper into the expression being parsed.
    ///
    /// # Errors
    /// [`Error::ExpressionTooDeep`] at the given span if [`MAX_EXPRESSION_DEPTH`] is reached.
    pub(crate) fn descend(&mut self, span: &Span) -> Result<(), Error> {
        if self.expression_depth >= MAX_EXPRESSION_DEPTH {
            return Err(ExpressionTooDeep { span: span.clone() }.into());
        }

        self.expression_depth += 1;
        Ok(())
    }

    /// Creates an [`Error::UnexpectedToken`] for the given expectation.
    pub(crate) fn unexpected(expected: &[TokenKind], found: &Token) -> Error {
        UnexpectedToken {
            expected: expected.to_vec(),
            found: found.clone(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests;
