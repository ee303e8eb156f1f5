//! Contains all the definition of syntax trees for the Cinder language and their parsing logic.
//!
//! The syntax trees only keep the values carried by the tokens, not their spans. Their [`Display`]
//! implementations print the canonical source text, which parses back into an equal tree.
//!
//! [`Display`]: std::fmt::Display

use cinder_lexical::token::{PunctuationKind, Token, TokenKind};

use crate::{error::Error, parser::Parser};

pub mod declaration;
pub mod expression;
pub mod program;

impl<'a> Parser<'a> {
    /// Parses a list of elements enclosed by the `open` and `close` punctuation and separated by
    /// commas, such as `(int a, char b)`.
    ///
    /// The parser position must be at the `open` punctuation. It will consume the whole list and
    /// move to the next token after the `close` punctuation. A trailing comma is not allowed.
    ///
    /// # Errors
    /// - if the parser position is not at the `open` punctuation.
    /// - if an element is not followed by either a comma or the `close` punctuation.
    /// - any error returned by the given parser function.
    pub fn parse_enclosed_list<T>(
        &mut self,
        open: PunctuationKind,
        close: PunctuationKind,
        mut f: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        self.parse_punctuation(open)?;

        let mut elements = Vec::new();

        // immediately closed
        if matches!(self.peek(), Token::Punctuation(punctuation) if punctuation.kind == close) {
            self.forward();
            return Ok(elements);
        }

        loop {
            elements.push(f(self)?);

            let separator = self.expect(&[TokenKind::Comma, close.into()])?;

            if separator.kind() != TokenKind::Comma {
                break;
            }
        }

        Ok(elements)
    }
}

#[cfg(test)]
pub(super) mod tests;
