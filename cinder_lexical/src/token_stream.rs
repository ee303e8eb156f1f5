//! Contains the [`TokenStream`] struct and its related types.

use std::{ops::Index, sync::Arc};

use cinder_base::source_file::SourceFile;
use derive_more::Deref;

use crate::{
    error::Error,
    token::{EndOfInput, Token},
};

/// Is a list of [`Token`]s that always ends with exactly one [`Token::EndOfInput`].
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// This function calls [`Token::lex()`] repeatedly until the end of the source code is
    /// reached and the [`Token::EndOfInput`] token is produced.
    ///
    /// # Errors
    /// The first lexical error found. No tokens are returned in that case.
    pub fn tokenize(source_file: &Arc<SourceFile>) -> Result<Self, Error> {
        let mut tokens = Vec::new();
        let mut source_file_iterator = source_file.iter();

        loop {
            let token = Token::lex(&mut source_file_iterator)?;
            let is_end = token.is_end_of_input();

            tokens.push(token);

            if is_end {
                break;
            }
        }

        Ok(Self { tokens })
    }

    /// Gets the [`EndOfInput`] token that terminates the stream.
    #[must_use]
    pub fn end_of_input(&self) -> &EndOfInput {
        match self.tokens.last() {
            Some(Token::EndOfInput(end_of_input)) => end_of_input,
            _ => unreachable!("token stream must end with the end of input token"),
        }
    }

    /// Dissolves this struct into the list of its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> { self.tokens }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output { &self.tokens[index] }
}

#[cfg(test)]
pub(crate) mod tests;
