//! Contains the [`Program`] syntax tree, the root of every parsed source file.

use std::fmt::Display;

use cinder_lexical::{token::TokenKind, token_stream::TokenStream};
use derive_new::new;
use getset::Getters;

use super::declaration::Declaration;
use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Program:
///     Declaration* EndOfInput
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Getters, new)]
pub struct Program {
    #[get = "pub"]
    declarations: Vec<Declaration>,
}

impl Program {
    /// Parses the whole token stream into a [`Program`].
    ///
    /// # Errors
    /// The first syntax error found. No partial tree is returned in that case.
    pub fn parse(token_stream: &TokenStream) -> Result<Self, Error> {
        Parser::new(token_stream).parse_program()
    }

    /// Dissolves the [`Program`] into a list of [`Declaration`]s.
    #[must_use]
    pub fn dissolve(self) -> Vec<Declaration> { self.declarations }
}

/// Prints one declaration per line.
impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for declaration in &self.declarations {
            writeln!(f, "{declaration}")?;
        }

        Ok(())
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Program`].
    ///
    /// Declarations are parsed until the end of input token is reached.
    ///
    /// # Errors
    /// The first syntax error found.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut declarations = Vec::new();

        while !self.is_exhausted() {
            if !self.peek().is_keyword() {
                return Err(Self::unexpected(
                    &[TokenKind::Keyword, TokenKind::EndOfInput],
                    self.peek(),
                ));
            }

            declarations.push(self.parse_declaration()?);
        }

        Ok(Program { declarations })
    }
}
