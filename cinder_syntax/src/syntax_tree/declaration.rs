//! Contains the syntax trees related to declarations and their parsing logic.

use std::fmt::Display;

use cinder_lexical::token::{KeywordKind, PunctuationKind, Token, TokenKind};
use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};

use super::expression::Expression;
use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// Declaration:
///     VariableDeclaration
///     | FunctionDeclaration
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
}

impl Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(variable) => write!(f, "{variable}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// VariableDeclaration:
///     Type Identifier '=' Expression ';'
///     ;
/// ```
///
/// The type can be any type keyword except `void`.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct VariableDeclaration {
    #[get_copy = "pub"]
    variable_type: KeywordKind,
    #[get = "pub"]
    identifier: String,
    #[get = "pub"]
    value: Expression,
}

impl VariableDeclaration {
    /// Dissolves the [`VariableDeclaration`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (KeywordKind, String, Expression) {
        (self.variable_type, self.identifier, self.value)
    }
}

impl Display for VariableDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {};",
            self.variable_type, self.identifier, self.value
        )
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Parameter:
///     Type Identifier
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters, new)]
pub struct Parameter {
    #[get_copy = "pub"]
    parameter_type: KeywordKind,
    #[get = "pub"]
    identifier: String,
}

impl Parameter {
    /// Dissolves the [`Parameter`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (KeywordKind, String) { (self.parameter_type, self.identifier) }
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.parameter_type, self.identifier)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// FunctionDeclaration:
///     ReturnType Identifier '(' ParameterList? ')' Block
///     ;
///
/// ParameterList:
///     Parameter (',' Parameter)*
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct FunctionDeclaration {
    #[get_copy = "pub"]
    return_type: KeywordKind,
    #[get = "pub"]
    identifier: String,
    #[get = "pub"]
    parameters: Vec<Parameter>,
    #[get = "pub"]
    body: Block,
}

impl FunctionDeclaration {
    /// Dissolves the [`FunctionDeclaration`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (KeywordKind, String, Vec<Parameter>, Block) {
        (self.return_type, self.identifier, self.parameters, self.body)
    }
}

impl Display for FunctionDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(", self.return_type, self.identifier)?;

        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{parameter}")?;
        }

        write!(f, ") {}", self.body)
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Block:
///     '{' Declaration* '}'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Getters, new)]
pub struct Block {
    #[get = "pub"]
    declarations: Vec<Declaration>,
}

impl Block {
    /// Dissolves the [`Block`] into a list of [`Declaration`]s.
    #[must_use]
    pub fn dissolve(self) -> Vec<Declaration> { self.declarations }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;

        for declaration in &self.declarations {
            write!(f, " {declaration}")?;
        }

        f.write_str(" }")
    }
}

impl<'a> Parser<'a> {
    /// Parses a [`Declaration`].
    ///
    /// Both kinds of declaration start with a type keyword and an identifier, so the token right
    /// after the identifier decides: `=` starts a variable and `(` starts a function.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`] if the tokens do not form a declaration.
    /// - [`Error::UnexpectedKeyword`] if `void` is used as a variable or parameter type.
    pub fn parse_declaration(&mut self) -> Result<Declaration, Error> {
        if !self.peek().is_keyword() {
            return Err(Self::unexpected(&[TokenKind::Keyword], self.peek()));
        }

        if !self.peek_offset(1).is_identifier() {
            return Err(Self::unexpected(
                &[TokenKind::Identifier],
                self.peek_offset(1),
            ));
        }

        match self.peek_offset(2) {
            Token::Punctuation(punctuation) if punctuation.kind == PunctuationKind::Assign => {
                self.parse_variable_declaration().map(Declaration::Variable)
            }
            Token::Punctuation(punctuation)
                if punctuation.kind == PunctuationKind::LeftParenthesis =>
            {
                self.parse_function_declaration().map(Declaration::Function)
            }
            found => Err(Self::unexpected(
                &[TokenKind::Assign, TokenKind::LeftParenthesis],
                found,
            )),
        }
    }

    /// Parses a [`VariableDeclaration`].
    ///
    /// # Errors
    /// If the tokens do not form a variable declaration.
    pub fn parse_variable_declaration(&mut self) -> Result<VariableDeclaration, Error> {
        let variable_type = self.parse_type(false)?.keyword;
        let identifier = self.parse_identifier()?.name().to_owned();
        self.parse_punctuation(PunctuationKind::Assign)?;
        let value = self.parse_expression()?;
        self.parse_punctuation(PunctuationKind::Semicolon)?;

        Ok(VariableDeclaration {
            variable_type,
            identifier,
            value,
        })
    }

    /// Parses a [`FunctionDeclaration`].
    ///
    /// # Errors
    /// If the tokens do not form a function declaration.
    pub fn parse_function_declaration(&mut self) -> Result<FunctionDeclaration, Error> {
        let return_type = self.parse_type(true)?.keyword;
        let identifier = self.parse_identifier()?.name().to_owned();
        let parameters = self.parse_enclosed_list(
            PunctuationKind::LeftParenthesis,
            PunctuationKind::RightParenthesis,
            Self::parse_parameter,
        )?;
        let body = self.parse_block()?;

        Ok(FunctionDeclaration {
            return_type,
            identifier,
            parameters,
            body,
        })
    }

    /// Parses a [`Parameter`].
    ///
    /// # Errors
    /// If the tokens do not form a parameter.
    pub fn parse_parameter(&mut self) -> Result<Parameter, Error> {
        let parameter_type = self.parse_type(false)?.keyword;
        let identifier = self.parse_identifier()?.name().to_owned();

        Ok(Parameter {
            parameter_type,
            identifier,
        })
    }

    /// Parses a [`Block`].
    ///
    /// # Errors
    /// If the tokens do not form a block.
    pub fn parse_block(&mut self) -> Result<Block, Error> {
        self.parse_punctuation(PunctuationKind::LeftBrace)?;

        let mut declarations = Vec::new();

        loop {
            match self.peek() {
                Token::Punctuation(punctuation)
                    if punctuation.kind == PunctuationKind::RightBrace =>
                {
                    self.forward();
                    break;
                }
                Token::Keyword(..) => declarations.push(self.parse_declaration()?),
                found => {
                    return Err(Self::unexpected(
                        &[TokenKind::Keyword, TokenKind::RightBrace],
                        found,
                    ))
                }
            }
        }

        Ok(Block { declarations })
    }
}
