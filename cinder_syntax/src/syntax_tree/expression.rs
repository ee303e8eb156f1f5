//! Contains the syntax trees related to expressions and their parsing logic.

use std::fmt::Display;

use cinder_lexical::token::{PunctuationKind, Token, TokenKind};
use derive_new::new;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};

use crate::{error::Error, parser::Parser};

/// Syntax Synopsis:
///
/// ``` ebnf
/// BinaryOperator:
///     '+'
///     | '-'
///     | '*'
///     | '/'
///     ;
/// ```
///
/// All the operators have the same precedence and are left associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Gets the character that the operator is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Gets the operator represented by the given punctuation, if any.
    #[must_use]
    pub fn from_punctuation(kind: PunctuationKind) -> Option<Self> {
        match kind {
            PunctuationKind::Plus => Some(Self::Add),
            PunctuationKind::Minus => Some(Self::Subtract),
            PunctuationKind::Multiply => Some(Self::Multiply),
            PunctuationKind::Divide => Some(Self::Divide),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Binary:
///     Expression BinaryOperator Primary
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, new)]
pub struct Binary {
    #[get = "pub"]
    left_operand: Box<Expression>,
    #[get_copy = "pub"]
    operator: BinaryOperator,
    #[get = "pub"]
    right_operand: Box<Expression>,
}

impl Binary {
    /// Dissolves the [`Binary`] into its components.
    #[must_use]
    pub fn dissolve(self) -> (Expression, BinaryOperator, Expression) {
        (*self.left_operand, self.operator, *self.right_operand)
    }
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ", self.left_operand, self.operator)?;

        // a binary right operand only comes from a parenthesized expression
        if self.right_operand.is_binary() {
            write!(f, "({})", self.right_operand)
        } else {
            write!(f, "{}", self.right_operand)
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Literal:
///     Integer
///     | Float
///     | Character
///     | String
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
#[allow(missing_docs)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Character(char),
    String(String),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => {
                let text = value.to_string();

                // keeps the literal a float when read back
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{text}.0")
                }
            }
            Self::Character(value) => write!(f, "'{value}'"),
            Self::String(value) => write!(f, "\"{value}\""),
        }
    }
}

/// Syntax Synopsis:
///
/// ``` ebnf
/// Expression:
///     Binary
///     | Primary
///     ;
///
/// Primary:
///     Literal
///     | Identifier
///     | '(' Expression ')'
///     ;
/// ```
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
#[allow(missing_docs)]
pub enum Expression {
    Binary(Binary),
    Literal(Literal),
    Identifier(String),
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(binary) => write!(f, "{binary}"),
            Self::Literal(literal) => write!(f, "{literal}"),
            Self::Identifier(identifier) => f.write_str(identifier),
        }
    }
}

impl<'a> Parser<'a> {
    /// Parses an [`Expression`]
    ///
    /// The operands are folded from left to right regardless of the operators, so `1 + 2 * 3` is
    /// parsed as `(1 + 2) * 3`.
    ///
    /// # Errors
    /// - [`Error::UnexpectedToken`]: An operand is not a valid primary expression.
    /// - [`Error::ExpressionTooDeep`]: The expression nests deeper than
    ///   [`MAX_EXPRESSION_DEPTH`](crate::parser::MAX_EXPRESSION_DEPTH).
    pub fn parse_expression(&mut self) -> Result<Expression, Error> {
        let depth = self.expression_depth();
        let expression = self.parse_binary_fold();
        self.set_expression_depth(depth);

        expression
    }

    fn parse_binary_fold(&mut self) -> Result<Expression, Error> {
        let mut expression = self.parse_primary()?;

        loop {
            let operator_span = self.peek().span();
            let Some(operator) = self.try_parse_binary_operator() else {
                break;
            };

            // the folded left operand is one level deeper
            self.descend(operator_span)?;
            let right_operand = self.parse_primary()?;

            expression = Expression::Binary(Binary::new(
                Box::new(expression),
                operator,
                Box::new(right_operand),
            ));
        }

        Ok(expression)
    }

    /// Parses a primary expression: a literal, an identifier or a parenthesized expression.
    ///
    /// # Errors
    /// If the next token cannot start a primary expression.
    pub fn parse_primary(&mut self) -> Result<Expression, Error> {
        let expression = match self.peek() {
            Token::Integer(integer) => Expression::Literal(Literal::Integer(integer.value)),
            Token::Float(float) => Expression::Literal(Literal::Float(float.value)),
            Token::Character(character) => {
                Expression::Literal(Literal::Character(character.value))
            }
            Token::String(string) => Expression::Literal(Literal::String(string.value.clone())),
            Token::Identifier(identifier) => Expression::Identifier(identifier.name().to_owned()),

            // parenthesized expression
            Token::Punctuation(punctuation)
                if punctuation.kind == PunctuationKind::LeftParenthesis =>
            {
                return self.parse_parenthesized();
            }

            found => {
                return Err(Self::unexpected(
                    &[
                        TokenKind::Integer,
                        TokenKind::Float,
                        TokenKind::Character,
                        TokenKind::String,
                        TokenKind::Identifier,
                        TokenKind::LeftParenthesis,
                    ],
                    found,
                ))
            }
        };

        self.forward();

        Ok(expression)
    }

    fn parse_parenthesized(&mut self) -> Result<Expression, Error> {
        let open = self.parse_punctuation(PunctuationKind::LeftParenthesis)?;

        let depth = self.expression_depth();
        self.descend(&open.span)?;
        let expression = self.parse_expression();
        self.set_expression_depth(depth);

        let expression = expression?;
        self.parse_punctuation(PunctuationKind::RightParenthesis)?;

        Ok(expression)
    }

    fn try_parse_binary_operator(&mut self) -> Option<BinaryOperator> {
        let Token::Punctuation(punctuation) = self.peek() else {
            return None;
        };

        let operator = BinaryOperator::from_punctuation(punctuation.kind)?;
        self.forward();

        Some(operator)
    }
}
