//! Contains all kinds of syntactic errors that can occur while parsing the token stream.

use std::fmt::Display;

use cinder_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};
use cinder_lexical::token::{Keyword, Token, TokenKind};
use derive_more::From;
use enum_as_inner::EnumAsInner;

use crate::parser::MAX_EXPRESSION_DEPTH;

/// A token of one of the `expected` kinds is required but an other token was found.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The kinds of token that would have been accepted at this point.
    pub expected: Vec<TokenKind>,

    /// The invalid token that was found.
    pub found: Token,
}

impl UnexpectedToken {
    fn expected_binding(&self) -> String {
        let mut binding = String::new();

        for (index, kind) in self.expected.iter().enumerate() {
            if index > 0 {
                binding.push_str(if index + 1 == self.expected.len() {
                    " or "
                } else {
                    ", "
                });
            }

            binding.push_str(&kind.to_string());
        }

        binding
    }
}

impl Display for UnexpectedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let found_binding = match &self.found {
            Token::Keyword(keyword) => format!("the keyword `{}`", keyword.keyword),
            Token::Identifier(identifier) => format!("the identifier `{}`", identifier.name()),
            Token::EndOfInput(..) => "end of input".to_string(),
            found => format!("`{}`", found.span().str()),
        };

        let message = format!(
            "expected {}, but found {found_binding}",
            self.expected_binding()
        );

        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, message),
            SourceCodeDisplay::new(self.found.span(), Option::<i32>::None)
        )
    }
}

/// A type keyword was found where it is not allowed, such as `void` as a variable type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedKeyword {
    /// The keyword that was found.
    pub keyword: Keyword,
}

impl Display for UnexpectedKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("the type `{}` is not allowed here", self.keyword.keyword)
            ),
            SourceCodeDisplay::new(
                &self.keyword.span,
                Some("`void` can only be used as the return type of a function")
            )
        )
    }
}

/// An expression nests deeper than [`MAX_EXPRESSION_DEPTH`] levels.
///
/// [`MAX_EXPRESSION_DEPTH`]: crate::parser::MAX_EXPRESSION_DEPTH
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpressionTooDeep {
    /// The operator or parenthesis that goes past the limit.
    pub span: Span,
}

impl Display for ExpressionTooDeep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "the expression is nested too deeply"),
            SourceCodeDisplay::new(
                &self.span,
                Some(format!(
                    "expressions can nest at most {MAX_EXPRESSION_DEPTH} levels, counting \
                     parentheses and operators"
                ))
            )
        )
    }
}

/// Is an enumeration containing all kinds of syntactic errors that can occur while parsing the
/// token stream.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedToken(UnexpectedToken),
    UnexpectedKeyword(UnexpectedKeyword),
    ExpressionTooDeep(ExpressionTooDeep),
}

impl Error {
    /// Gets the span of the token that caused the error.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedToken(err) => err.found.span(),
            Self::UnexpectedKeyword(err) => &err.keyword.span,
            Self::ExpressionTooDeep(err) => &err.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken(err) => write!(f, "{err}"),
            Self::UnexpectedKeyword(err) => write!(f, "{err}"),
            Self::ExpressionTooDeep(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
