//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::fmt::Display;

use cinder_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::Span,
};
use derive_more::From;
use enum_as_inner::EnumAsInner;

/// The source code contains a character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnexpectedCharacter {
    /// The span of the offending character.
    pub span: Span,

    /// The offending character.
    pub character: char,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(
                Severity::Error,
                format!("found an unexpected character `{}`", self.character.escape_debug())
            ),
            SourceCodeDisplay::new(&self.span, Option::<i32>::None)
        )
    }
}

/// A numeric literal contains more than one `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DuplicateDecimalPoint {
    /// The span of the second `.` of the literal.
    pub span: Span,
}

impl Display for DuplicateDecimalPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found a second decimal point in a numeric literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("a numeric literal can contain at most one `.`")
            )
        )
    }
}

/// A numeric literal is too large to be represented by its value type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericOverflow {
    /// The span of the whole literal.
    pub span: Span,
}

impl Display for NumericOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "the numeric literal is out of range"),
            SourceCodeDisplay::new(
                &self.span,
                Some("integers must fit in a signed 64-bit integer")
            )
        )
    }
}

/// A `'` is not followed by exactly one character and a closing `'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedCharLiteral {
    /// The span from the opening `'` to where the closing `'` was expected.
    pub span: Span,
}

impl Display for UnterminatedCharLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated character literal"),
            SourceCodeDisplay::new(
                &self.span,
                Some("expected `'` after the character of the literal")
            )
        )
    }
}

/// A `"` is never closed before the end of the source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedStringLiteral {
    /// The span of the opening `"`.
    pub span: Span,
}

impl Display for UnterminatedStringLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}",
            Message::new(Severity::Error, "found an unterminated string literal"),
            SourceCodeDisplay::new(&self.span, Some("this `\"` is never closed"))
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnexpectedCharacter(UnexpectedCharacter),
    DuplicateDecimalPoint(DuplicateDecimalPoint),
    NumericOverflow(NumericOverflow),
    UnterminatedCharLiteral(UnterminatedCharLiteral),
    UnterminatedStringLiteral(UnterminatedStringLiteral),
}

impl Error {
    /// Gets the span of the source code that caused the error.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::UnexpectedCharacter(err) => &err.span,
            Self::DuplicateDecimalPoint(err) => &err.span,
            Self::NumericOverflow(err) => &err.span,
            Self::UnterminatedCharLiteral(err) => &err.span,
            Self::UnterminatedStringLiteral(err) => &err.span,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter(err) => write!(f, "{err}"),
            Self::DuplicateDecimalPoint(err) => write!(f, "{err}"),
            Self::NumericOverflow(err) => write!(f, "{err}"),
            Self::UnterminatedCharLiteral(err) => write!(f, "{err}"),
            Self::UnterminatedStringLiteral(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
