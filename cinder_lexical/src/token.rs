//! Is a module containing the [`Token`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use cinder_base::source_file::{self, ByteIndex, Span};
use derive_more::From;
use enum_as_inner::EnumAsInner;
use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

use crate::error::{
    DuplicateDecimalPoint, Error, NumericOverflow, UnexpectedCharacter, UnterminatedCharLiteral,
    UnterminatedStringLiteral,
};

/// Is an enumeration representing keywords in the Cinder programming language.
///
/// Every keyword names a type; `void` is only meaningful as a function return type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Int,
    Float,
    Char,
    String,
    Void,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Char => "char",
            Self::String => "String",
            Self::Void => "void",
        }
    }

    /// Returns `true` if the keyword is `void`.
    #[must_use]
    pub fn is_void(self) -> bool { self == Self::Void }
}

/// Is an enumeration of the single-character operators and punctuation marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum PunctuationKind {
    Plus,
    Minus,
    Multiply,
    Divide,
    Assign,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
}

impl PunctuationKind {
    /// Gets the character that the punctuation is written as.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Assign => '=',
            Self::LeftParenthesis => '(',
            Self::RightParenthesis => ')',
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::Semicolon => ';',
            Self::Comma => ',',
        }
    }

    /// Gets the punctuation written as the given character, if any.
    #[must_use]
    pub fn from_char(character: char) -> Option<Self> {
        Self::iter().find(|kind| kind.as_char() == character)
    }
}

/// Is an enumeration of the kinds of [`Token`], without their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    Character,
    String,
    Plus,
    Minus,
    Multiply,
    Divide,
    Assign,
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    EndOfInput,
}

impl From<PunctuationKind> for TokenKind {
    fn from(kind: PunctuationKind) -> Self {
        match kind {
            PunctuationKind::Plus => Self::Plus,
            PunctuationKind::Minus => Self::Minus,
            PunctuationKind::Multiply => Self::Multiply,
            PunctuationKind::Divide => Self::Divide,
            PunctuationKind::Assign => Self::Assign,
            PunctuationKind::LeftParenthesis => Self::LeftParenthesis,
            PunctuationKind::RightParenthesis => Self::RightParenthesis,
            PunctuationKind::LeftBrace => Self::LeftBrace,
            PunctuationKind::RightBrace => Self::RightBrace,
            PunctuationKind::Semicolon => Self::Semicolon,
            PunctuationKind::Comma => Self::Comma,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword => f.write_str("a type keyword"),
            Self::Identifier => f.write_str("an identifier"),
            Self::Integer => f.write_str("an integer literal"),
            Self::Float => f.write_str("a float literal"),
            Self::Character => f.write_str("a character literal"),
            Self::String => f.write_str("a string literal"),
            Self::EndOfInput => f.write_str("end of input"),
            Self::Plus => f.write_str("`+`"),
            Self::Minus => f.write_str("`-`"),
            Self::Multiply => f.write_str("`*`"),
            Self::Divide => f.write_str("`/`"),
            Self::Assign => f.write_str("`=`"),
            Self::LeftParenthesis => f.write_str("`(`"),
            Self::RightParenthesis => f.write_str("`)`"),
            Self::LeftBrace => f.write_str("`{`"),
            Self::RightBrace => f.write_str("`}`"),
            Self::Semicolon => f.write_str("`;`"),
            Self::Comma => f.write_str("`,`"),
        }
    }
}

/// Is an enumeration containing all kinds of tokens in the Cinder programming language.
#[derive(Debug, Clone, PartialEq, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Token {
    Keyword(Keyword),
    Identifier(Identifier),
    Integer(Integer),
    Float(Float),
    Character(Character),
    String(StringLiteral),
    Punctuation(Punctuation),
    EndOfInput(EndOfInput),
}

impl Token {
    /// Returns the span of the token.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Keyword(token) => &token.span,
            Self::Identifier(token) => &token.span,
            Self::Integer(token) => &token.span,
            Self::Float(token) => &token.span,
            Self::Character(token) => &token.span,
            Self::String(token) => &token.span,
            Self::Punctuation(token) => &token.span,
            Self::EndOfInput(token) => &token.span,
        }
    }

    /// Returns the [`TokenKind`] of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Keyword(..) => TokenKind::Keyword,
            Self::Identifier(..) => TokenKind::Identifier,
            Self::Integer(..) => TokenKind::Integer,
            Self::Float(..) => TokenKind::Float,
            Self::Character(..) => TokenKind::Character,
            Self::String(..) => TokenKind::String,
            Self::Punctuation(token) => token.kind.into(),
            Self::EndOfInput(..) => TokenKind::EndOfInput,
        }
    }
}

/// Prints the kind of the token followed by its value, e.g. `Integer 8`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.kind())?;

        match self {
            Self::Keyword(token) => write!(f, " {}", token.keyword),
            Self::Identifier(token) => write!(f, " {}", token.name()),
            Self::Integer(token) => write!(f, " {}", token.value),
            Self::Float(token) => write!(f, " {:?}", token.value),
            Self::Character(token) => write!(f, " {:?}", token.value),
            Self::String(token) => write!(f, " {:?}", token.value),
            Self::Punctuation(token) => write!(f, " {}", token.kind.as_char()),
            Self::EndOfInput(..) => Ok(()),
        }
    }
}

/// Represents one of the type keywords.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the [`KeywordKind`] that the token represents.
    pub keyword: KeywordKind,
}

/// Represents a contiguous sequence of ASCII letters that is not a keyword.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    /// Is the span that makes up the token.
    pub span: Span,
}

impl Identifier {
    /// Gets the name written in the source code.
    #[must_use]
    pub fn name(&self) -> &str { self.span.str() }
}

/// Represents an integer literal such as `42`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer {
    /// Is the span that makes up the token.
    pub span: Span,

    /// The base-10 value of the digits.
    pub value: i64,
}

/// Represents a float literal such as `3.14` or `3.`.
#[derive(Debug, Clone, PartialEq)]
pub struct Float {
    /// Is the span that makes up the token.
    pub span: Span,

    /// The parsed value of the literal.
    pub value: f64,
}

/// Represents a character literal such as `'c'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Character {
    /// Is the span that makes up the token, including the quotes.
    pub span: Span,

    /// The character between the quotes.
    pub value: char,
}

/// Represents a string literal such as `"text"`. Escape sequences are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringLiteral {
    /// Is the span that makes up the token, including the quotes.
    pub span: Span,

    /// The characters between the quotes.
    pub value: String,
}

/// Represents a single-character operator or punctuation mark.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Punctuation {
    /// Is the span that makes up the token.
    pub span: Span,

    /// Is the kind of punctuation that the token represents.
    pub kind: PunctuationKind,
}

/// Marks the end of the token sequence. Its span is empty and located at the end of the source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EndOfInput {
    /// Is the empty span at the end of the source code.
    pub span: Span,
}

impl Token {
    /// Increments the iterator until the predicate returns false.
    fn walk_iter(iter: &mut source_file::Iterator, predicate: impl Fn(char) -> bool) {
        while let Some((_, character)) = iter.peek() {
            if !predicate(character) {
                break;
            }

            iter.next();
        }
    }

    /// Creates a span from the given start location to the current location of the iterator.
    fn create_span(start: ByteIndex, iter: &mut source_file::Iterator) -> Span {
        let end = iter.position();
        Span::new(iter.source_file().clone(), start, end).unwrap()
    }

    fn handle_identifier_and_keyword(iter: &mut source_file::Iterator, start: ByteIndex) -> Self {
        Self::walk_iter(iter, |character| character.is_ascii_alphabetic());

        let span = Self::create_span(start, iter);

        // Checks if the word is a keyword
        match KeywordKind::from_str(span.str()) {
            Ok(keyword) => Keyword { span, keyword }.into(),
            Err(KeywordParseError) => Identifier { span }.into(),
        }
    }

    fn handle_numeric_literal(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
    ) -> Result<Self, Error> {
        let mut is_float = false;

        while let Some((index, character)) = iter.peek() {
            if character == '.' {
                if is_float {
                    return Err(DuplicateDecimalPoint {
                        span: Span::new(iter.source_file().clone(), index, index + 1).unwrap(),
                    }
                    .into());
                }

                is_float = true;
            } else if !character.is_ascii_digit() {
                break;
            }

            iter.next();
        }

        let span = Self::create_span(start, iter);

        if is_float {
            match span.str().parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Float { span, value }.into()),
                _ => Err(NumericOverflow { span }.into()),
            }
        } else {
            match span.str().parse::<i64>() {
                Ok(value) => Ok(Integer { span, value }.into()),
                Err(_) => Err(NumericOverflow { span }.into()),
            }
        }
    }

    fn handle_character_literal(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
    ) -> Result<Self, Error> {
        let value = iter.next().map(|(_, character)| character);

        match (value, iter.peek()) {
            (Some(value), Some((_, '\''))) => {
                // eat the closing quote
                iter.next();

                Ok(Character {
                    span: Self::create_span(start, iter),
                    value,
                }
                .into())
            }
            _ => Err(UnterminatedCharLiteral {
                span: Self::create_span(start, iter),
            }
            .into()),
        }
    }

    fn handle_string_literal(
        iter: &mut source_file::Iterator,
        start: ByteIndex,
    ) -> Result<Self, Error> {
        let mut value = String::new();

        loop {
            match iter.next() {
                Some((_, '"')) => {
                    return Ok(StringLiteral {
                        span: Self::create_span(start, iter),
                        value,
                    }
                    .into())
                }
                Some((_, character)) => value.push(character),
                None => {
                    return Err(UnterminatedStringLiteral {
                        span: Span::new(iter.source_file().clone(), start, start + 1).unwrap(),
                    }
                    .into())
                }
            }
        }
    }

    /// Lexes the next token from the given iterator.
    ///
    /// Whitespace in front of the token is skipped. After the token is made, the iterator is left
    /// at the next character that is not part of the token. When no character is left, an
    /// [`EndOfInput`] token is returned and the iterator is not moved.
    ///
    /// # Errors
    /// - [`Error::UnexpectedCharacter`] - The character cannot start any token.
    /// - [`Error::DuplicateDecimalPoint`] - A numeric literal contains a second `.`.
    /// - [`Error::NumericOverflow`] - A numeric literal does not fit its value type.
    /// - [`Error::UnterminatedCharLiteral`] - A `'` is not followed by one character and a `'`.
    /// - [`Error::UnterminatedStringLiteral`] - A `"` is never closed.
    pub fn lex(iter: &mut source_file::Iterator) -> Result<Self, Error> {
        Self::walk_iter(iter, is_whitespace);

        // Gets the first character
        let Some((start, character)) = iter.next() else {
            let end = iter.position();
            return Ok(EndOfInput {
                span: Self::create_span(end, iter),
            }
            .into());
        };

        // Found numeric literal
        if character.is_ascii_digit() {
            Self::handle_numeric_literal(iter, start)
        }
        // Found identifier/keyword
        else if character.is_ascii_alphabetic() {
            Ok(Self::handle_identifier_and_keyword(iter, start))
        }
        // Found character literal
        else if character == '\'' {
            Self::handle_character_literal(iter, start)
        }
        // Found string literal
        else if character == '"' {
            Self::handle_string_literal(iter, start)
        }
        // Found a punctuation
        else if let Some(kind) = PunctuationKind::from_char(character) {
            Ok(Punctuation {
                span: Self::create_span(start, iter),
                kind,
            }
            .into())
        } else {
            Err(UnexpectedCharacter {
                span: Self::create_span(start, iter),
                character,
            }
            .into())
        }
    }
}

/// Checks whether the character separates tokens. The byte order mark counts as whitespace so that
/// files saved with one still tokenize.
fn is_whitespace(character: char) -> bool {
    character.is_whitespace() || character == '\u{feff}'
}
