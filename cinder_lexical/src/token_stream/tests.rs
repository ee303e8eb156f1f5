#![allow(clippy::float_cmp)]

use std::fmt::{Display, Write};

use cinder_base::source_file::SourceFile;
use cinder_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert, prop_assert_eq, proptest,
    strategy::{BoxedStrategy, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};

use super::TokenStream;
use crate::{
    error::Error,
    token::{self, tests::Token, KeywordKind, TokenKind},
};

/// Represents an input for the [`super::TokenStream`]: a list of tokens, each separated from the
/// previous one by at least one whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenStreamInput {
    /// The tokens in the order they are written.
    pub tokens: Vec<Token>,
}

impl Arbitrary for TokenStreamInput {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        proptest::collection::vec(Token::arbitrary(), 0..=16)
            .prop_map(|tokens| Self { tokens })
            .boxed()
    }
}

impl Display for TokenStreamInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for token in &self.tokens {
            Display::fmt(token, f)?;
            f.write_char(' ')?;
        }

        Ok(())
    }
}

impl Input<&super::TokenStream> for &TokenStreamInput {
    fn assert(self, output: &super::TokenStream) -> TestCaseResult {
        let (last, tokens) = output
            .split_last()
            .ok_or_else(|| TestCaseError::fail("the token stream is empty"))?;

        prop_assert!(last.is_end_of_input());
        self.tokens.as_slice().assert(tokens)
    }
}

fn tokenize(source: &str) -> Result<TokenStream, Error> {
    TokenStream::tokenize(&SourceFile::new("test.cinder", source))
}

fn kinds(token_stream: &TokenStream) -> Vec<TokenKind> {
    token_stream.iter().map(token::Token::kind).collect()
}

proptest! {
    #[test]
    fn token_stream_test(input in TokenStreamInput::arbitrary()) {
        let source = input.to_string();
        let token_stream = tokenize(&source)
            .map_err(|error| TestCaseError::fail(format!("{error}\nsource: {source:?}")))?;

        input.assert(&token_stream)?;
    }

    #[test]
    fn only_one_end_of_input(source in "([a-z]+|[0-9]{1,9}[ ;]|[ \n+*/=(){};,-])*") {
        let token_stream = tokenize(&source).unwrap();

        prop_assert_eq!(
            token_stream.iter().filter(|token| token.is_end_of_input()).count(),
            1
        );
        prop_assert!(token_stream.last().unwrap().is_end_of_input());
    }
}

#[test]
fn whitespace_only() {
    for source in ["", " ", "\n\t \r\n"] {
        let token_stream = tokenize(source).unwrap();

        assert_eq!(kinds(&token_stream), [TokenKind::EndOfInput]);
    }
}

#[test]
fn integer_variable_declaration() {
    let token_stream = tokenize("int a = 8;").unwrap();

    assert_eq!(
        kinds(&token_stream),
        [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(token_stream[0].as_keyword().unwrap().keyword, KeywordKind::Int);
    assert_eq!(token_stream[1].as_identifier().unwrap().name(), "a");
    assert_eq!(token_stream[3].as_integer().unwrap().value, 8);
}

#[test]
fn float_variable_declaration() {
    let token_stream = tokenize("float b = 3.14;").unwrap();

    assert_eq!(
        kinds(&token_stream),
        [
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Float,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(
        token_stream[0].as_keyword().unwrap().keyword,
        KeywordKind::Float
    );
    assert_eq!(token_stream[1].as_identifier().unwrap().name(), "b");
    assert_eq!(token_stream[3].as_float().unwrap().value, 3.14);
}

#[test]
fn every_literal_kind() {
    let token_stream =
        tokenize("char c = 'c';\nString s = \"s t\";\nvoid f(int x, float y) {}").unwrap();

    assert_eq!(token_stream[3].as_character().unwrap().value, 'c');
    assert_eq!(token_stream[8].as_string().unwrap().value, "s t");
    assert_eq!(
        token_stream[10].as_keyword().unwrap().keyword,
        KeywordKind::Void
    );
    assert_eq!(
        kinds(&token_stream)[12..],
        [
            TokenKind::LeftParenthesis,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::RightParenthesis,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn end_of_input_is_located_at_the_end() {
    let token_stream = tokenize("int a = 8;\n").unwrap();
    let end_of_input = token_stream.end_of_input();

    assert_eq!(end_of_input.span.start(), 11);
    assert_eq!(end_of_input.span.start_location().line, 2);
}

#[test]
fn first_error_aborts() {
    assert!(tokenize("int a = 1.2.3;").unwrap_err().is_duplicate_decimal_point());
    assert!(tokenize("String s = \"abc")
        .unwrap_err()
        .is_unterminated_string_literal());

    // the earlier error wins
    let error = tokenize("int # = \"abc").unwrap_err();
    assert_eq!(error.as_unexpected_character().unwrap().character, '#');
    assert_eq!(error.span().start_location().column, 5);
}

#[test]
fn source_with_byte_order_mark() {
    let token_stream = tokenize("\u{feff}int a = 8;\n").unwrap();

    assert_eq!(kinds(&token_stream), [
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Assign,
        TokenKind::Integer,
        TokenKind::Semicolon,
        TokenKind::EndOfInput,
    ]);
}
