use std::{fmt::Display, str::FromStr};

use cinder_base::source_file::SourceFile;
use cinder_lexical::{
    token::{KeywordKind, PunctuationKind, TokenKind},
    token_stream::TokenStream,
};
use cinder_test::input::Input;
use proptest::{
    prelude::Arbitrary,
    prop_assert_eq,
    strategy::{BoxedStrategy, Strategy},
    test_runner::{TestCaseError, TestCaseResult},
};

use crate::{error::Error, parser::Parser};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Arbitrary for Identifier {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        "[a-zA-Z]{1,8}"
            .prop_filter("identifier must not be a keyword", |name| {
                KeywordKind::from_str(name).is_err()
            })
            .prop_map(Self)
            .boxed()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(&self.0) }
}

impl Input<&String> for &Identifier {
    fn assert(self, output: &String) -> TestCaseResult {
        prop_assert_eq!(&self.0, output);
        Ok(())
    }
}

/// A type keyword; the parameter tells whether `void` may be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Type(KeywordKind);

impl Arbitrary for Type {
    type Parameters = bool;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(allow_void: Self::Parameters) -> Self::Strategy {
        let mut keywords = vec![
            KeywordKind::Int,
            KeywordKind::Float,
            KeywordKind::Char,
            KeywordKind::String,
        ];

        if allow_void {
            keywords.push(KeywordKind::Void);
        }

        proptest::sample::select(keywords).prop_map(Self).boxed()
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl Input<&KeywordKind> for &Type {
    fn assert(self, output: &KeywordKind) -> TestCaseResult {
        prop_assert_eq!(self.0, *output);
        Ok(())
    }
}

/// Tokenizes the source code and runs the given parser function on it.
///
/// The whole token stream must be consumed by the parser function.
pub fn parse<T, F>(source: impl Display, f: F) -> Result<T, TestCaseError>
where
    F: FnOnce(&mut Parser) -> Result<T, Error>,
{
    let source = source.to_string();
    let source_file = SourceFile::new("test.cn", source.clone());

    let token_stream = TokenStream::tokenize(&source_file).map_err(|error| {
        TestCaseError::reject(format!(
            "found lexical error: {error:#?};\nsource: {source}"
        ))
    })?;

    let mut parser = Parser::new(&token_stream);

    let output = f(&mut parser).map_err(|error| {
        TestCaseError::fail(format!("found syntax error: {error:#?};\nsource: {source}"))
    })?;

    if !parser.is_exhausted() {
        return Err(TestCaseError::fail(format!(
            "the parser stopped at {:?};\nsource: {source}",
            parser.peek()
        )));
    }

    Ok(output)
}

/// Tokenizes the source code and runs the given parser function on it, expecting it to fail.
pub fn parse_error<T: std::fmt::Debug>(
    source: &str,
    f: impl FnOnce(&mut Parser) -> Result<T, Error>,
) -> Error {
    let source_file = SourceFile::new("test.cn", source);
    let token_stream = TokenStream::tokenize(&source_file).unwrap();
    let mut parser = Parser::new(&token_stream);

    f(&mut parser).unwrap_err()
}

fn parse_identifier_list(parser: &mut Parser) -> Result<Vec<String>, Error> {
    parser.parse_enclosed_list(
        PunctuationKind::LeftParenthesis,
        PunctuationKind::RightParenthesis,
        |parser| parser.parse_identifier().map(|x| x.name().to_owned()),
    )
}

#[test]
fn enclosed_list_test() -> TestCaseResult {
    prop_assert_eq!(parse("()", parse_identifier_list)?, Vec::<String>::new());
    prop_assert_eq!(parse("(a)", parse_identifier_list)?, vec!["a".to_owned()]);
    prop_assert_eq!(parse("(a, b, c)", parse_identifier_list)?, vec![
        "a".to_owned(),
        "b".to_owned(),
        "c".to_owned()
    ]);

    Ok(())
}

#[test]
fn enclosed_list_rejects_trailing_comma() {
    let error = parse_error("(a,)", parse_identifier_list)
        .into_unexpected_token()
        .unwrap();

    assert_eq!(error.expected, vec![TokenKind::Identifier]);
    assert_eq!(error.found.span().str(), ")");
}

#[test]
fn enclosed_list_requires_separator() {
    let error = parse_error("(a b)", parse_identifier_list)
        .into_unexpected_token()
        .unwrap();

    assert_eq!(error.expected, vec![
        TokenKind::Comma,
        TokenKind::RightParenthesis
    ]);
    assert_eq!(error.found.span().str(), "b");
}

#[test]
fn enclosed_list_requires_open_punctuation() {
    let error = parse_error("a)", parse_identifier_list)
        .into_unexpected_token()
        .unwrap();

    assert_eq!(error.expected, vec![TokenKind::LeftParenthesis]);
}
