use cinder_base::source_file::SourceFile;
use cinder_lexical::{
    token::{KeywordKind, PunctuationKind, TokenKind},
    token_stream::TokenStream,
};
use proptest::{prop_assert_eq, proptest};

use super::Parser;

fn tokenize(source: &str) -> TokenStream {
    TokenStream::tokenize(&SourceFile::new("test.cn", source)).unwrap()
}

#[test]
fn peek_does_not_move_cursor() {
    let token_stream = tokenize("int a");
    let parser = Parser::new(&token_stream);

    assert_eq!(parser.peek().kind(), TokenKind::Keyword);
    assert_eq!(parser.peek_offset(1).kind(), TokenKind::Identifier);
    assert_eq!(parser.peek_offset(2).kind(), TokenKind::EndOfInput);
    assert_eq!(parser.peek().kind(), TokenKind::Keyword);
}

#[test]
fn next_token_moves_cursor() {
    let token_stream = tokenize("( )");
    let mut parser = Parser::new(&token_stream);

    assert_eq!(parser.next_token().kind(), TokenKind::LeftParenthesis);
    assert_eq!(parser.next_token().kind(), TokenKind::RightParenthesis);
    assert!(parser.is_exhausted());
}

#[test]
fn expect_keeps_cursor_on_mismatch() {
    let token_stream = tokenize("; x");
    let mut parser = Parser::new(&token_stream);

    let error = parser
        .expect(&[TokenKind::Identifier, TokenKind::Comma])
        .unwrap_err()
        .into_unexpected_token()
        .unwrap();

    assert_eq!(error.expected, vec![
        TokenKind::Identifier,
        TokenKind::Comma
    ]);
    assert_eq!(error.found.kind(), TokenKind::Semicolon);
    assert_eq!(parser.peek().kind(), TokenKind::Semicolon);

    assert!(parser.expect(&[TokenKind::Semicolon]).is_ok());
    assert_eq!(parser.parse_identifier().unwrap().name(), "x");
}

#[test]
fn parse_type_rejects_void_when_not_allowed() {
    let token_stream = tokenize("void");
    let mut parser = Parser::new(&token_stream);

    let error = parser.parse_type(false).unwrap_err();
    assert!(error.is_unexpected_keyword());
    assert_eq!(error.span().str(), "void");

    assert_eq!(parser.parse_type(true).unwrap().keyword, KeywordKind::Void);
    assert!(parser.is_exhausted());
}

#[test]
fn parse_type_requires_keyword() {
    let token_stream = tokenize("a");
    let mut parser = Parser::new(&token_stream);

    let error = parser
        .parse_type(true)
        .unwrap_err()
        .into_unexpected_token()
        .unwrap();

    assert_eq!(error.expected, vec![TokenKind::Keyword]);
}

#[test]
fn parse_punctuation_checks_kind() {
    let token_stream = tokenize("{");
    let mut parser = Parser::new(&token_stream);

    assert!(parser.parse_punctuation(PunctuationKind::RightBrace).is_err());
    assert_eq!(
        parser
            .parse_punctuation(PunctuationKind::LeftBrace)
            .unwrap()
            .kind,
        PunctuationKind::LeftBrace
    );
}

#[test]
fn unexpected_token_message() {
    let token_stream = tokenize("int a;");
    let mut parser = Parser::new(&token_stream);

    let error = parser.parse_declaration().unwrap_err();
    let message = error.to_string();

    assert!(message.contains("expected `=` or `(`, but found `;`"));
    assert!(message.contains("test.cn:1:6"));
}

proptest! {
    #[test]
    fn cursor_never_moves_past_end_of_input(
        source in "[a-z ;]{0,16}",
        steps in 0usize..32
    ) {
        let token_stream = tokenize(&source);
        let mut parser = Parser::new(&token_stream);

        for _ in 0..steps {
            parser.forward();
        }

        prop_assert_eq!(parser.is_exhausted(), steps + 1 >= token_stream.len());

        prop_assert_eq!(parser.peek_offset(usize::MAX).kind(), TokenKind::EndOfInput);
    }
}
