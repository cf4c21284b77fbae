//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators and punctuation
//! - Comments and whitespace
//! - Error cases

use crate::errors::errors::{ErrorImpl, ErrorKind};

use super::{
    lexer::{tokenize, Tokenizer},
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_skips_whitespace_and_line_comment() {
    let mut tokenizer = Tokenizer::new("  // c\n 2");

    let token = tokenizer.next_token().unwrap().unwrap();
    assert_eq!(token.kind, TokenKind::Number);
    assert_eq!(token.value, "2");
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn test_tokenize_block_comment() {
    let tokens = tokenize("/* one\n * two */ x /**/ y").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "y");
}

#[test]
fn test_block_comment_is_not_greedy() {
    let tokens = tokenize("/* a */ 1 /* b */").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "1");
}

#[test]
fn test_end_of_input_is_sticky() {
    let mut tokenizer = Tokenizer::new("a");

    assert!(tokenizer.next_token().unwrap().is_some());
    assert!(tokenizer.next_token().unwrap().is_none());
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn test_only_comments_yields_no_tokens() {
    assert!(tokenize("// nothing\n/* here */  \n").unwrap().is_empty());
}

#[test]
fn test_init_resets_cursor() {
    let mut tokenizer = Tokenizer::new("a b");
    tokenizer.next_token().unwrap();

    tokenizer.init("c");

    assert_eq!(tokenizer.next_token().unwrap().unwrap().value, "c");
    assert!(tokenizer.next_token().unwrap().is_none());
}

#[test]
fn test_tokenize_keywords() {
    let source =
        "let if else true false null while do for def return class new super extends this";

    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Let,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::While,
            TokenKind::Do,
            TokenKind::For,
            TokenKind::Def,
            TokenKind::Return,
            TokenKind::Class,
            TokenKind::New,
            TokenKind::Super,
            TokenKind::Extends,
            TokenKind::This,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = tokenize("letter iffy done classy thisOne").unwrap();

    for token in &tokens {
        assert_eq!(token.kind, TokenKind::Identifier, "{}", token.value);
    }
    assert_eq!(tokens[0].value, "letter");
    assert_eq!(tokens[4].value, "thisOne");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens.len(), 4);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
}

#[test]
fn test_number_then_identifier() {
    // Digits win first, so `12abc` splits into a number and an identifier.
    let tokens = tokenize("12abc").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "12");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_strings_keep_quotes() {
    let tokens = tokenize(r#""hello" 'world' "it's" ''"#).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::String));
    assert_eq!(tokens[0].value, "\"hello\"");
    assert_eq!(tokens[1].value, "'world'");
    assert_eq!(tokens[2].value, "\"it's\"");
    assert_eq!(tokens[3].value, "''");
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = tokenize(r#""a\nb""#).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, r#""a\nb""#);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("; { } ( ) , . [ ]"),
        vec![
            TokenKind::Semicolon,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("== != = += -= *= /= < <= > >= && || ! + - * / =>").unwrap();
    let expected = [
        (TokenKind::EqualityOperator, "=="),
        (TokenKind::EqualityOperator, "!="),
        (TokenKind::SimpleAssign, "="),
        (TokenKind::ComplexAssign, "+="),
        (TokenKind::ComplexAssign, "-="),
        (TokenKind::ComplexAssign, "*="),
        (TokenKind::ComplexAssign, "/="),
        (TokenKind::RelationalOperator, "<"),
        (TokenKind::RelationalOperator, "<="),
        (TokenKind::RelationalOperator, ">"),
        (TokenKind::RelationalOperator, ">="),
        (TokenKind::LogicalAnd, "&&"),
        (TokenKind::LogicalOr, "||"),
        (TokenKind::LogicalNot, "!"),
        (TokenKind::AdditiveOperator, "+"),
        (TokenKind::AdditiveOperator, "-"),
        (TokenKind::MultiplicativeOperator, "*"),
        (TokenKind::MultiplicativeOperator, "/"),
        (TokenKind::Arrow, "=>"),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.value, value);
    }
}

#[test]
fn test_multi_character_operators_without_spaces() {
    assert_eq!(
        kinds("a==b"),
        vec![
            TokenKind::Identifier,
            TokenKind::EqualityOperator,
            TokenKind::Identifier
        ]
    );
    assert_eq!(
        kinds("x=>x"),
        vec![TokenKind::Identifier, TokenKind::Arrow, TokenKind::Identifier]
    );
    assert_eq!(
        kinds("i+=1"),
        vec![
            TokenKind::Identifier,
            TokenKind::ComplexAssign,
            TokenKind::Number
        ]
    );
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("let x = @;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexicalError);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
}

#[test]
fn test_unterminated_string_fails_on_quote() {
    let error = tokenize("\"abc").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "\"".to_string()
        }
    );
}

#[test]
fn test_non_ascii_character_is_reported_whole() {
    let error = tokenize("é").unwrap_err();

    assert_eq!(error.to_string(), "LexicalError: unexpected token: \"é\"");
}

#[test]
fn test_iterator_stops_after_error() {
    let mut tokenizer = Tokenizer::new("a # b");

    assert!(tokenizer.next().unwrap().is_ok());
    assert!(tokenizer.next().unwrap().is_err());
    assert!(tokenizer.next().is_none());
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x += 'y'").unwrap();

    assert_eq!(tokens[0].to_string(), "IDENTIFIER x");
    assert_eq!(tokens[1].to_string(), "COMPLEX_ASSIGN +=");
    assert_eq!(tokens[2].to_string(), "STRING 'y'");
}
