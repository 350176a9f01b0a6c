//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Single and two character operators
//! - Illegal bytes
//! - End of input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Function);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EndOfInput);
    assert_eq!(tokens.len(), 8);
}

#[test]
fn test_tokenize_keyword_prefixes_are_identifiers() {
    let tokens = tokenize("lets fnord returning iff".to_string(), None);

    for (token, literal) in tokens.iter().zip(["lets", "fnord", "returning", "iff"]) {
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.literal, literal);
    }
    assert_eq!(lookup_identifier("let"), TokenKind::Let);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar _underscore CamelCase snake_case".to_string();
    let tokens = tokenize(source, Some("test.mk".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].literal, "CamelCase");
    assert_eq!(tokens[4].literal, "snake_case");
    assert_eq!(tokens[5].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_digits_split_identifiers() {
    // Digits are not part of an identifier run
    let tokens = tokenize("foo123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "123");
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 10 0 99999999999999999999".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "5");
    assert_eq!(tokens[1].literal, "10");
    assert_eq!(tokens[2].literal, "0");
    // No numeric conversion happens while scanning
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].literal, "99999999999999999999");
}

#[test]
fn test_tokenize_operators() {
    let source = "= + - ! * / < > == !=".to_string();
    let tokens = tokenize(source, None);

    let expected = [
        (TokenKind::Assign, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Bang, "!"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::LessThan, "<"),
        (TokenKind::GreaterThan, ">"),
        (TokenKind::Equal, "=="),
        (TokenKind::NotEqual, "!="),
        (TokenKind::EndOfInput, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_double_character_lookahead() {
    let tokens = tokenize("a==b!=c=!d".to_string(), None);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::NotEqual,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Bang,
            TokenKind::Identifier,
            TokenKind::EndOfInput,
        ]
    );

    // `===` scans as `==` followed by `=`
    let tokens = tokenize("===".to_string(), None);
    assert_eq!(tokens[0].kind, TokenKind::Equal);
    assert_eq!(tokens[1].kind, TokenKind::Assign);
}

#[test]
fn test_tokenize_trailing_assign_and_bang() {
    let tokens = tokenize("=".to_string(), None);
    assert_eq!(tokens[0].kind, TokenKind::Assign);
    assert_eq!(tokens[0].literal, "=");
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);

    let tokens = tokenize("!".to_string(), None);
    assert_eq!(tokens[0].kind, TokenKind::Bang);
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) { } , ;".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::LParen);
    assert_eq!(tokens[1].kind, TokenKind::RParen);
    assert_eq!(tokens[2].kind, TokenKind::LBrace);
    assert_eq!(tokens[3].kind, TokenKind::RBrace);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let five = 5;\nlet add = fn(x, y) {\n  x + y;\n};\nlet result = add(five, 10);"
        .to_string();
    let tokens = tokenize(source, None);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::LParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::RParen, ")"),
        (TokenKind::LBrace, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::RBrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assign, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::LParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Integer, "10"),
        (TokenKind::RParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EndOfInput, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (i, (token, (kind, literal))) in tokens.iter().zip(expected).enumerate() {
        assert_eq!(token.kind, kind, "token {} has the wrong kind", i);
        assert_eq!(token.literal, literal, "token {} has the wrong literal", i);
    }
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize("   \n\t  ".to_string(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
    assert_eq!(tokens[0].literal, "");
}

#[test]
fn test_tokenize_carriage_returns() {
    let tokens = tokenize("let\r\nx".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_illegal_byte() {
    let tokens = tokenize("@".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].literal, "@");
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
}

#[test]
fn test_tokenize_illegal_byte_does_not_stop_scanning() {
    let tokens = tokenize("let x = 5 % 2;".to_string(), None);

    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].literal, "%");
    assert_eq!(tokens[5].kind, TokenKind::Integer);
    assert_eq!(tokens[6].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_non_ascii_is_illegal_per_byte() {
    // `é` is two bytes in UTF-8
    let tokens = tokenize("é".to_string(), None);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[2].kind, TokenKind::EndOfInput);
}

#[test]
fn test_end_of_input_is_idempotent() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    let first = lexer.next_token();
    assert_eq!(first.kind, TokenKind::EndOfInput);
    for _ in 0..5 {
        assert_eq!(lexer.next_token(), first);
    }
}

#[test]
fn test_nul_byte_ends_input() {
    let tokens = tokenize("a\0b".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].literal, "a");
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let  xy != 10".to_string(), Some("test.mk".to_string()));

    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|t| (t.span.start.0, t.span.end.0))
        .collect();
    assert_eq!(spans, vec![(0, 3), (5, 7), (8, 10), (11, 13), (13, 13)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.mk");
}

#[test]
fn test_default_file_name() {
    let lexer = Lexer::new(String::new(), None);
    assert_eq!(lexer.file().as_str(), "shell");
}

#[test]
fn test_lexer_iterator_stops_before_end_of_input() {
    let lexer = Lexer::new("let x = 5;".to_string(), None);
    let kinds: Vec<TokenKind> = lexer.map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Integer,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let".to_string(), None);
    assert_eq!(tokens[0].to_string(), r#"{kind: Let, literal: "let"}"#);
}
