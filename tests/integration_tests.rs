//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser, into a program and its error list.

use monkey::{
    ast::{
        ast::{Expr, ExprType, Stmt, StmtType},
        expressions::{CallExpr, FunctionExpr, IfExpr},
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

const PROGRAM: &str = "
let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
-five * 5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
";

#[test]
fn test_tokenize_full_program() {
    let tokens = tokenize(PROGRAM.to_string(), Some("test.mk".to_string()));

    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Illegal));

    let operators: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Equal || t.kind == TokenKind::NotEqual)
        .map(|t| t.literal.as_str())
        .collect();
    assert_eq!(operators, vec!["==", "!="]);

    // Every literal is exactly the source text its span covers
    for token in &tokens {
        let start = token.span.start.0 as usize;
        let end = token.span.end.0 as usize;
        assert_eq!(&PROGRAM[start..end], token.literal);
    }
}

#[test]
fn test_tokenize_operator_soup() {
    let kinds: Vec<TokenKind> = tokenize("!-/*5;".to_string(), None)
        .iter()
        .map(|t| t.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Bang,
            TokenKind::Minus,
            TokenKind::Slash,
            TokenKind::Asterisk,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_parse_full_program() {
    let (program, errors) = parse(PROGRAM.to_string(), Some("test.mk".to_string()));

    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);

    let kinds: Vec<StmtType> = program.statements.iter().map(|s| s.get_stmt_type()).collect();
    assert_eq!(
        kinds,
        vec![
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
        ]
    );

    let add = program.statements[2].downcast_ref::<LetStmt>().unwrap();
    assert_eq!(add.name.value, "add");
    let function = add.value.downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.to_string(), "fn(x, y) { (x + y) }");

    let result = program.statements[3].downcast_ref::<LetStmt>().unwrap();
    let call = result.value.downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.to_string(), "add(five, ten)");

    assert_eq!(program.statements[4].to_string(), "((-five) * 5)");
    assert_eq!(program.statements[5].to_string(), "((5 < 10) > 5)");

    let if_stmt = program.statements[6].downcast_ref::<ExpressionStmt>().unwrap();
    assert_eq!(if_stmt.expression.get_expr_type(), ExprType::If);
    let if_expr = if_stmt.expression.downcast_ref::<IfExpr>().unwrap();
    let consequence = if_expr.consequence.body[0].downcast_ref::<ReturnStmt>().unwrap();
    assert_eq!(consequence.value.to_string(), "true");
    assert_eq!(
        if_expr.to_string(),
        "if (5 < 10) { return true; } else { return false; }"
    );

    assert_eq!(program.statements[7].to_string(), "(10 == 10)");
    assert_eq!(program.statements[8].to_string(), "(10 != 9)");
}

#[test]
fn test_parse_keeps_good_statements_around_bad_ones() {
    let source = "let a = 1;\nlet b 2;\nlet c = a + 1;\n@;\nreturn c;";
    let (program, errors) = parse(source.to_string(), Some("test.mk".to_string()));

    assert_eq!(program.to_string(), "let a = 1; let c = (a + 1); return c;");

    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            "expected next token to be Assign, got Integer instead",
            "no prefix parse function for Illegal found",
        ]
    );

    let rendered = render_error(&errors[1], source, "test.mk");
    assert!(rendered.contains("4 | @;"));
}

#[test]
fn test_parse_nested_functions() {
    let source = "let compose = fn(f, g) { fn(x) { g(f(x)) } };";
    let (program, errors) = parse(source.to_string(), None);

    assert!(errors.is_empty());
    assert_eq!(
        program.to_string(),
        "let compose = fn(f, g) { fn(x) { g(f(x)) } };"
    );

    let stmt = program.statements[0].downcast_ref::<LetStmt>().unwrap();
    assert_eq!(stmt.get_token().span.start.1.as_str(), "shell");
}
