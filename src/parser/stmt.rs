use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    tracing::trace!(kind = %parser.current_token_kind(), "parsing statement");

    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = IdentifierExpr {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assign)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parse_stmt_end(parser)?;

    Ok(StmtWrapper::new(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest)?;
    parse_stmt_end(parser)?;

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.advance();

    let mut body = vec![];
    while !parser.current_token_is(TokenKind::RBrace) {
        if parser.current_token_is(TokenKind::EndOfInput) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    received: TokenKind::EndOfInput,
                },
                parser.get_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt { token, body })
}

/// `;` closes a statement, and may only be left out right before `}` or end of input.
fn parse_stmt_end(parser: &mut Parser) -> Result<(), Error> {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
        return Ok(());
    }

    if parser
        .peek_token()
        .is_one_of_many(&[TokenKind::RBrace, TokenKind::EndOfInput])
    {
        return Ok(());
    }

    Err(parser.peek_error(TokenKind::Semicolon))
}
