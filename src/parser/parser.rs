//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from a [`Lexer`] on demand and keeps exactly two of them: the token
//! being parsed and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by the leading keyword
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How deeply expressions and blocks may nest before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Syntax errors do not stop the parse. Each one discards the statement it
/// occurred in and is kept, in order, for [`Parser::errors`].
pub struct Parser {
    /// Source of tokens, read one at a time
    lexer: Lexer,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Errors recorded so far, in source order
    errors: Vec<Error>,
    /// Unclosed `{` among the tokens already passed in this statement
    brace_depth: usize,
    /// Expressions and blocks currently being parsed
    nesting_depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over the given lexer.
    ///
    /// Reads two tokens to fill `current_token` and `peek_token`, then
    /// registers every statement, prefix and infix handler.
    pub fn new(mut lexer: Lexer) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            brace_depth: 0,
            nesting_depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        match self.current_token.kind {
            TokenKind::LBrace => self.brace_depth += 1,
            TokenKind::RBrace => self.brace_depth = self.brace_depth.saturating_sub(1),
            _ => {}
        }

        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek_token, next);
        mem::replace(&mut self.current_token, peek)
    }

    /// Advances only if the lookahead token is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error naming the
    /// expected kind and the kind actually found.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Ok(self.current_token.clone())
        } else {
            Err(self.peek_error(expected_kind))
        }
    }

    /// Builds the error for a lookahead token that is not `expected_kind`.
    pub fn peek_error(&self, expected_kind: TokenKind) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                received: self.peek_token.kind,
            },
            self.peek_token.span.start.clone(),
        )
    }

    /// Binding power of the lookahead token, `Lowest` if it is not an operator.
    pub fn peek_precedence(&self) -> BindingPower {
        self.binding_power_of(self.peek_token.kind)
    }

    /// Binding power of the current token, `Lowest` if it is not an operator.
    pub fn current_precedence(&self) -> BindingPower {
        self.binding_power_of(self.current_token.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Runs `parse_fn` one nesting level deeper.
    ///
    /// Fails with `NestingTooDeep` instead of recursing past [`MAX_NESTING_DEPTH`].
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.nesting_depth += 1;
        let result = parse_fn(self);
        self.nesting_depth -= 1;

        result
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token.span.start.clone()
    }

    /// Parses statements until the end of input.
    ///
    /// A statement that fails to parse contributes nothing to the program;
    /// its error is recorded and parsing resumes after the next `;` outside
    /// of any block the statement opened.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EndOfInput) {
            self.brace_depth = 0;

            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    tracing::debug!(%error, position = error.get_position().0, "discarding statement");
                    self.errors.push(error);
                    self.synchronize();
                }
            }
            self.advance();
        }

        program
    }

    /// Errors recorded so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    fn synchronize(&mut self) {
        while !self.current_token_is(TokenKind::EndOfInput)
            && !(self.current_token_is(TokenKind::Semicolon) && self.brace_depth == 0)
        {
            self.advance();
        }
    }
}

/// Parses source text into a program.
///
/// This is the main entry point for parsing.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name used in token positions, `"shell"` when absent
///
/// # Returns
///
/// A tuple containing:
/// - The Program built from every statement that parsed
/// - Every syntax error found, in source order
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
