//! Lexical analysis module.
//!
//! This module contains the lexer (scanner) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-by-byte scanning with one character of lookahead
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking for error reporting
//! - Whitespace skipping and illegal byte reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
