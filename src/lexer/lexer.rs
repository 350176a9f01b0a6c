use std::rc::Rc;

use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Byte cursor over a source buffer, producing one token per call.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    /// Offset of `ch`
    position: usize,
    /// Offset of the byte after `ch`
    read_position: usize,
    /// Current byte, 0 once past the end
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let kind = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::Equal
            }
            b'=' => TokenKind::Assign,
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::NotEqual
            }
            b'!' => TokenKind::Bang,
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'/' => TokenKind::Slash,
            b'*' => TokenKind::Asterisk,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            0 => {
                // The cursor stays put so every later call yields the same token
                return MK_TOKEN!(
                    TokenKind::EndOfInput,
                    String::new(),
                    MK_SPAN!(start, start, &self.file)
                );
            }
            ch if is_letter(ch) => {
                let literal = self.read_run(&IDENTIFIER_PATTERN);
                return MK_TOKEN!(
                    lookup_identifier(&literal),
                    literal,
                    MK_SPAN!(start, self.position, &self.file)
                );
            }
            ch if ch.is_ascii_digit() => {
                let literal = self.read_run(&INTEGER_PATTERN);
                return MK_TOKEN!(
                    TokenKind::Integer,
                    literal,
                    MK_SPAN!(start, self.position, &self.file)
                );
            }
            ch => {
                tracing::debug!(byte = ch, position = start, "illegal byte in source");
                TokenKind::Illegal
            }
        };

        self.read_char();

        let literal = self.slice(start, self.position);
        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, &self.file))
    }

    fn read_char(&mut self) {
        self.ch = self.byte_at(self.read_position);
        self.position = self.read_position;
        if self.position < self.source.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.byte_at(self.read_position)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.source.as_bytes().get(offset).copied().unwrap_or(0)
    }

    /// Consumes the longest run matching `pattern` at the cursor.
    fn read_run(&mut self, pattern: &Regex) -> String {
        let start = self.position;
        let end = pattern
            .find(&self.source.as_bytes()[start..])
            .map_or(start, |found| start + found.end());

        self.read_position = end;
        self.read_char();

        self.slice(start, end)
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.source.as_bytes()[start..end]
            .iter()
            .map(|byte| *byte as char)
            .collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields tokens up to, but not including, `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// Scans the whole source, returning every token including the final `EndOfInput`.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
