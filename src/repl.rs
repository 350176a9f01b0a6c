//! Line-oriented front end over the lexer and parser.

use std::io::{self, BufRead, Write};

use clap::ValueEnum;

use crate::{lexer::lexer::Lexer, parser::parser::parse, render_error};

pub const PROMPT: &str = ">> ";

/// What the front end prints for each piece of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReplMode {
    /// Every token, one per line
    #[default]
    Tokens,
    /// The parsed program, or its syntax errors
    Ast,
}

/// Reads lines from `input` until EOF, printing the result of each to `output`.
pub fn start<R: BufRead, W: Write>(mut input: R, mut output: W, mode: ReplMode) -> io::Result<()> {
    tracing::debug!(?mode, "starting repl");

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim_end_matches(|c| c == '\n' || c == '\r');
        run_source(source, "shell", &mut output, mode)?;
    }
}

/// Processes one piece of source in the given mode.
///
/// Returns `false` if the source had syntax errors. Token mode never fails.
pub fn run_source<W: Write>(
    source: &str,
    file: &str,
    output: &mut W,
    mode: ReplMode,
) -> io::Result<bool> {
    match mode {
        ReplMode::Tokens => {
            for token in Lexer::new(source.to_string(), Some(file.to_string())) {
                writeln!(output, "{}", token)?;
            }
            Ok(true)
        }
        ReplMode::Ast => {
            let (program, errors) = parse(source.to_string(), Some(file.to_string()));

            if errors.is_empty() {
                writeln!(output, "{}", program)?;
                return Ok(true);
            }

            for error in &errors {
                write!(output, "{}", render_error(error, source, file))?;
            }
            Ok(false)
        }
    }
}
