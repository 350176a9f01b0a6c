use std::{fs, io, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use monkey::repl::{self, ReplMode};
use tracing::Level;

/// monkey scans and parses Monkey source, from a file or line by line
#[derive(Debug, Parser)]
#[command(name = "monkey", author)]
struct MonkeyArgs {
    /// What to print for the input
    #[arg(short, long, value_enum, default_value_t = ReplMode::Tokens)]
    mode: ReplMode,

    /// Enable verbose logging
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Source file to process instead of starting the REPL
    #[arg()]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = MonkeyArgs::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match args.file {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

            let stdout = io::stdout();
            let ok = repl::run_source(&source, &file_name, &mut stdout.lock(), args.mode)?;
            if !ok {
                anyhow::bail!("{} has syntax errors", file_name);
            }
        }
        None => {
            let stdin = io::stdin();
            repl::start(stdin.lock(), io::stdout(), args.mode)?;
        }
    }

    Ok(())
}
