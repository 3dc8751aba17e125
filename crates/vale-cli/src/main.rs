use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vale_parser::TokenFilter;
use vale_scanner::{SyntaxKind, Token};

#[derive(Parser)]
#[command(name = "vale", about = "vale front-end tools", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the grammar-ready token stream for a source file
    Tokens {
        /// Source file to tokenize
        path: PathBuf,
        /// Emit the stream as a JSON array instead of one line per token
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Zero cost unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Tokens { path, json } => tokens(&path, json),
    }
}

fn tokens(path: &Path, json: bool) -> Result<()> {
    let source =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let mut filter = TokenFilter::from_source(&source);
    let mut out: Vec<Token> = Vec::new();
    loop {
        let token = filter
            .next_token()
            .with_context(|| format!("failed to tokenize {}", path.display()))?;
        let done = token.kind == SyntaxKind::EndOfFileToken;
        out.push(token);
        if done {
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for token in &out {
            println!("{:?} {:?} @ {}", token.kind, token.literal, token.span);
        }
    }
    Ok(())
}
