//! Prints the token stream of a document, one token per line.
//!
//! Reads the file named by the first argument, or stdin when there is none.
//! An optional second argument sets the maximum header level.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=markscan=trace cargo run -p markscan --example dump_tokens -- notes.md
//! ```
#![allow(missing_docs)]

use std::io::Read;

use markscan::{Scanner, ScannerOptions, TokenKind};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (name, input) = match args.next() {
        Some(path) => {
            let input = std::fs::read_to_string(&path)?;
            (path, input)
        }
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            ("<stdin>".to_owned(), input)
        }
    };
    let options = ScannerOptions {
        max_header_level: args.next().map(|s| s.parse()).transpose()?,
        ..Default::default()
    };

    let mut scanner = Scanner::with_options(name, &input, options);
    for (index, token) in scanner.by_ref().enumerate() {
        println!("{index:>4} {:<12} {token}", format!("{:?}", token.kind()));
        if token.kind() == TokenKind::Error {
            break;
        }
    }

    match scanner.error() {
        Some(error) => Err(error.clone().into()),
        None => Ok(()),
    }
}
