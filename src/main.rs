//! Terminal tic-tac-toe runner (default binary).
//!
//! Wires the interactive session to locked stdin/stdout. Tracing goes to
//! stderr (filter via `RUST_LOG`) so the grid output stays clean.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use term_tictactoe::term::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
