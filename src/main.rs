use std::io;

use chess_system::chess::{ChessMatch, MovePolicy};
use chess_system::shell::Shell;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Plays a match on the terminal: enter the source and the target square of
/// each move in chess notation (e.g. `c2` then `c5`).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Only accept moves to the piece's legal destinations.
    #[arg(long)]
    strict: bool,
    /// Log every move to stderr. `RUST_LOG` takes precedence when set.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if config.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
    chess_system::print_system_info();
    let policy = if config.strict {
        MovePolicy::Strict
    } else {
        MovePolicy::Permissive
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Shell::new(ChessMatch::with_policy(policy), &mut input, &mut output).run()
}
