mod cli;
mod output;

use clap::Parser;
use crossterm::tty::IsTty;
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, Read};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Args, BoardSource, Config, Generation};
use output::OutputFormatter;
use slider_puzzle::{parse_board, read_board, Board, ParseError, SolveError, Solver};

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Board could not be read or validated
    #[error("Invalid board: {0}")]
    Parse(#[from] ParseError),

    /// Search stopped by a bound
    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logging(&config);

    let initial = load_board(&config.source)?;
    let solver = Solver::with_config(initial, &config.solver)?;

    let stdout = io::stdout();
    let styled = stdout.is_tty();
    let mut formatter = OutputFormatter::new(stdout.lock(), styled);
    if config.quiet {
        formatter.write_moves(&solver)?;
    } else {
        formatter.write_solution(&solver)?;
    }

    let stats = solver.stats();
    info!(
        iterations = stats.iterations,
        expanded = stats.expanded,
        generated = stats.generated,
        pruned = stats.pruned,
        "search finished"
    );
    Ok(())
}

// Logs go to stderr so stdout carries only the solution format.
fn init_logging(config: &Config) {
    let filter = EnvFilter::builder()
        .with_default_directive(config.log_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_board(source: &BoardSource) -> Result<Board, CliError> {
    let board = match source {
        BoardSource::File(path) => read_board(path)?,
        BoardSource::Stdin => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            parse_board(&input)?
        }
        BoardSource::Random {
            size,
            generation,
            seed,
        } => {
            let mut rng = StdRng::seed_from_u64(*seed);
            let board = match generation {
                Generation::Scramble(steps) => Board::scramble(*size, *steps, &mut rng),
                Generation::Shuffle { solvable: true } => Board::shuffled_solvable(*size, &mut rng),
                Generation::Shuffle { solvable: false } => Board::shuffled(*size, &mut rng),
            };
            info!(seed, ?generation, "generated board\n{}", board);
            board
        }
    };

    Ok(board)
}
