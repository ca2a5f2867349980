//! CLI argument parsing using clap, resolved into a runtime configuration

use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use slider_puzzle::SolverConfig;

use crate::CliError;

/// Optimal sliding-tile puzzle solver
#[derive(Parser, Debug)]
#[command(name = "slider-puzzle", about = "Solve an N x N sliding-tile puzzle with A*", version)]
pub struct Args {
    /// Board file: N followed by N² tiles, 0 for the blank. Reads stdin when omitted or "-"
    #[arg(conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Generate a random board of this dimension instead of reading one
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(2..))]
    pub random: Option<u16>,

    /// Length of the random walk from the goal used to scramble a generated board
    #[arg(long, default_value_t = 40, conflicts_with = "shuffle")]
    pub steps: usize,

    /// Generate a uniformly shuffled board instead of a random walk (may be unsolvable)
    #[arg(long, requires = "random")]
    pub shuffle: bool,

    /// Restrict shuffled boards to solvable ones
    #[arg(long, requires = "shuffle")]
    pub solvable: bool,

    /// Seed for board generation
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Give up after this many search iterations
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Quiet mode - only output the move count (-1 if unsolvable)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How a generated board is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    /// Random walk of the given length from the goal
    Scramble(usize),
    /// Uniform permutation, optionally restricted to solvable boards
    Shuffle { solvable: bool },
}

/// Where the initial board comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    File(PathBuf),
    Stdin,
    Random {
        size: usize,
        generation: Generation,
        seed: u64,
    },
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Initial board source
    pub source: BoardSource,
    /// Bounds forwarded to the solver
    pub solver: SolverConfig,
    /// Quiet mode
    pub quiet: bool,
    /// Default log level when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, picking a seed when none was given
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let source = match (args.random, args.file) {
            (Some(size), _) => {
                let generation = if args.shuffle {
                    Generation::Shuffle {
                        solvable: args.solvable,
                    }
                } else {
                    Generation::Scramble(args.steps)
                };
                BoardSource::Random {
                    size: usize::from(size),
                    generation,
                    seed: args.seed.unwrap_or_else(rand::random),
                }
            }
            (None, Some(path)) if path.as_os_str() != "-" => BoardSource::File(path),
            (None, _) => BoardSource::Stdin,
        };

        if args.max_expansions == Some(0) {
            return Err(CliError::Config(
                "--max-expansions must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            source,
            solver: SolverConfig {
                max_expansions: args.max_expansions,
            },
            quiet: args.quiet,
            log_level: level_for(args.verbose),
        })
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
