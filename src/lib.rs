//! Optimal solver for the N x N sliding-tile puzzle.
//!
//! [`Solver`] runs A* with the Manhattan heuristic on a [`Board`] and its
//! [`twin`](Board::twin) in lock-step. Whichever search reaches the goal first
//! tells whether the original board is solvable, and if it is, the search on
//! the original yields a shortest sequence of boards to the goal.
//!
//! ```
//! use slider_puzzle::{parse_board, Solver};
//!
//! let board = parse_board("3  0 1 3  4 2 5  7 8 6").unwrap();
//! let solver = Solver::new(board);
//! assert_eq!(solver.moves(), Some(4));
//! ```

pub mod board;
pub mod error;
pub mod frontier;
pub mod node;
pub mod parse;
pub mod solver;

pub use board::{Board, Move, Neighbors};
pub use error::{ParseError, SolveError};
pub use parse::{parse_board, read_board};
pub use solver::{SearchStats, Solution, Solver, SolverConfig};
