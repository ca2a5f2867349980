//! A* search over the original board and its twin in lock-step.
//!
//! Exactly one of a board and its [`twin`](Board::twin) can reach the goal, so
//! running both searches side by side and stopping at the first goal decides
//! solvability without a separate parity computation. Each iteration advances
//! each track by one extract-and-expand cycle.
//!
//! Expansion skips only the neighbor equal to the node's parent board. There
//! is no closed set: longer cycles are re-expanded, which the consistent
//! Manhattan heuristic tolerates without losing optimality.

use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::SolveError;
use crate::frontier::Frontier;
use crate::node::SearchNode;

const PROGRESS_INTERVAL: usize = 10_000;

/// Caller-imposed bounds on a search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum loop iterations (one expansion per track each) before giving up.
    pub max_expansions: Option<usize>,
}

impl SolverConfig {
    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
        }
    }
}

/// Counters collected over both tracks of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Lock-step iterations of the main loop.
    pub iterations: usize,
    /// Nodes taken off a frontier and expanded.
    pub expanded: usize,
    /// Child nodes pushed onto a frontier.
    pub generated: usize,
    /// Neighbors skipped because they undo the previous move.
    pub pruned: usize,
}

/// One A* search: its frontier and the node most recently extracted from it.
struct Track {
    frontier: Frontier,
    current: Rc<SearchNode>,
}

impl Track {
    fn seed(board: Board) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(SearchNode::root(board));
        let current = next_node(&mut frontier);
        Self { frontier, current }
    }

    fn at_goal(&self) -> bool {
        self.current.board().is_goal()
    }

    /// Expands the current node into the frontier and extracts the next one.
    fn advance(&mut self, stats: &mut SearchStats) {
        let curr = &self.current;
        let previous = curr.parent().map(|p| p.board());

        for neighbor in curr.board().neighbors() {
            if previous == Some(&neighbor) {
                stats.pruned += 1;
                continue;
            }
            self.frontier.push(SearchNode::child(neighbor, curr));
            stats.generated += 1;
        }
        stats.expanded += 1;

        self.current = next_node(&mut self.frontier);
    }
}

// Every expansion pushes at least one child, so the frontier only drains if
// expansion itself is broken.
fn next_node(frontier: &mut Frontier) -> Rc<SearchNode> {
    match frontier.pop_min() {
        Some(node) => node,
        None => panic!("search frontier drained; expansion must always refill it"),
    }
}

/// The solved outcome for one initial board.
///
/// The whole search runs during construction; the query methods only read
/// the stored result.
#[derive(Debug)]
pub struct Solver {
    goal: Option<Rc<SearchNode>>,
    stats: SearchStats,
}

impl Solver {
    /// Solves `initial` with no bound on the search.
    ///
    /// # Panics
    ///
    /// Panics if a frontier is ever empty when a node must be extracted, which
    /// indicates a defect in expansion rather than a property of the input.
    pub fn new(initial: Board) -> Self {
        match Self::search(initial, None) {
            Ok(solver) => solver,
            Err(SolveError::ExpansionLimit { .. }) => {
                unreachable!("unbounded search cannot hit an expansion limit")
            }
        }
    }

    /// Solves `initial`, giving up once `config.max_expansions` iterations
    /// pass without either track reaching its goal.
    pub fn with_config(initial: Board, config: &SolverConfig) -> Result<Self, SolveError> {
        Self::search(initial, config.max_expansions)
    }

    fn search(initial: Board, limit: Option<usize>) -> Result<Self, SolveError> {
        debug!(
            dimension = initial.dimension(),
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
            "starting search"
        );

        let mut stats = SearchStats::default();
        let mut twin = Track::seed(initial.twin());
        let mut original = Track::seed(initial);

        while !original.at_goal() && !twin.at_goal() {
            if let Some(limit) = limit {
                if stats.iterations >= limit {
                    debug!(limit, ?stats, "expansion limit reached");
                    return Err(SolveError::ExpansionLimit { limit, stats });
                }
            }

            original.advance(&mut stats);
            twin.advance(&mut stats);
            stats.iterations += 1;

            if stats.iterations % PROGRESS_INTERVAL == 0 {
                trace!(
                    iterations = stats.iterations,
                    frontier = original.frontier.len(),
                    twin_frontier = twin.frontier.len(),
                    best_priority = ?original.frontier.min_priority(),
                    "search progress"
                );
            }
        }

        let goal = if twin.at_goal() {
            None
        } else {
            Some(original.current)
        };

        match &goal {
            Some(node) => info!(
                moves = node.moves(),
                iterations = stats.iterations,
                expanded = stats.expanded,
                generated = stats.generated,
                "solution found"
            ),
            None => info!(iterations = stats.iterations, "board is unsolvable"),
        }

        Ok(Self { goal, stats })
    }

    pub fn is_solvable(&self) -> bool {
        self.goal.is_some()
    }

    /// Minimum number of moves to the goal, `None` when unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.goal.as_ref().map(|node| node.moves())
    }

    /// Boards of a shortest solution, initial board first and goal last.
    /// `None` when unsolvable.
    pub fn solution(&self) -> Option<Solution> {
        self.goal.as_ref().map(|node| Solution {
            boards: node.path().into_iter(),
        })
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Single-pass iterator over the boards of a solution.
#[derive(Debug, Clone)]
pub struct Solution {
    boards: std::vec::IntoIter<Board>,
}

impl Iterator for Solution {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.boards.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.boards.size_hint()
    }
}

impl ExactSizeIterator for Solution {}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    #[test]
    fn goal_board_needs_no_moves() {
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(0));
        let solution: Vec<Board> = solver.solution().unwrap().collect();
        assert_eq!(solution, vec![Board::goal(3)]);
        assert_eq!(solver.stats().iterations, 0);
    }

    #[test]
    fn classic_unsolvable_instance() {
        let solver = Solver::new(board(&[&[1, 2, 3], &[4, 5, 6], &[8, 7, 0]]));
        assert!(!solver.is_solvable());
        assert_eq!(solver.moves(), None);
        assert!(solver.solution().is_none());
    }

    #[test]
    fn worked_example_is_solved_optimally() {
        let initial = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        let solver = Solver::new(initial.clone());
        assert_eq!(solver.moves(), Some(4));

        let solution: Vec<Board> = solver.solution().unwrap().collect();
        assert_eq!(solution.len(), 5);
        assert_eq!(solution.first(), Some(&initial));
        assert!(solution.last().unwrap().is_goal());
        for pair in solution.windows(2) {
            assert!(pair[0].neighbors().any(|n| n == pair[1]));
        }
    }

    #[test]
    fn queries_are_idempotent() {
        let solver = Solver::new(board(&[&[1, 2, 3], &[0, 4, 6], &[7, 5, 8]]));
        assert_eq!(solver.moves(), solver.moves());
        let first: Vec<Board> = solver.solution().unwrap().collect();
        let second: Vec<Board> = solver.solution().unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(solver.solution().unwrap().len(), first.len());
    }

    #[test]
    fn two_by_two_classes() {
        let solvable = board(&[&[0, 1], &[3, 2]]);
        let solver = Solver::new(solvable.clone());
        assert!(solver.is_solvable());
        assert_eq!(solver.moves(), Some(2));

        let unsolvable = Solver::new(solvable.twin());
        assert!(!unsolvable.is_solvable());
        assert_eq!(unsolvable.moves(), None);
    }

    #[test]
    fn expansion_limit_is_reported() {
        let initial = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        let result = Solver::with_config(initial.clone(), &SolverConfig::with_max_expansions(1));
        match result {
            Err(SolveError::ExpansionLimit { limit, stats }) => {
                assert_eq!(limit, 1);
                assert_eq!(stats.iterations, 1);
            }
            other => panic!("expected expansion limit, got {:?}", other),
        }

        let bounded = Solver::with_config(initial.clone(), &SolverConfig::default()).unwrap();
        assert!(bounded.is_solvable());
        assert_eq!(bounded.moves(), Solver::new(initial).moves());
    }

    #[test]
    fn reversal_pruning_is_counted() {
        let initial = board(&[&[1, 2, 3], &[4, 0, 6], &[7, 5, 8]]);
        let solver = Solver::new(initial);
        let stats = solver.stats();
        assert_eq!(solver.moves(), Some(2));
        assert!(stats.pruned > 0);
        assert_eq!(stats.expanded, stats.iterations * 2);
    }
}
