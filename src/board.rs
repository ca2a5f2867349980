use rand::{seq::SliceRandom, Rng};
use std::fmt;
use tracing::trace;

use crate::error::ParseError;

/// Direction a tile slides into the blank.
///
/// `Up` means the tile below the blank moves up, so the blank itself moves
/// one row down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Tile moves ordered so the blank goes up, down, left, right.
    pub const ALL: [Move; 4] = [Move::Down, Move::Up, Move::Right, Move::Left];

    /// Row and column offset applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Left => (0, 1),
            Move::Down => (-1, 0),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Left => "Left",
            Move::Down => "Down",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// An immutable N x N arrangement of tiles, `0` being the blank.
///
/// Every operation that changes the arrangement returns a new board. Equality
/// and hashing are structural over the dimension and the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<Vec<u32>>,
    blank: (usize, usize),
}

impl Board {
    /// Builds a board from a square grid without checking that the values form
    /// a permutation of `0..N²`.
    ///
    /// Boards built from a non-permutation produce meaningless heuristics but
    /// never panic. A grid without a `0` treats the bottom-right cell as blank.
    ///
    /// # Panics
    ///
    /// Panics if the grid is not square.
    pub fn new(tiles: Vec<Vec<u32>>) -> Self {
        let size = tiles.len();
        assert!(
            tiles.iter().all(|row| row.len() == size),
            "board grid must be square"
        );

        let corner = size.saturating_sub(1);
        let blank = locate_blank(&tiles).unwrap_or((corner, corner));
        Self { size, tiles, blank }
    }

    /// Builds a board after validating the grid: square, at least 2 x 2, and
    /// holding every value in `0..N²` exactly once.
    pub fn try_new(tiles: Vec<Vec<u32>>) -> Result<Self, ParseError> {
        let size = tiles.len();
        if size < 2 {
            return Err(ParseError::DimensionTooSmall(size));
        }
        if let Some((row, cells)) = tiles.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(ParseError::NotSquare {
                row,
                expected: size,
                actual: cells.len(),
            });
        }

        let cells = size * size;
        let mut seen = vec![false; cells];
        for &value in tiles.iter().flatten() {
            let index = value as usize;
            if index >= cells {
                return Err(ParseError::TileOutOfRange { value, max: cells - 1 });
            }
            if seen[index] {
                return Err(ParseError::DuplicateTile(value));
            }
            seen[index] = true;
        }

        Ok(Self::new(tiles))
    }

    /// The solved board of the given dimension: `1..N²` row-major, blank last.
    pub fn goal(size: usize) -> Self {
        let mut board = Vec::with_capacity(size);
        let mut value = 1;

        for i in 0..size {
            let mut row = Vec::with_capacity(size);
            for j in 0..size {
                if i == size - 1 && j == size - 1 {
                    row.push(0);
                } else {
                    row.push(value);
                    value += 1;
                }
            }
            board.push(row);
        }

        Self::new(board)
    }

    /// A board reached from the goal by a random walk of `steps` blank moves.
    ///
    /// The walk never immediately undoes its previous move, so the result is
    /// at most `steps` moves from the goal and always solvable.
    pub fn scramble<R: Rng + ?Sized>(size: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Self::goal(size);
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<Move> = Move::ALL
                .iter()
                .copied()
                .filter(|m| last.map_or(true, |l| *m != l.opposite()))
                .filter(|m| board.can_slide(*m))
                .collect();

            if let Some(&dir) = candidates.choose(rng) {
                trace!(%dir, "scramble step");
                board.apply_move(dir);
                last = Some(dir);
            }
        }

        board
    }

    /// A uniformly random permutation of the tiles. Half of these are unsolvable.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut flattened: Vec<u32> = (0..(size * size) as u32).collect();
        flattened.shuffle(rng);
        Self::from_flat(size, &flattened)
    }

    /// A uniformly random permutation restricted to the solvable half.
    pub fn shuffled_solvable<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        loop {
            let board = Self::shuffled(size, rng);
            if board.is_solvable_by_parity() {
                return board;
            }
        }
    }

    fn from_flat(size: usize, flattened: &[u32]) -> Self {
        let tiles = flattened.chunks(size).map(<[u32]>::to_vec).collect();
        Self::new(tiles)
    }

    pub fn dimension(&self) -> usize {
        self.size
    }

    /// Value at the given cell.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row][col]
    }

    /// Row and column of the blank.
    pub fn blank(&self) -> (usize, usize) {
        self.blank
    }

    /// Number of tiles, blank excluded, that are not on their goal cell.
    pub fn hamming(&self) -> usize {
        let mut misplaced = 0;
        for (i, row) in self.tiles.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0 && value as usize != i * self.size + j + 1 {
                    misplaced += 1;
                }
            }
        }
        misplaced
    }

    /// Sum of the grid distances of every tile from its goal cell.
    pub fn manhattan(&self) -> usize {
        let mut distance = 0;
        for (i, row) in self.tiles.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0 {
                    let target = value as usize - 1;
                    distance += i.abs_diff(target / self.size);
                    distance += j.abs_diff(target % self.size);
                }
            }
        }
        distance
    }

    pub fn is_goal(&self) -> bool {
        self.manhattan() == 0
    }

    /// The board with the two leftmost tiles of one row exchanged.
    ///
    /// Row 0 is used unless the blank sits in one of its first two cells, in
    /// which case row 1 is used. The twin always has the opposite solvability
    /// of `self`.
    pub fn twin(&self) -> Self {
        let row = if self.tiles[0][0] == 0 || self.tiles[0][1] == 0 {
            1
        } else {
            0
        };

        let mut tiles = self.tiles.clone();
        tiles[row].swap(0, 1);
        Self::new(tiles)
    }

    /// The board after sliding a tile in direction `dir`, or `None` when no
    /// tile sits on that side of the blank.
    pub fn slide(&self, dir: Move) -> Option<Self> {
        let mut next = self.clone();
        if next.apply_move(dir) {
            Some(next)
        } else {
            None
        }
    }

    /// Every board one slide away, blank moving up, down, left, right.
    pub fn neighbors(&self) -> Neighbors<'_> {
        Neighbors {
            board: self,
            pending: Move::ALL.iter(),
        }
    }

    /// Inversion parity test for solvability.
    ///
    /// For odd dimensions the puzzle is solvable iff the number of inversions
    /// is even. For even dimensions the blank's row joins the count.
    pub fn is_solvable_by_parity(&self) -> bool {
        let flattened: Vec<u32> = self.tiles.iter().flatten().copied().collect();
        let inversions = count_inversions(&flattened);

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + self.blank.0) % 2 == 1
        }
    }

    fn target(&self, dir: Move) -> Option<(usize, usize)> {
        let (dr, dc) = dir.as_offset();
        let row = self.blank.0.checked_add_signed(dr)?;
        let col = self.blank.1.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }

    fn can_slide(&self, dir: Move) -> bool {
        self.target(dir).is_some()
    }

    fn apply_move(&mut self, dir: Move) -> bool {
        let Some((row, col)) = self.target(dir) else {
            return false;
        };

        let (blank_row, blank_col) = self.blank;
        self.tiles[blank_row][blank_col] = self.tiles[row][col];
        self.tiles[row][col] = 0;
        self.blank = (row, col);
        true
    }
}

fn locate_blank(tiles: &[Vec<u32>]) -> Option<(usize, usize)> {
    tiles.iter().enumerate().find_map(|(i, row)| {
        row.iter().position(|&value| value == 0).map(|j| (i, j))
    })
}

fn count_inversions(flattened: &[u32]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

/// Single-pass iterator over the boards adjacent to a board.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    board: &'a Board,
    pending: std::slice::Iter<'static, Move>,
}

impl Iterator for Neighbors<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        for &dir in self.pending.by_ref() {
            if let Some(next) = self.board.slide(dir) {
                return Some(next);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.pending.len()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.size)?;
        for row in &self.tiles {
            for &val in row {
                write!(f, "{:2} ", val)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
