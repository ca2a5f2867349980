//! Reading boards from the whitespace-separated text format.
//!
//! The first token is the dimension `N`, followed by `N²` tiles in row-major
//! order. Line layout is irrelevant.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseError;

/// Parses and validates a board.
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace().enumerate().map(|(position, token)| {
        token.parse::<u32>().map_err(|_| ParseError::InvalidToken {
            token: token.to_string(),
            position,
        })
    });

    let size = tokens.next().ok_or(ParseError::MissingDimension)?? as usize;
    if size < 2 {
        return Err(ParseError::DimensionTooSmall(size));
    }

    let values = tokens.collect::<Result<Vec<u32>, _>>()?;
    let expected = size * size;
    if values.len() != expected {
        return Err(ParseError::TileCount {
            expected,
            actual: values.len(),
        });
    }

    let tiles = values.chunks(size).map(<[u32]>::to_vec).collect();
    Board::try_new(tiles)
}

/// Reads and parses a board file.
pub fn read_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let input = fs::read_to_string(path)?;
    parse_board(&input)
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_board(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiline_input() {
        let board = parse_board("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.blank(), (0, 0));
        assert_eq!(board.tile(2, 2), 6);
    }

    #[test]
    fn layout_does_not_matter() {
        let a: Board = "2 1 2 3 0".parse().unwrap();
        let b: Board = "2\n1 2\n3 0\n".parse().unwrap();
        assert_eq!(a, b);
        assert!(a.is_goal());
    }

    #[test]
    fn display_output_parses_back() {
        let board = parse_board("3 8 1 3 4 0 2 7 6 5").unwrap();
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn reports_errors() {
        assert!(matches!(parse_board("  "), Err(ParseError::MissingDimension)));
        assert!(matches!(
            parse_board("2 1 x 3 0"),
            Err(ParseError::InvalidToken { position: 2, .. })
        ));
        assert!(matches!(
            parse_board("-3 1 2"),
            Err(ParseError::InvalidToken { position: 0, .. })
        ));
        assert!(matches!(parse_board("1 0"), Err(ParseError::DimensionTooSmall(1))));
        assert!(matches!(
            parse_board("2 1 2 3"),
            Err(ParseError::TileCount { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            parse_board("2 1 2 2 0"),
            Err(ParseError::DuplicateTile(2))
        ));
        assert!(matches!(
            parse_board("2 1 2 7 0"),
            Err(ParseError::TileOutOfRange { value: 7, .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            read_board("/nonexistent/board.txt"),
            Err(ParseError::Io(_))
        ));
    }
}
