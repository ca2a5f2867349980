//! Printing solver results in the plain text output format

use crossterm::style::Stylize;
use std::io::{self, Write};

use slider_puzzle::Solver;

const UNSOLVABLE: &str = "No solution possible";

/// Writes a solver result, styling the header lines when `styled` is set
pub struct OutputFormatter<W: Write> {
    out: W,
    styled: bool,
}

impl<W: Write> OutputFormatter<W> {
    pub fn new(out: W, styled: bool) -> Self {
        Self { out, styled }
    }

    /// Move count header followed by every board of the solution, or the
    /// unsolvable message
    pub fn write_solution(&mut self, solver: &Solver) -> io::Result<()> {
        let Some(solution) = solver.solution() else {
            self.header(UNSOLVABLE.to_string(), false)?;
            return self.out.flush();
        };

        let moves = solver.moves().unwrap_or_default();
        self.header(format!("Minimum number of moves = {}", moves), true)?;
        for board in solution {
            writeln!(self.out, "{}", board)?;
        }
        self.out.flush()
    }

    /// Only the move count, `-1` when unsolvable
    pub fn write_moves(&mut self, solver: &Solver) -> io::Result<()> {
        match solver.moves() {
            Some(moves) => writeln!(self.out, "{}", moves)?,
            None => writeln!(self.out, "-1")?,
        }
        self.out.flush()
    }

    fn header(&mut self, line: String, solved: bool) -> io::Result<()> {
        if !self.styled {
            return writeln!(self.out, "{}", line);
        }
        if solved {
            writeln!(self.out, "{}", line.as_str().bold().green())
        } else {
            writeln!(self.out, "{}", line.as_str().bold().red())
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slider_puzzle::{parse_board, Board};

    fn render(input: &str, quiet: bool) -> String {
        let solver = Solver::new(parse_board(input).unwrap());
        let mut formatter = OutputFormatter::new(Vec::new(), false);
        if quiet {
            formatter.write_moves(&solver).unwrap();
        } else {
            formatter.write_solution(&solver).unwrap();
        }
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn prints_every_board_after_header() {
        let text = render("2  1 2  0 3", false);
        assert_eq!(
            text,
            "Minimum number of moves = 1\n2\n 1  2 \n 0  3 \n\n2\n 1  2 \n 3  0 \n\n"
        );
    }

    #[test]
    fn prints_unsolvable_message() {
        assert_eq!(render("3 1 2 3 4 5 6 8 7 0", false), "No solution possible\n");
    }

    #[test]
    fn quiet_prints_only_moves() {
        assert_eq!(render("3 0 1 3 4 2 5 7 8 6", true), "4\n");
        assert_eq!(render("3 1 2 3 4 5 6 8 7 0", true), "-1\n");
    }

    #[test]
    fn styled_output_keeps_text() {
        let solver = Solver::new(Board::goal(2));
        let mut formatter = OutputFormatter::new(Vec::new(), true);
        formatter.write_solution(&solver).unwrap();
        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(text.contains("Minimum number of moves = 0"));
        assert!(text.ends_with("2\n 1  2 \n 3  0 \n\n"));
    }
}
