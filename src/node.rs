use std::rc::Rc;

use crate::board::Board;

/// A node of the implicit A* search tree.
///
/// Children hold a shared link to their parent and parents know nothing of
/// their children, so the node set is a tree and a branch is freed as soon as
/// neither the frontier nor a descendant refers to it.
#[derive(Debug)]
pub struct SearchNode {
    board: Board,
    parent: Option<Rc<SearchNode>>,
    moves: usize,
    // Cached on construction; the frontier reads it on every comparison.
    manhattan: usize,
}

impl SearchNode {
    /// Root of a search: zero moves, no parent.
    pub fn root(board: Board) -> Rc<Self> {
        let manhattan = board.manhattan();
        Rc::new(Self {
            board,
            parent: None,
            moves: 0,
            manhattan,
        })
    }

    /// A node one move deeper than `parent`.
    pub fn child(board: Board, parent: &Rc<SearchNode>) -> Rc<Self> {
        let manhattan = board.manhattan();
        Rc::new(Self {
            board,
            parent: Some(Rc::clone(parent)),
            moves: parent.moves + 1,
            manhattan,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<&Rc<SearchNode>> {
        self.parent.as_ref()
    }

    /// Moves taken from the root to reach this node.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// A* cost: moves so far plus the Manhattan estimate of moves remaining.
    pub fn priority(&self) -> usize {
        self.moves + self.manhattan
    }

    /// Boards from the root down to this node.
    pub fn path(&self) -> Vec<Board> {
        let mut boards = Vec::with_capacity(self.moves + 1);
        boards.push(self.board.clone());

        let mut curr = self.parent.as_deref();
        while let Some(node) = curr {
            boards.push(node.board.clone());
            curr = node.parent.as_deref();
        }

        boards.reverse();
        boards
    }
}
