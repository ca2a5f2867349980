//! Min-priority frontier of unexpanded search nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::node::SearchNode;

/// Heap entry ordered so that `BinaryHeap`'s max is the node of least priority.
#[derive(Debug)]
struct Entry(Rc<SearchNode>);

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.priority().cmp(&self.0.priority())
    }
}

/// Nodes waiting to be expanded, extracted lowest priority first.
///
/// Ties between equal priorities are broken arbitrarily.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node in O(log n).
    pub fn push(&mut self, node: Rc<SearchNode>) {
        self.heap.push(Entry(node));
    }

    /// Removes and returns a node of minimum priority.
    pub fn pop_min(&mut self) -> Option<Rc<SearchNode>> {
        self.heap.pop().map(|Entry(node)| node)
    }

    /// Priority of the node `pop_min` would return next.
    pub fn min_priority(&self) -> Option<usize> {
        self.heap.peek().map(|Entry(node)| node.priority())
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Move};

    #[test]
    fn empty_frontier_yields_none() {
        let mut frontier = Frontier::new();
        assert!(frontier.is_empty());
        assert!(frontier.pop_min().is_none());
        assert_eq!(frontier.min_priority(), None);
    }

    #[test]
    fn pops_in_priority_order() {
        let goal = Board::goal(3);
        let one = goal.slide(Move::Down).unwrap();
        let two = one.slide(Move::Down).unwrap();
        let three = two.slide(Move::Right).unwrap();

        let mut frontier = Frontier::new();
        for board in [two, goal, three, one] {
            frontier.push(SearchNode::root(board));
        }
        assert_eq!(frontier.len(), 4);

        let priorities: Vec<usize> = std::iter::from_fn(|| frontier.pop_min())
            .map(|node| node.priority())
            .collect();
        assert_eq!(priorities, vec![0, 1, 2, 3]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_priorities_all_come_out() {
        let goal = Board::goal(3);
        let a = goal.slide(Move::Down).unwrap();
        let b = goal.slide(Move::Right).unwrap();

        let mut frontier = Frontier::new();
        frontier.push(SearchNode::root(a.clone()));
        frontier.push(SearchNode::root(b.clone()));
        assert_eq!(frontier.min_priority(), Some(1));

        let mut popped = vec![
            frontier.pop_min().unwrap().board().clone(),
            frontier.pop_min().unwrap().board().clone(),
        ];
        popped.sort_by_key(|board| board.blank());
        let mut expected = vec![a, b];
        expected.sort_by_key(|board| board.blank());
        assert_eq!(popped, expected);
    }
}
