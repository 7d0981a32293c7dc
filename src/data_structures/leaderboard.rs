use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// A max-ordered collection of scores, drained highest first.
///
/// Each score carries the index of the candidate it belongs to. Equal scores
/// come out with the larger index first; callers should not rely on it.
#[derive(Debug, Default, Clone)]
pub struct Leaderboard {
    heap: BinaryHeap<(OrderedFloat<f64>, usize)>,
}

impl Leaderboard {
    /// Creates an empty leaderboard
    pub fn new() -> Self {
        Leaderboard {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty leaderboard with room for `capacity` scores
    pub fn with_capacity(capacity: usize) -> Self {
        Leaderboard {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Records the score of candidate `index`
    pub fn push(&mut self, index: usize, score: f64) {
        self.heap.push((OrderedFloat(score), index));
    }

    /// Removes and returns the highest `(index, score)` entry
    pub fn pop(&mut self) -> Option<(usize, f64)> {
        self.heap.pop().map(|(score, index)| (index, score.into_inner()))
    }

    /// Returns the highest entry without removing it
    pub fn peek(&self) -> Option<(usize, f64)> {
        self.heap.peek().map(|(score, index)| (*index, score.into_inner()))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drains every entry, highest score first
    pub fn drain_descending(&mut self) -> Vec<(usize, f64)> {
        let mut entries = Vec::with_capacity(self.heap.len());
        while let Some(entry) = self.pop() {
            entries.push(entry);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drains_highest_first() {
        let mut board = Leaderboard::new();
        board.push(0, 83.3);
        board.push(1, 50.0);
        board.push(2, 100.0);
        board.push(3, 41.6);

        assert_eq!(board.peek(), Some((2, 100.0)));
        let scores: Vec<f64> = board.drain_descending().into_iter().map(|(_, s)| s).collect();
        assert_eq!(scores, vec![100.0, 83.3, 50.0, 41.6]);
        assert!(board.is_empty());
    }

    #[test]
    fn keeps_equal_scores() {
        let mut board = Leaderboard::with_capacity(2);
        board.push(0, 50.0);
        board.push(1, 50.0);
        assert_eq!(board.len(), 2);

        let mut indices: Vec<usize> = board.drain_descending().into_iter().map(|(i, _)| i).collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1]);
    }
}
