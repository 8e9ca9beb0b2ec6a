//! Fixed-capacity sliding window of samples.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Keeps the most recent `capacity` samples; pushing onto a full window
/// drops the oldest one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedHistory {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl BoundedHistory {
    /// Create an empty window. A zero capacity is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full.
    pub fn push(&mut self, sample: u64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Samples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().copied()
    }

    /// Samples as a vector, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_within_capacity() {
        let mut history = BoundedHistory::new(3);
        history.push(1);
        history.push(2);

        assert_eq!(history.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_drops_oldest_first() {
        let mut history = BoundedHistory::new(3);
        for sample in 1..=5 {
            history.push(sample);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.to_vec(), vec![3, 4, 5]);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut history = BoundedHistory::new(0);
        history.push(9);
        history.push(10);

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.to_vec(), vec![10]);
    }

    #[test]
    fn test_clear() {
        let mut history = BoundedHistory::new(2);
        history.push(1);
        history.clear();

        assert!(history.is_empty());
    }
}
