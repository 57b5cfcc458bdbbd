use std::{cmp::Ordering, collections::BinaryHeap};

use super::*;

struct FrontierEntry<T> {
    priority: Weight,
    seq: u64,
    item: T,
}

// Reversed so that `BinaryHeap` (a max-heap) pops the smallest priority first.
// Equal priorities pop in insertion order.
impl<T> Ord for FrontierEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for FrontierEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for FrontierEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for FrontierEntry<T> {}

/// A min-priority queue over `(item, priority)` pairs.
///
/// There is no decrease-key: callers push an item again with its improved priority and
/// skip stale entries when they are popped (lazy deletion). Ties between equal priorities
/// are broken by insertion order, which makes every algorithm built on top deterministic.
///
/// # Examples
/// ```
/// use wgraphs::utils::PriorityFrontier;
///
/// let mut frontier = PriorityFrontier::new();
/// frontier.push('a', 3.0);
/// frontier.push('b', 1.0);
/// frontier.push('c', 1.0);
///
/// assert_eq!(frontier.pop_min(), Some(('b', 1.0)));
/// assert_eq!(frontier.pop_min(), Some(('c', 1.0)));
/// assert_eq!(frontier.pop_min(), Some(('a', 3.0)));
/// assert_eq!(frontier.pop_min(), None);
/// assert_eq!(frontier.total_pushes(), 3);
/// ```
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<FrontierEntry<T>>,
    pushes: u64,
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            pushes: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
        }
    }

    /// Inserts an item with the given priority
    pub fn push(&mut self, item: T, priority: Weight) {
        self.heap.push(FrontierEntry {
            priority,
            seq: self.pushes,
            item,
        });
        self.pushes += 1;
    }

    /// Removes and returns the item with the smallest priority
    pub fn pop_min(&mut self) -> Option<(T, Weight)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek_min(&self) -> Option<(&T, Weight)> {
        self.heap.peek().map(|e| (&e.item, e.priority))
    }

    /// Number of entries currently stored (including stale ones)
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of pushes since creation
    pub fn total_pushes(&self) -> u64 {
        self.pushes
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
