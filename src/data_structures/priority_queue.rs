use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over `(priority, node)` pairs, built on `BinaryHeap`
///
/// The smallest priority is popped first. Equal priorities are popped in
/// ascending node order, so extraction order is fully deterministic.
/// Decrease-key is not supported: callers push a new entry and skip stale
/// ones on pop.
#[derive(Debug, Clone)]
pub struct MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }
}

impl<V, P> MinQueue<V, P>
where
    V: Clone + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given priority
    pub fn push(&mut self, node: V, priority: P) {
        self.heap.push(Reverse((priority, node)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, node))| (node, priority))
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(&V, P)> {
        self.heap.peek().map(|Reverse((priority, node))| (node, *priority))
    }

    /// Removes every entry, stale ones included
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
