use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fnv::FnvHashMap;

use crate::state::Signature;

/// Best priority seen for each layout. Owns no states, only their signatures.
#[derive(Debug, Default)]
pub(crate) struct Registry {
    best: FnvHashMap<Signature, u32>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn contains(&self, signature: &Signature) -> bool {
        self.best.contains_key(signature)
    }

    /// Records `signature` unless it's already known with an equal or better priority.
    pub(crate) fn should_admit(&mut self, signature: Signature, priority: u32) -> bool {
        match self.best.get_mut(&signature) {
            Some(best) if *best <= priority => false,
            Some(best) => {
                *best = priority;
                true
            }
            None => {
                self.best.insert(signature, priority);
                true
            }
        }
    }

    /// Unconditionally records the layout, keeping the better priority.
    pub(crate) fn mark(&mut self, signature: Signature, priority: u32) {
        let best = self.best.entry(signature).or_insert(priority);
        if priority < *best {
            *best = priority;
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.best.len()
    }
}

/// States waiting to be expanded, lowest heuristic first.
///
/// Ties are broken by insertion order. No path length is involved,
/// this is greedy best-first search, not A*.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<(u32, u64, usize)>>,
    pushed: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, state_id: usize, heuristic: u32) {
        self.heap.push(Reverse((heuristic, self.pushed, state_id)));
        self.pushed += 1;
    }

    pub(crate) fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, state_id))| state_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
