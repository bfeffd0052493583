use crate::nfa::StateId;

/// A set of state IDs with constant time insertion, membership and clearing.
///
/// `dense` holds the members in insertion order. `sparse[id]` is the index of
/// `id` in `dense`, which is only meaningful if it points back at `id`.
#[derive(Debug, Clone)]
pub(crate) struct SparseSet {
    len: usize,
    dense: Vec<StateId>,
    sparse: Vec<usize>,
}

impl SparseSet {
    /// Creates a set that can hold the IDs `0..capacity`.
    pub(crate) fn new(capacity: usize) -> Self {
        Self { len: 0, dense: vec![0; capacity], sparse: vec![0; capacity] }
    }

    /// Inserts `id`, returning false if it was already present.
    pub(crate) fn insert(&mut self, id: StateId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.dense[self.len] = id;
        self.sparse[id] = self.len;
        self.len += 1;
        true
    }

    pub(crate) fn contains(&self, id: StateId) -> bool {
        let index = self.sparse[id];
        index < self.len && self.dense[index] == id
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}
