use crate::{
    nfa::{State, StateId, NFA},
    sparse_set::SparseSet,
};

/// A matcher that simulates a Thompson NFA against input
///
/// The NFA is only read. Every call to [`Matcher::is_match`] allocates its
/// own sets of active states, so one NFA can serve any number of matchers at
/// once.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

/// The states active at one position of the input.
///
/// `states` is kept flat: it only ever holds char and match states. Split
/// states are expanded into their targets as they are reached and only
/// recorded in `seen`, which stops any state from being visited twice in the
/// same step.
#[derive(Debug)]
struct ActiveSet {
    seen: SparseSet,
    states: Vec<StateId>,
}

impl ActiveSet {
    fn new(capacity: usize) -> Self {
        Self { seen: SparseSet::new(capacity), states: Vec::with_capacity(capacity) }
    }

    fn clear(&mut self) {
        self.seen.clear();
        self.states.clear();
    }

    fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &str) -> bool {
        let mut current = ActiveSet::new(self.nfa.len());
        let mut next = ActiveSet::new(self.nfa.len());
        let mut stack = Vec::new();

        self.add_state(&mut current, &mut stack, self.nfa.start());

        for ch in input.chars() {
            if current.is_empty() {
                break;
            }
            self.step(&current, ch, &mut next, &mut stack);
            trace!(
                "{:?}: {} active states, {} after",
                ch,
                current.states.len(),
                next.states.len()
            );
            std::mem::swap(&mut current, &mut next);
            next.clear();
        }

        current.seen.contains(self.nfa.match_id())
    }

    /// Follows the edge of every state in `current` that consumes `ch`.
    fn step(
        &self,
        current: &ActiveSet,
        ch: char,
        next: &mut ActiveSet,
        stack: &mut Vec<StateId>,
    ) {
        for &id in &current.states {
            if let State::Char { ch: want, next: out } = self.nfa.state(id) {
                if want == ch {
                    self.add_state(next, stack, out);
                }
            }
        }
    }

    /// Adds `id` to `set`, expanding split states into everything they reach
    /// without consuming input. Uses an explicit stack so long chains of
    /// alternatives can't overflow the call stack.
    fn add_state(
        &self,
        set: &mut ActiveSet,
        stack: &mut Vec<StateId>,
        id: StateId,
    ) {
        stack.push(id);
        while let Some(id) = stack.pop() {
            if !set.seen.insert(id) {
                continue;
            }
            match self.nfa.state(id) {
                State::Split { out1, out2 } => {
                    // Reversed so out1 is expanded first
                    stack.push(out2);
                    stack.push(out1);
                }
                State::Char { .. } | State::Match => set.states.push(id),
            }
        }
    }
}
