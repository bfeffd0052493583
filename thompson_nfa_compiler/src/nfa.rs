/// A state ID in the NFA
pub type StateId = usize;

/// Target of an outgoing edge that has not been wired yet.
const UNPATCHED: StateId = StateId::MAX;

/// A Thompson NFA state
///
/// States live in the arena owned by [`NFA`] and point at each other by
/// [`StateId`]. Several states may point at the same successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Consumes `ch` and moves on to `next`
    Char { ch: char, next: StateId },
    /// Moves to both `out1` and `out2` without consuming input
    Split { out1: StateId, out2: StateId },
    /// Match state (accepting)
    Match,
}

/// Fragment of an NFA under construction: a start state and the states whose
/// outgoing edge still dangles.
///
/// Only [`State::Char`] states are ever left dangling, since split states are
/// wired to both alternatives when they are created.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub start: StateId,
    pub outs: Vec<StateId>,
}

/// A Thompson NFA
///
/// Once returned by the [`Compiler`](crate::Compiler), an NFA is never
/// modified again and can be shared freely between matchers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    /// All states in the NFA
    states: Vec<State>,
    /// Starting state
    start: StateId,
    /// The single accepting state
    match_id: StateId,
}

impl NFA {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
            start: UNPATCHED,
            match_id: UNPATCHED,
        }
    }

    fn add_state(&mut self, state: State) -> StateId {
        let id = self.states.len();
        self.states.push(state);
        id
    }

    /// Adds a state consuming `ch` whose outgoing edge dangles.
    pub(crate) fn char_state(&mut self, ch: char) -> StateId {
        self.add_state(State::Char { ch, next: UNPATCHED })
    }

    pub(crate) fn split(&mut self, out1: StateId, out2: StateId) -> StateId {
        self.add_state(State::Split { out1, out2 })
    }

    pub(crate) fn match_state(&mut self) -> StateId {
        let id = self.add_state(State::Match);
        self.match_id = id;
        id
    }

    pub(crate) fn set_start(&mut self, start: StateId) {
        self.start = start;
    }

    /// Hooks up the dangling edges of `outs` to `target`.
    pub(crate) fn patch(&mut self, outs: &[StateId], target: StateId) {
        for &id in outs {
            if let Some(State::Char { next, .. }) = self.states.get_mut(id) {
                *next = target;
            }
        }
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn match_id(&self) -> StateId {
        self.match_id
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the state with the given ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this NFA.
    pub fn state(&self, id: StateId) -> State {
        self.states[id]
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Checks the shape of a finished automaton: every edge points at a
    /// state of this NFA and there is exactly one match state.
    pub fn is_well_formed(&self) -> bool {
        let len = self.states.len();
        let valid = |id: StateId| id < len;
        let mut matches = 0;

        for state in &self.states {
            match *state {
                State::Char { next, .. } if !valid(next) => return false,
                State::Split { out1, out2 } if !valid(out1) || !valid(out2) => {
                    return false
                }
                State::Match => matches += 1,
                _ => {}
            }
        }

        matches == 1
            && valid(self.start)
            && self.states.get(self.match_id) == Some(&State::Match)
    }
}
