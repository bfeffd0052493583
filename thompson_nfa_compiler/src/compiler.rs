use crate::{
    nfa::{Fragment, NFA},
    postfix::postfix,
    preprocess::preprocess,
    token::{render, Operator, PostfixToken},
    CompileError, CompileResult,
};

/// Default upper bound on the number of states in a compiled NFA.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;

/// Compiler that turns a pattern into a Thompson NFA
#[derive(Debug, Clone)]
pub struct Compiler {
    size_limit: usize,
}

impl Compiler {
    /// Create a new compiler
    pub fn new() -> Self {
        Self { size_limit: DEFAULT_SIZE_LIMIT }
    }

    /// Sets the maximum number of states the compiled NFA may have.
    pub fn size_limit(mut self, limit: usize) -> Self {
        self.size_limit = limit;
        self
    }

    /// Compile `pattern` to a Thompson NFA
    ///
    /// Either the whole pattern compiles or an error is returned; no partial
    /// automaton is ever produced.
    pub fn compile(&self, pattern: &str) -> CompileResult<NFA> {
        let tokens = preprocess(pattern)?;
        let postfix = postfix(&tokens)?;
        debug!("pattern {:?} in postfix: {}", pattern, render(&postfix));
        let nfa = self.build(&postfix)?;
        debug!("pattern {:?} compiled to {} states", pattern, nfa.len());
        Ok(nfa)
    }

    /// Builds an NFA from a postfix stream using a stack of fragments.
    ///
    /// The stream is expected to be the output of
    /// [`postfix`](crate::postfix::postfix) for a preprocessed pattern. A
    /// stream with missing or extra operands is rejected with
    /// [`CompileError::Internal`].
    pub fn build(&self, postfix: &[PostfixToken]) -> CompileResult<NFA> {
        // One state per literal and per alternation, plus the match state.
        let states = postfix
            .iter()
            .filter(|token| **token != PostfixToken::Operator(Operator::Concat))
            .count()
            + 1;
        if states > self.size_limit {
            return Err(CompileError::TooComplex { limit: self.size_limit });
        }

        let mut nfa = NFA::with_capacity(states);
        let mut stack: Vec<Fragment> = Vec::with_capacity(postfix.len());

        for &token in postfix {
            match token {
                PostfixToken::Literal(ch) => {
                    // A literal adds a new state with one dangling edge
                    let state = nfa.char_state(ch);
                    stack.push(Fragment { start: state, outs: vec![state] });
                }
                PostfixToken::Operator(Operator::Concat) => {
                    // Concatenation connects the last two fragments
                    let frag2 = pop(&mut stack)?;
                    let frag1 = pop(&mut stack)?;
                    nfa.patch(&frag1.outs, frag2.start);
                    stack.push(Fragment { start: frag1.start, outs: frag2.outs });
                }
                PostfixToken::Operator(Operator::Alternate) => {
                    // Alternation splits into the last two fragments
                    let frag2 = pop(&mut stack)?;
                    let mut frag1 = pop(&mut stack)?;
                    let state = nfa.split(frag1.start, frag2.start);
                    frag1.outs.extend(frag2.outs);
                    stack.push(Fragment { start: state, outs: frag1.outs });
                }
            }
        }

        if stack.len() != 1 {
            return Err(CompileError::Internal(format!(
                "expected one fragment after construction, found {}",
                stack.len()
            )));
        }
        let result = pop(&mut stack)?;

        // All the dangling edges of the final fragment go to the match state
        let match_id = nfa.match_state();
        nfa.patch(&result.outs, match_id);
        nfa.set_start(result.start);
        debug_assert!(nfa.is_well_formed());

        Ok(nfa)
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

fn pop(stack: &mut Vec<Fragment>) -> CompileResult<Fragment> {
    stack.pop().ok_or_else(|| {
        CompileError::Internal("operator without enough operands".to_string())
    })
}
