//! Thompson NFA Compiler
//!
//! This library compiles patterns made of literal characters, concatenation,
//! alternation (`|`) and grouping (`(` and `)`) into a Thompson NFA, and
//! simulates that NFA against input without backtracking.
//!
//! Compilation is a pipeline of four stages:
//! - [`preprocess`] validates the pattern and makes concatenation explicit
//! - [`postfix`] reorders the tokens with a shunting-yard pass
//! - [`compiler`] assembles the state graph from fragments
//! - [`matcher`] tracks the set of active states while reading input
//!
//! A compiled [`NFA`] is immutable. Any number of [`Matcher`]s may run over
//! it at the same time since each one owns its scratch state.

#[macro_use]
mod macros;

pub mod compiler;
pub mod matcher;
pub mod nfa;
pub mod postfix;
pub mod preprocess;
mod sparse_set;
pub mod token;

pub use compiler::{Compiler, DEFAULT_SIZE_LIMIT};
pub use matcher::Matcher;
pub use nfa::{Fragment, State, StateId, NFA};
pub use token::{Operator, PostfixToken, Token};

/// The result of compiling a pattern to a Thompson NFA
pub type CompileResult<T> = Result<T, CompileError>;

/// Errors that can occur during compilation
///
/// Offsets count characters (not bytes) from the start of the pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// A `)` without a matching `(`, or a `(` that is never closed. For
    /// unclosed groups the offset is the length of the pattern.
    #[error("unbalanced group delimiter at offset {offset}")]
    GroupMismatch { offset: usize },
    /// A `|` at the start of the pattern or of a group, right after another
    /// `|`, or with nothing after it.
    #[error("alternation without an operand at offset {offset}")]
    AlternationMisuse { offset: usize },
    /// The pattern or one of its groups contains nothing to match.
    #[error("empty expression at offset {offset}")]
    EmptyExpression { offset: usize },
    /// The automaton would need more states than allowed.
    #[error("regex pattern is too complex, exceeds limit of {limit} states")]
    TooComplex { limit: usize },
    /// Construction received a malformed postfix stream.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Compiles `pattern` with the default configuration.
pub fn compile(pattern: &str) -> CompileResult<NFA> {
    Compiler::new().compile(pattern)
}

/// Returns true if `nfa` accepts the whole of `input`.
pub fn is_match(nfa: &NFA, input: &str) -> bool {
    Matcher::new(nfa).is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline() {
        let nfa = compile("a(b|cd|ef)g").unwrap();

        for input in ["abg", "acdg", "aefg"] {
            assert!(is_match(&nfa, input), "{:?} should match", input);
        }
        for input in ["efg", "aef", "acd", "ab", "ef", ""] {
            assert!(!is_match(&nfa, input), "{:?} should not match", input);
        }
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CompileError::GroupMismatch { offset: 3 }.to_string(),
            "unbalanced group delimiter at offset 3"
        );
        assert_eq!(
            CompileError::TooComplex { limit: 4 }.to_string(),
            "regex pattern is too complex, exceeds limit of 4 states"
        );
    }
}
