/*!
This crate provides a small regular expression engine. Patterns are made of
literal characters, concatenation, alternation with `|` and grouping with `(`
and `)`. A pattern compiles to a Thompson NFA, which is simulated against the
input without backtracking, so matching takes time proportional to the
length of the pattern times the length of the input.

# Syntax

* `abc` matches exactly `abc`.
* `ab|c` matches `ab` or `c`. Concatenation binds tighter than alternation.
* `a(b|cd)e` matches `abe` or `acde`.

There is no escaping, so `(`, `)` and `|` can't be matched literally. Every
other character, including any Unicode scalar value, matches itself. A
pattern always has to match the whole input.

# Example

```rust
use thompson_regex::Regex;

let re = Regex::new("a(b|cd|ef)g").unwrap();
assert!(re.is_match("acdg"));
assert!(!re.is_match("acd"));
```

Errors are reported when the pattern is malformed:

```rust
use thompson_regex::{CompileError, Regex};

assert_eq!(
    Regex::new("a||b").unwrap_err(),
    CompileError::AlternationMisuse { offset: 2 },
);
```

# Sharing

A [`Regex`] never changes after it has been compiled. It is cheap to clone and
can be used from many threads at once, since every match keeps its own set of
active states.

# Crate features

* **logging** (enabled by default) - Logs the postfix form and the size of
every compiled automaton at debug level, and the number of active states per
input character at trace level, through the `log` crate.
*/

#![deny(missing_docs)]

use std::{fmt, str::FromStr, sync::Arc};

pub use thompson_nfa_compiler::{
    CompileError, CompileResult, State, StateId, DEFAULT_SIZE_LIMIT, NFA,
};

use thompson_nfa_compiler::{Compiler, Matcher};

/// A compiled regular expression.
///
/// A `Regex` matches the whole input against its pattern; see
/// [`Regex::is_match`].
#[derive(Clone)]
pub struct Regex {
    pattern: Arc<str>,
    nfa: Arc<NFA>,
}

impl Regex {
    /// Compiles a regular expression with the default configuration.
    ///
    /// Use [`RegexBuilder`] to set a different size limit.
    pub fn new(pattern: &str) -> Result<Regex, CompileError> {
        RegexBuilder::new(pattern).build()
    }

    /// Returns true if the entire `input` is in the language of this regex.
    ///
    /// ```
    /// use thompson_regex::Regex;
    ///
    /// let re = Regex::new("ab|c").unwrap();
    /// assert!(re.is_match("ab"));
    /// assert!(re.is_match("c"));
    /// assert!(!re.is_match("bc"));
    /// ```
    pub fn is_match(&self, input: &str) -> bool {
        Matcher::new(&self.nfa).is_match(input)
    }

    /// Returns the pattern this regex was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the automaton this regex runs.
    pub fn nfa(&self) -> &NFA {
        &self.nfa
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Regex").field(&self.as_str()).finish()
    }
}

impl FromStr for Regex {
    type Err = CompileError;

    fn from_str(pattern: &str) -> Result<Regex, CompileError> {
        Regex::new(pattern)
    }
}

/// A configurable builder for a [`Regex`].
#[derive(Clone, Debug)]
pub struct RegexBuilder {
    pattern: String,
    size_limit: usize,
}

impl RegexBuilder {
    /// Creates a builder for `pattern` with the default configuration.
    pub fn new(pattern: &str) -> RegexBuilder {
        RegexBuilder {
            pattern: pattern.to_string(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Sets the maximum number of states the compiled automaton may have.
    ///
    /// A pattern needs one state per literal and per `|`, plus one. Patterns
    /// over the limit fail with [`CompileError::TooComplex`].
    ///
    /// ```
    /// use thompson_regex::{CompileError, RegexBuilder};
    ///
    /// let err = RegexBuilder::new("a|b").size_limit(3).build().unwrap_err();
    /// assert_eq!(err, CompileError::TooComplex { limit: 3 });
    /// ```
    pub fn size_limit(&mut self, limit: usize) -> &mut RegexBuilder {
        self.size_limit = limit;
        self
    }

    /// Compiles the pattern.
    pub fn build(&self) -> Result<Regex, CompileError> {
        let nfa = Compiler::new().size_limit(self.size_limit).compile(&self.pattern)?;
        Ok(Regex { pattern: Arc::from(self.pattern.as_str()), nfa: Arc::new(nfa) })
    }
}

/// Compiles `pattern` into a [`Regex`].
///
/// This is the same as [`Regex::new`].
pub fn compile(pattern: &str) -> Result<Regex, CompileError> {
    Regex::new(pattern)
}

/// Returns true if `regex` matches the entire `input`.
///
/// This is the same as [`Regex::is_match`] and never fails.
pub fn is_match(regex: &Regex, input: &str) -> bool {
    regex.is_match(input)
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
