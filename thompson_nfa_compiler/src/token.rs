use std::fmt;

/// Opens a group.
pub const GROUP_OPEN: char = '(';
/// Closes a group.
pub const GROUP_CLOSE: char = ')';
/// Separates alternatives.
pub const ALTERNATE: char = '|';
/// How the implicit concatenation operator is rendered. It is never read
/// from a pattern.
pub const CONCAT: char = '&';

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Operator {
    Alternate = 0,
    Concat = 1,
}

/// Binding strength of each operator, indexed by its discriminant. Higher
/// binds tighter, so `ab|c` reads as `(ab)|c`.
static PRECEDENCE: [u8; 2] = [1, 2];

impl Operator {
    pub fn precedence(self) -> u8 {
        PRECEDENCE[self as usize]
    }

    fn symbol(self) -> char {
        match self {
            Operator::Alternate => ALTERNATE,
            Operator::Concat => CONCAT,
        }
    }
}

/// A token of an infix pattern with explicit concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    GroupOpen,
    GroupClose,
    Operator(Operator),
}

/// A token of a postfix stream. Groups are gone at this point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixToken {
    Literal(char),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Token::Literal(ch) => write!(f, "{}", ch),
            Token::GroupOpen => write!(f, "{}", GROUP_OPEN),
            Token::GroupClose => write!(f, "{}", GROUP_CLOSE),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PostfixToken::Literal(ch) => write!(f, "{}", ch),
            PostfixToken::Operator(op) => write!(f, "{}", op.symbol()),
        }
    }
}

/// Renders a token stream back to a string, e.g. `a&(b|c)`.
pub fn render<T: fmt::Display>(tokens: &[T]) -> String {
    tokens.iter().map(|token| token.to_string()).collect()
}
