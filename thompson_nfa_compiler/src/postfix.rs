use crate::{
    token::{Operator, PostfixToken, Token},
    CompileError, CompileResult,
};

/// An entry on the operator stack. A group start waits there for its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Group,
    Operator(Operator),
}

/// Converts an infix token stream into postfix order.
///
/// The input must come from [`preprocess`](crate::preprocess::preprocess).
/// Groups are assumed to be balanced; only a group end without a start on
/// the stack is reported, as [`CompileError::Internal`]. Operands are not
/// checked at all.
pub fn postfix(tokens: &[Token]) -> CompileResult<Vec<PostfixToken>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::with_capacity(tokens.len());

    for &token in tokens {
        match token {
            Token::Literal(ch) => output.push(PostfixToken::Literal(ch)),
            Token::GroupOpen => stack.push(Pending::Group),
            Token::GroupClose => loop {
                match stack.pop() {
                    Some(Pending::Group) => break,
                    Some(Pending::Operator(op)) => {
                        output.push(PostfixToken::Operator(op))
                    }
                    None => {
                        return Err(CompileError::Internal(
                            "group end without a group start".to_string(),
                        ))
                    }
                }
            },
            Token::Operator(op) => {
                // Pop operators that bind at least as tight, which makes
                // both operators left associative.
                while let Some(&Pending::Operator(top)) = stack.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }
                stack.push(Pending::Operator(op));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(PostfixToken::Operator(op)),
            Pending::Group => {
                return Err(CompileError::Internal(
                    "group start without a group end".to_string(),
                ))
            }
        }
    }

    Ok(output)
}
