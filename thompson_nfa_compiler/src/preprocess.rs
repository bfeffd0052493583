use crate::{
    token::{Operator, Token, ALTERNATE, GROUP_CLOSE, GROUP_OPEN},
    CompileError, CompileResult,
};

/// Tokenizes `pattern`, inserting an explicit concatenation operator between
/// adjacent operands.
///
/// This is the only stage that validates the pattern. It rejects unbalanced
/// groups, a `|` with a missing operand on either side, an empty group and
/// the empty pattern. The stages after it rely on these checks.
pub fn preprocess(pattern: &str) -> CompileResult<Vec<Token>> {
    let mut tokens = Vec::with_capacity(pattern.len() * 2);

    // Count of groups we are currently nested in
    let mut depth = 0usize;
    // Previous token is connected to the next operand with a concatenation
    let mut wants_concat = false;
    // Previous token allows the current one to be an alternation
    let mut can_alternate = false;
    // Previous token was an alternation
    let mut last_alternate = false;
    let mut len = 0;

    for (offset, ch) in pattern.chars().enumerate() {
        len = offset + 1;
        match ch {
            GROUP_OPEN => {
                depth += 1;
                if wants_concat {
                    tokens.push(Token::Operator(Operator::Concat));
                    wants_concat = false;
                }
                can_alternate = false;
                last_alternate = false;
                tokens.push(Token::GroupOpen);
            }
            GROUP_CLOSE => {
                if depth == 0 {
                    return Err(CompileError::GroupMismatch { offset });
                }
                if last_alternate {
                    return Err(CompileError::AlternationMisuse { offset });
                }
                if tokens.last() == Some(&Token::GroupOpen) {
                    return Err(CompileError::EmptyExpression { offset });
                }
                depth -= 1;
                wants_concat = true;
                can_alternate = true;
                last_alternate = false;
                tokens.push(Token::GroupClose);
            }
            ALTERNATE => {
                if !can_alternate {
                    return Err(CompileError::AlternationMisuse { offset });
                }
                wants_concat = false;
                can_alternate = false;
                last_alternate = true;
                tokens.push(Token::Operator(Operator::Alternate));
            }
            _ => {
                if wants_concat {
                    tokens.push(Token::Operator(Operator::Concat));
                }
                wants_concat = true;
                can_alternate = true;
                last_alternate = false;
                tokens.push(Token::Literal(ch));
            }
        }
    }

    if last_alternate {
        return Err(CompileError::AlternationMisuse { offset: len });
    }
    if depth != 0 {
        return Err(CompileError::GroupMismatch { offset: len });
    }
    if tokens.is_empty() {
        return Err(CompileError::EmptyExpression { offset: 0 });
    }

    Ok(tokens)
}
