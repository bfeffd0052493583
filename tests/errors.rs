use thompson_regex::{CompileError, Regex};

fn compile_error(pattern: &str) -> CompileError {
    match Regex::new(pattern) {
        Ok(re) => panic!("expected {:?} to fail, got {:?}", pattern, re),
        Err(err) => err,
    }
}

#[test]
fn group_mismatch() {
    assert_eq!(compile_error("(ab"), CompileError::GroupMismatch { offset: 3 });
    assert_eq!(compile_error("ab)"), CompileError::GroupMismatch { offset: 2 });
    assert!(matches!(compile_error("(a))("), CompileError::GroupMismatch { .. }));
}

#[test]
fn alternation_misuse() {
    for pattern in ["|ab", "a||b", "a|", "(|a)", "(a|)b"] {
        assert!(
            matches!(compile_error(pattern), CompileError::AlternationMisuse { .. }),
            "{:?}",
            pattern
        );
    }
}

#[test]
fn empty_expression() {
    assert_eq!(compile_error(""), CompileError::EmptyExpression { offset: 0 });
    assert_eq!(compile_error("()"), CompileError::EmptyExpression { offset: 1 });
    assert_eq!(compile_error("a(())"), CompileError::EmptyExpression { offset: 3 });
}

#[test]
fn error_messages() {
    assert_eq!(
        compile_error("a||b").to_string(),
        "alternation without an operand at offset 2"
    );
    assert_eq!(compile_error("(a").to_string(), "unbalanced group delimiter at offset 2");
    assert_eq!(compile_error("").to_string(), "empty expression at offset 0");
}

#[test]
fn errors_work_with_anyhow() {
    let result: anyhow::Result<Regex> = Regex::new("a|").map_err(anyhow::Error::from);
    let err = result.unwrap_err();
    assert!(err.downcast_ref::<CompileError>().is_some());
}
