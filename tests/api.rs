use thompson_regex::{compile, is_match, Regex, RegexBuilder, State};

use crate::init_logging;

fn assert_matches(re: &Regex, input: &str) {
    assert!(re.is_match(input), "expected {:?} to match {:?}", re, input);
}

fn refute_matches(re: &Regex, input: &str) {
    assert!(!re.is_match(input), "expected {:?} not to match {:?}", re, input);
}

#[test]
fn alternatives_in_group() {
    init_logging();
    let re = Regex::new("a(b|cd|ef)g").unwrap();

    assert_matches(&re, "abg");
    assert_matches(&re, "acdg");
    assert_matches(&re, "aefg");
    refute_matches(&re, "efg");
    refute_matches(&re, "aef");
    refute_matches(&re, "acd");
    refute_matches(&re, "ab");
    refute_matches(&re, "ef");
}

#[test]
fn concatenation_binds_tighter() {
    let re = Regex::new("ab|c").unwrap();

    assert_matches(&re, "ab");
    assert_matches(&re, "c");
    refute_matches(&re, "a");
    refute_matches(&re, "b");
    refute_matches(&re, "bc");
}

#[test]
fn empty_input() {
    let re = Regex::new("a").unwrap();
    refute_matches(&re, "");
}

#[test]
fn whole_input_only() {
    let re = Regex::new("ab").unwrap();
    refute_matches(&re, "xab");
    refute_matches(&re, "abx");
    refute_matches(&re, "abab");
}

#[test]
fn ampersand_is_a_literal() {
    let re = Regex::new("a&b").unwrap();
    assert_matches(&re, "a&b");
    refute_matches(&re, "ab");
}

#[test]
fn free_functions() -> anyhow::Result<()> {
    let re = compile("x(y|z)")?;
    assert!(is_match(&re, "xy"));
    assert!(is_match(&re, "xz"));
    assert!(!is_match(&re, "x"));
    Ok(())
}

#[test]
fn from_str_and_display() -> anyhow::Result<()> {
    let re: Regex = "a(b|c)".parse()?;
    assert_eq!(re.as_str(), "a(b|c)");
    assert_eq!(re.to_string(), "a(b|c)");
    assert_eq!(format!("{:?}", re), r#"Regex("a(b|c)")"#);
    Ok(())
}

#[test]
fn builder_size_limit() -> anyhow::Result<()> {
    // Three literals, one split and the match state.
    let re = RegexBuilder::new("ab|c").size_limit(5).build()?;
    assert!(re.is_match("ab"));
    assert_eq!(re.nfa().len(), 5);
    assert!(RegexBuilder::new("ab|c").size_limit(4).build().is_err());
    Ok(())
}

#[test]
fn automaton_shape() {
    let re = Regex::new("a(b|c)").unwrap();
    let nfa = re.nfa();

    assert!(nfa.is_well_formed());
    assert_eq!(nfa.state(nfa.match_id()), State::Match);
    for state in nfa.states() {
        match *state {
            State::Char { next, .. } => assert!(next < nfa.len()),
            State::Split { out1, out2 } => {
                assert!(out1 < nfa.len() && out2 < nfa.len())
            }
            State::Match => {}
        }
    }
}

#[test]
fn clones_share_the_automaton() {
    let re = Regex::new("ab|cd").unwrap();
    let copy = re.clone();
    assert!(std::ptr::eq(re.nfa(), copy.nfa()));
    assert!(copy.is_match("cd"));
}

#[test]
fn long_alternation() {
    let words: Vec<String> = (0..2000).map(|i| format!("w{}", i)).collect();
    let re = Regex::new(&words.join("|")).unwrap();

    assert_matches(&re, "w0");
    assert_matches(&re, "w1999");
    refute_matches(&re, "w2000");
    refute_matches(&re, "w");
}
