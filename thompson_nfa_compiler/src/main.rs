use thompson_nfa_compiler::{
    postfix::postfix, preprocess::preprocess, token::render, Compiler, State,
    NFA,
};

fn main() {
    println!("Thompson NFA Compiler - NFA Structure Demo");
    println!("==========================================");

    // Patterns from the command line, or a few demonstrating each operator
    let args: Vec<String> = std::env::args().skip(1).collect();
    let test_patterns: Vec<&str> = if args.is_empty() {
        vec![
            "a",
            "abc",
            "a|b",
            "ab|c",
            "a(b|cd|ef)g",
            "(a|b)(c|d)",
            // Rejected patterns
            "(ab",
            "ab)",
            "|ab",
            "a||b",
            "a|",
            "(|a)",
            "a()",
        ]
    } else {
        args.iter().map(String::as_str).collect()
    };

    for pattern in test_patterns {
        println!("\n=== Pattern: '{}' ===", pattern);

        let tokens = match preprocess(pattern) {
            Ok(tokens) => tokens,
            Err(e) => {
                println!("Failed to compile: {}", e);
                continue;
            }
        };
        println!("Tokens:  {}", render(&tokens));

        match postfix(&tokens) {
            Ok(postfix) => println!("Postfix: {}", render(&postfix)),
            Err(e) => {
                println!("Failed to compile: {}", e);
                continue;
            }
        }

        match Compiler::new().compile(pattern) {
            Ok(nfa) => print_nfa(&nfa),
            Err(e) => println!("Failed to compile: {}", e),
        }
    }
}

fn print_nfa(nfa: &NFA) {
    println!("Start state: {}", nfa.start());
    println!("Match state: {}", nfa.match_id());
    println!("States:");

    for (id, state) in nfa.states().iter().enumerate() {
        match state {
            State::Char { ch, next } => println!("  {}: '{}' -> {}", id, ch, next),
            State::Split { out1, out2 } => {
                println!("  {}: SPLIT -> {}, {}", id, out1, out2)
            }
            State::Match => println!("  {}: MATCH", id),
        }
    }
}
