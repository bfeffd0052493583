use once_cell::sync::Lazy;
use thompson_regex::Regex;

static GREETING: Lazy<Regex> =
    Lazy::new(|| Regex::new("(hello|hi|hey) (world|there)").unwrap());

#[test]
fn shared_between_threads() {
    crate::init_logging();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                scope.spawn(move || {
                    let greeting = if i % 2 == 0 { "hello world" } else { "hey there" };
                    (0..100).all(|_| {
                        GREETING.is_match(greeting)
                            && !GREETING.is_match("hello")
                            && !GREETING.is_match("hi world!")
                    })
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn clones_moved_to_threads() {
    let re = Regex::new("a(b|c)d").unwrap();
    let handles: Vec<_> = ["abd", "acd", "ad", "abcd"]
        .into_iter()
        .map(|input| {
            let re = re.clone();
            std::thread::spawn(move || re.is_match(input))
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false, false]);
}
