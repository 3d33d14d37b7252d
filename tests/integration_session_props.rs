// Property-style checks over the matching engine and the session lifecycle,
// exercised through the public library surface the way the binary uses it.

use tapr::matcher;
use tapr::metrics;
use tapr::session::Session;

fn drive(reference: &str, inputs: &[&str]) -> Session {
    let mut session = Session::new();
    session.start(reference).unwrap();
    for input in inputs {
        session.apply_input(input).unwrap();
    }
    session
}

#[test]
fn matched_length_never_exceeds_either_length() {
    let references = ["", "a", "hello world", "ab c", "əxé", "the quick brown fox"];
    let inputs = ["", "a", "hello", "hello world!", "x", "the quick brwon"];

    for reference in references {
        for input in inputs {
            let eval = matcher::evaluate(reference, input, false);
            let bound = reference.chars().count().min(input.chars().count());
            assert!(
                eval.matched_length <= bound,
                "({reference:?}, {input:?}): {} > {bound}",
                eval.matched_length
            );
        }
    }
}

#[test]
fn matched_length_is_the_longest_common_prefix() {
    let cases = [
        ("hello", "hello", 5),
        ("hello", "help", 3),
        ("hello", "xhello", 0),
        ("hello", "hello world", 5),
        ("", "anything", 0),
    ];

    for (reference, input, expected) in cases {
        let eval = matcher::evaluate(reference, input, false);
        assert_eq!(eval.matched_length, expected, "({reference:?}, {input:?})");
    }
}

#[test]
fn evaluate_has_no_hidden_state() {
    for prior in [false, true] {
        let a = matcher::evaluate("reference text", "refx", prior);
        let b = matcher::evaluate("reference text", "refx", prior);
        assert_eq!(a, b);
    }
}

#[test]
fn one_streak_is_one_error() {
    let session = drive("abc", &["a", "ax", "axy"]);
    assert_eq!(session.error_count(), 1);
}

#[test]
fn errors_are_countable_again_after_a_streak_resolves() {
    let session = drive("abc", &["a", "ax", "a", "ab", "abz"]);
    assert_eq!(session.error_count(), 2);
}

#[test]
fn completion_fires_exactly_when_the_prefix_covers_the_reference() {
    let mut session = Session::new();
    session.start("hi").unwrap();

    let outcome = session.apply_input("h").unwrap();
    assert!(!outcome.completed);
    assert!(session.is_active());

    let outcome = session.apply_input("hi").unwrap();
    assert!(outcome.completed);
    assert_eq!(outcome.matched_length, 2);
    assert!(session.is_completed());
    assert!(!session.is_active());
}

#[test]
fn mismatch_is_truncated_to_the_remaining_reference() {
    let eval = matcher::evaluate("ab", "xyz", false);
    assert_eq!(eval.matched_length, 0);
    assert_eq!(eval.mismatched, "xy");
}

#[test]
fn metric_guards_hold() {
    assert_eq!(metrics::error_rate_pct(0, 0), 0.0);
    assert_eq!(metrics::chars_per_min(0, 42), 0);
    assert_eq!(format!("{:.2}", metrics::error_rate_pct(1, 4)), "25.00");
}

#[test]
fn full_session_walkthrough_with_metrics() {
    let mut session = Session::new();
    session.start("tap").unwrap();

    session.apply_input("t").unwrap();
    session.tick().unwrap();
    session.apply_input("tx").unwrap();
    session.apply_input("t").unwrap();
    session.tick().unwrap();
    session.apply_input("ta").unwrap();
    let outcome = session.apply_input("tap").unwrap();

    assert!(outcome.completed);
    assert_eq!(session.error_count(), 1);
    assert_eq!(session.elapsed_secs(), 2);

    let readout = metrics::Readout::of(&session);
    // 1 error over 3 typed chars, 3 chars in 2 seconds
    assert_eq!(readout.error_rate_display(), "33.33");
    assert_eq!(readout.chars_per_min, 90);
}
