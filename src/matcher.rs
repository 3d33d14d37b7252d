/// Classification of one input snapshot against the reference text.
///
/// Produced by [`evaluate`] and consumed by the session to update its
/// counters and by the ui to split the reference into coloured spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Chars in the longest input prefix identical to the reference prefix.
    pub matched_length: usize,
    /// Wrongly typed trailing segment, capped at the reference chars left
    /// past the matched prefix.
    pub mismatched: String,
    /// True only on the transition into a mismatch episode.
    pub is_new_error: bool,
    /// True while a mismatch episode is unresolved.
    pub streak_active: bool,
}

impl Evaluation {
    pub fn is_complete(&self, reference: &str) -> bool {
        self.matched_length == reference.chars().count()
    }
}

/// Classify `input` against `reference`.
///
/// The matched prefix is recomputed from position 0 on every call rather than
/// incrementally: a single deletion can shrink it by more than one char, and
/// the policy is "prefix anchored at the start", not longest common substring.
/// Matching is exact char equality; case and whitespace are significant.
///
/// `prior_streak_active` carries the streak flag from the previous keystroke
/// so that one contiguous wrong region counts as a single error event.
pub fn evaluate(reference: &str, input: &str, prior_streak_active: bool) -> Evaluation {
    let matched_length = reference
        .chars()
        .zip(input.chars())
        .take_while(|(expected, typed)| expected == typed)
        .count();

    // Never show more mismatch than the reference has remaining chars;
    // extras typed past the end of the reference are not classified at all.
    let remaining = reference.chars().count() - matched_length;
    let mismatched: String = input.chars().skip(matched_length).take(remaining).collect();

    let streak_active = !mismatched.is_empty();
    let is_new_error = streak_active && !prior_streak_active;

    Evaluation {
        matched_length,
        mismatched,
        is_new_error,
        streak_active,
    }
}
