use crate::matcher::{self, Evaluation};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was invoked outside its valid lifecycle state. The caller
    /// must `reset` before retrying; there is no recovery inside the session.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
}

/// Values a caller needs after one input event: enough to update any display
/// without reaching back into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    pub matched_length: usize,
    pub mismatched: String,
    pub completed: bool,
}

/// One typing session: the reference text, the user's input so far, and the
/// matching/timing counters derived from them.
///
/// Lifecycle: `idle -> typing -> completed` (or `stopped`), back to `idle`
/// only via [`Session::reset`]. `completed` and `stopped` are terminal.
/// All mutation happens through the methods below; fields stay private so the
/// matched-length invariant cannot be broken from outside.
#[derive(Debug, Clone, Default)]
pub struct Session {
    reference: Option<String>,
    input: String,
    matched_length: usize,
    mismatched: String,
    error_count: usize,
    error_streak_active: bool,
    elapsed_secs: u64,
    active: bool,
    completed: bool,
    stopped: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session over `reference`. Only valid from the idle state.
    pub fn start(&mut self, reference: impl Into<String>) -> Result<(), SessionError> {
        if self.reference.is_some() {
            return Err(SessionError::InvalidState(
                "start requires an idle session; call reset first",
            ));
        }

        *self = Self {
            reference: Some(reference.into()),
            ..Self::default()
        };
        Ok(())
    }

    /// Apply the full current content of the input field (not a delta).
    ///
    /// The first accepted call activates the session. When the matched prefix
    /// covers the whole reference the session completes and deactivates in the
    /// same step.
    pub fn apply_input(&mut self, new_input: &str) -> Result<InputOutcome, SessionError> {
        let reference = self
            .reference
            .as_deref()
            .ok_or(SessionError::InvalidState("apply_input before start"))?;

        if self.completed || self.stopped {
            // completed and stopped are terminal until reset
            return Err(SessionError::InvalidState(
                "session has ended; call reset first",
            ));
        }

        if !self.active {
            self.active = true;
        }

        let eval = matcher::evaluate(reference, new_input, self.error_streak_active);
        let completed = eval.is_complete(reference);
        self.absorb(new_input, eval);

        if completed {
            self.completed = true;
            self.active = false;
        }

        Ok(InputOutcome {
            matched_length: self.matched_length,
            mismatched: self.mismatched.clone(),
            completed,
        })
    }

    fn absorb(&mut self, new_input: &str, eval: Evaluation) {
        self.input = new_input.to_string();
        self.matched_length = eval.matched_length;
        self.mismatched = eval.mismatched;
        if eval.is_new_error {
            self.error_count += 1;
        }
        self.error_streak_active = eval.streak_active;
    }

    /// Advance elapsed time by one second. No-op while inactive so a tick
    /// arriving after completion or stop cannot inflate the clock.
    pub fn tick(&mut self) -> Result<(), SessionError> {
        if self.reference.is_none() {
            return Err(SessionError::InvalidState("tick before start"));
        }
        if self.active {
            self.elapsed_secs += 1;
        }
        Ok(())
    }

    /// Deactivate without completing. Idempotent.
    pub fn stop(&mut self) {
        if self.reference.is_some() && !self.completed {
            self.stopped = true;
        }
        self.active = false;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Return to the idle state, clearing every field including the reference.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn matched_length(&self) -> usize {
        self.matched_length
    }

    pub fn mismatched(&self) -> &str {
        &self.mismatched
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn error_streak_active(&self) -> bool {
        self.error_streak_active
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}
