//! Read-only metrics derived from a session, recomputed on demand.
//!
//! Neither figure is textbook WPM/accuracy: the error-rate denominator is the
//! typed input length (errors per keystroke issued, not per reference char),
//! and speed is an un-smoothed projection of the current pace to a full
//! minute. Early readings are volatile; callers treat them as low-confidence.

use crate::session::Session;

/// Errors as a percentage of chars typed so far. Zero for an empty input.
pub fn error_rate_pct(error_count: usize, input_chars: usize) -> f64 {
    if input_chars == 0 {
        0.0
    } else {
        (error_count as f64 / input_chars as f64) * 100.0
    }
}

/// Instantaneous typing speed in chars per minute, floored. Zero before the
/// first whole second has elapsed.
pub fn chars_per_min(elapsed_secs: u64, input_chars: usize) -> u64 {
    if elapsed_secs == 0 {
        0
    } else {
        ((60.0 / elapsed_secs as f64) * input_chars as f64).floor() as u64
    }
}

/// Snapshot of the derived figures for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub error_rate_pct: f64,
    pub chars_per_min: u64,
    pub elapsed_secs: u64,
}

impl Readout {
    pub fn of(session: &Session) -> Self {
        let input_chars = session.input().chars().count();
        Self {
            error_rate_pct: error_rate_pct(session.error_count(), input_chars),
            chars_per_min: chars_per_min(session.elapsed_secs(), input_chars),
            elapsed_secs: session.elapsed_secs(),
        }
    }

    /// Error rate with the two decimal places the display uses.
    pub fn error_rate_display(&self) -> String {
        format!("{:.2}", self.error_rate_pct)
    }
}
