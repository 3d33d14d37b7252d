// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod matcher;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod texts;
pub mod ui;

/// Interval of the session clock: one tick a second, gated by session activity.
pub const TICK_RATE_MS: u64 = 1000;
