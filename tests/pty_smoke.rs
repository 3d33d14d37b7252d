//! End-to-end smoke check over a pseudo terminal: raw mode, the alternate
//! screen, and the crossterm reader thread are the pieces the headless tests
//! cannot reach. Needs a real PTY, so Unix-only and ignored by default:
//!
//!     cargo test --test pty_smoke -- --ignored

#![cfg(unix)]

use std::thread::sleep;
use std::time::Duration;

use expectrl::{spawn, Eof};

// Long enough for terminal setup and screen transitions on a loaded CI box.
const SETTLE: Duration = Duration::from_millis(200);

#[test]
#[ignore]
fn finish_retry_and_quit() -> Result<(), Box<dyn std::error::Error>> {
    let bin = assert_cmd::cargo::cargo_bin("tapr");
    let mut p = spawn(format!("{} -t hi", bin.display()))?;
    sleep(SETTLE);

    // Type the whole passage, landing on the results screen
    p.send("hi")?;
    sleep(SETTLE);

    // Retry keeps the same passage; finish it a second time
    p.send("r")?;
    sleep(SETTLE);
    p.send("hi")?;
    sleep(SETTLE);

    // Esc on the results screen exits cleanly
    p.send("\x1b")?;
    p.expect(Eof)?;
    Ok(())
}
