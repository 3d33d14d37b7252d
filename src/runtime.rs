//! Plumbing between the terminal, the one-second clock, and the app loop.

use std::sync::mpsc::{self, Receiver, RecvError, Sender};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Everything the app loop reacts to, merged into one stream. `Tick` is a
/// timing pulse; the session decides whether it advances the clock.
#[derive(Clone, Debug)]
pub enum TrainerEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// A merged stream of terminal input and clock pulses.
///
/// [`EventStream::spawn`] starts two threads on one channel: a blocking
/// crossterm reader and a ticker emitting [`TrainerEvent::Tick`] at a fixed
/// rate. Both exit when the stream is dropped and their next send fails.
/// Tests script the sequence instead via [`EventStream::scripted`].
pub struct EventStream {
    rx: Receiver<TrainerEvent>,
}

impl EventStream {
    pub fn spawn(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        spawn_ticker(tx.clone(), tick_rate);
        spawn_key_reader(tx);
        Self { rx }
    }

    /// Wrap a plain receiver; the caller controls exactly what arrives when.
    pub fn scripted(rx: Receiver<TrainerEvent>) -> Self {
        Self { rx }
    }

    /// Block until the next event. Errors only once every sender is gone.
    pub fn next(&self) -> Result<TrainerEvent, RecvError> {
        self.rx.recv()
    }
}

fn spawn_ticker(tx: Sender<TrainerEvent>, tick_rate: Duration) {
    thread::spawn(move || loop {
        if tx.send(TrainerEvent::Tick).is_err() {
            break;
        }
        thread::sleep(tick_rate);
    });
}

fn spawn_key_reader(tx: Sender<TrainerEvent>) {
    thread::spawn(move || loop {
        let evt = match event::read() {
            Ok(CtEvent::Key(key)) => Some(TrainerEvent::Key(key)),
            Ok(CtEvent::Resize(_, _)) => Some(TrainerEvent::Resize),
            Ok(_) => None,
            Err(_) => break,
        };

        if let Some(evt) = evt {
            if tx.send(evt).is_err() {
                break;
            }
        }
    });
}
