//! Scheduled tasks and scoped subscriptions feeding the event loop.
//!
//! Every producer is a handle owning one worker thread. Dropping the
//! handle disconnects the worker's cancel channel and joins it, so once
//! `drop` returns the producer has sent its last event. Nothing here is
//! global: a subscription exists exactly as long as its handle.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use tracing::{trace, warn};

use super::state::AppEvent;

/// How long the input listener blocks before re-checking cancellation.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// CANCELLABLE WORKER
// ============================================================================

/// A worker thread plus the sender whose drop tells it to stop.
#[derive(Debug)]
struct Worker {
    cancel: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for Worker {
    fn drop(&mut self) {
        // Disconnect first, then wait for the worker to notice.
        self.cancel.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

// ============================================================================
// TICKER
// ============================================================================

/// Repeating timer: sends a clone of `event` every `period`.
///
/// Stops when dropped, or by itself once the receiver is gone.
#[derive(Debug)]
pub struct Ticker {
    _worker: Worker,
}

impl Ticker {
    pub fn spawn<T>(period: Duration, tx: Sender<T>, event: T) -> Self
    where
        T: Clone + Send + 'static,
    {
        let (cancel, cancel_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || {
            loop {
                match cancel_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(event.clone()).is_err() {
                            break; // event loop is gone
                        }
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });
        Ticker {
            _worker: Worker {
                cancel: Some(cancel),
                thread: Some(thread),
            },
        }
    }
}

// ============================================================================
// INPUT LISTENER
// ============================================================================

/// Source of terminal input events.
///
/// `Ok(None)` means nothing arrived within `timeout`.
pub trait EventSource: Send + 'static {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// The real terminal, via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Translate a terminal event into an app event. Everything except key,
/// mouse and resize is dropped.
pub fn input_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}

/// Page-wide keyboard and mouse subscription.
///
/// Forwards input for as long as the handle lives. Detached on drop.
/// If the source fails, sends `AppEvent::InputClosed` once and stops.
#[derive(Debug)]
pub struct InputListener {
    _worker: Worker,
}

impl InputListener {
    /// Listen to the real terminal.
    pub fn spawn(tx: Sender<AppEvent>) -> Self {
        Self::spawn_with(CrosstermEvents, tx)
    }

    /// Listen to an arbitrary source.
    pub fn spawn_with<S: EventSource>(mut source: S, tx: Sender<AppEvent>) -> Self {
        let (cancel, cancel_rx) = mpsc::channel::<()>();
        let thread = thread::spawn(move || {
            loop {
                match cancel_rx.try_recv() {
                    Err(TryRecvError::Empty) => {}
                    Ok(()) | Err(TryRecvError::Disconnected) => break,
                }
                match source.next_event(INPUT_POLL_INTERVAL) {
                    Ok(Some(event)) => {
                        let Some(app_event) = input_event(event) else {
                            continue;
                        };
                        trace!(?app_event, "input");
                        if tx.send(app_event).is_err() {
                            break; // receiver dropped, TUI is shutting down
                        }
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(error = %e, "input source failed");
                        let _ = tx.send(AppEvent::InputClosed);
                        break;
                    }
                }
            }
        });
        InputListener {
            _worker: Worker {
                cancel: Some(cancel),
                thread: Some(thread),
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
