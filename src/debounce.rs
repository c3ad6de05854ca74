//! Debounce utility for the view-layer boundary.
//!
//! Search input should settle before the query engine is re-invoked; the
//! engine itself stays un-debounced and pure, so rate-limiting lives here,
//! at the boundary. A [`Debouncer`] delivers only the last value seen once
//! no new value has arrived for the configured delay.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

enum Command<T> {
    Value(T),
    Cancel,
    Shutdown,
}

/// Debounces values onto a callback with a cancel handle.
///
/// Each `call` supersedes the pending value and restarts the delay; the
/// callback fires on the debouncer's timer thread once the delay elapses
/// with no newer value. `cancel` drops the pending value without firing.
/// Dropping the debouncer shuts the timer thread down; a pending value that
/// has not yet fired is discarded.
///
/// # Examples
///
/// ```
/// use solace::debounce::Debouncer;
/// use std::time::Duration;
///
/// let debouncer = Debouncer::new(Duration::from_millis(300), |term: String| {
///     // re-run the filter pipeline with `term`
///     let _ = term;
/// });
/// debouncer.call("anx".to_string());
/// debouncer.call("anxious".to_string()); // supersedes "anx"
/// ```
pub struct Debouncer<T: Send + 'static> {
    tx: Sender<Command<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that invokes `callback` with the settled value
    /// after `delay` of quiet.
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + 'static) -> Self {
        let (tx, rx) = mpsc::channel::<Command<T>>();

        let worker = thread::spawn(move || {
            let mut pending: Option<T> = None;
            loop {
                let command = if pending.is_some() {
                    match rx.recv_timeout(delay) {
                        Ok(command) => command,
                        Err(RecvTimeoutError::Timeout) => {
                            if let Some(value) = pending.take() {
                                callback(value);
                            }
                            continue;
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(command) => command,
                        Err(_) => break,
                    }
                };

                match command {
                    Command::Value(value) => pending = Some(value),
                    Command::Cancel => pending = None,
                    Command::Shutdown => break,
                }
            }
        });

        Debouncer {
            tx,
            worker: Some(worker),
        }
    }

    /// Schedules `value`, superseding any pending one and restarting the delay.
    pub fn call(&self, value: T) {
        let _ = self.tx.send(Command::Value(value));
    }

    /// Drops the pending value, if any, without firing the callback.
    pub fn cancel(&self) {
        let _ = self.tx.send(Command::Cancel);
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
