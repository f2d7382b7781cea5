/*!
 * Start Gate
 *
 * One-shot gate that holds workers until every one of them has been spawned,
 * then releases them together
 */

use parking_lot::{Condvar, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Cancelled,
}

/// One-shot release for a group of waiting workers
///
/// # Example
///
/// ```ignore
/// let gate = StartGate::new();
/// // in each worker:
/// if gate.wait() { do_work(); }
/// // once all workers exist:
/// gate.open();
/// ```
#[derive(Debug)]
pub struct StartGate {
    state: Mutex<GateState>,
    condvar: Condvar,
}

impl StartGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Closed),
            condvar: Condvar::new(),
        }
    }

    /// Block until the gate is opened or cancelled
    ///
    /// Returns `true` when the caller should start its work.
    pub fn wait(&self) -> bool {
        let mut state = self.state.lock();
        while *state == GateState::Closed {
            self.condvar.wait(&mut state);
        }
        *state == GateState::Open
    }

    /// Release every waiter to do its work
    pub fn open(&self) {
        self.settle(GateState::Open);
    }

    /// Release every waiter without work
    pub fn cancel(&self) {
        self.settle(GateState::Cancelled);
    }

    fn settle(&self, next: GateState) {
        let mut state = self.state.lock();
        if *state == GateState::Closed {
            *state = next;
        }
        drop(state);
        self.condvar.notify_all();
    }
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_waiters_hold_until_open() {
        let gate = StartGate::new();
        let started = AtomicUsize::new(0);

        let before_open = thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    if gate.wait() {
                        started.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }

            thread::sleep(Duration::from_millis(50));
            let before_open = started.load(Ordering::SeqCst);
            gate.open();
            before_open
        });

        assert_eq!(before_open, 0);
        assert_eq!(started.load(Ordering::SeqCst), 8);
    }

    #[test]
    fn test_cancel_releases_without_work() {
        let gate = StartGate::new();
        let started = AtomicUsize::new(0);

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    if gate.wait() {
                        started.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
            gate.cancel();
        });

        assert_eq!(started.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_settle_wins() {
        let gate = StartGate::new();
        gate.open();
        gate.cancel();
        assert!(gate.wait());
    }
}
