//! One-shot initialization gate.
//!
//! An explicit atomic state machine rather than `std::sync::Once`: the
//! first caller claims the gate with a compare-and-swap and runs the build
//! closure; concurrent callers block until it finishes; later callers
//! return immediately. A failed build still consumes the gate —
//! misconfiguration is fatal and not retried.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Condvar, Mutex};

const NEW: u8 = 0;
const RUNNING: u8 = 1;
const DONE: u8 = 2;

pub(crate) struct InitGate {
    state: AtomicU8,
    done: Mutex<bool>,
    signal: Condvar,
}

impl InitGate {
    pub(crate) fn new() -> Self {
        Self {
            state: AtomicU8::new(NEW),
            done: Mutex::new(false),
            signal: Condvar::new(),
        }
    }

    /// Run `build` exactly once across all callers.
    ///
    /// The winning caller receives the build result; every other caller
    /// waits for completion (if in progress) and gets `Ok(())`.
    pub(crate) fn enter<E>(&self, build: impl FnOnce() -> Result<(), E>) -> Result<(), E> {
        match self
            .state
            .compare_exchange(NEW, RUNNING, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                let result = build();
                {
                    let mut done = self.done.lock().expect("init gate mutex poisoned");
                    *done = true;
                }
                self.state.store(DONE, Ordering::Release);
                self.signal.notify_all();
                result
            }
            Err(DONE) => Ok(()),
            Err(_) => {
                let mut done = self.done.lock().expect("init gate mutex poisoned");
                while !*done {
                    done = self.signal.wait(done).expect("init gate mutex poisoned");
                }
                Ok(())
            }
        }
    }

    pub(crate) fn completed(&self) -> bool {
        self.state.load(Ordering::Acquire) == DONE
    }
}
