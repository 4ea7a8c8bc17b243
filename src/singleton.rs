//! Pattern 2: Thread-Safe Singleton Counter
//!
//! Properties of the singleton:
//! - No reachable constructor; the only instance lives in a static
//! - `global()` always returns the same `&'static` reference
//! - Every operation takes the same lock, so no two ever interleave

use std::sync::{Mutex, MutexGuard, OnceLock};

/// A process-wide counter with exactly one instance for the lifetime of the
/// process. The counter never goes below zero: decrementing at zero is a
/// no-op that reports failure.
pub struct CounterSingleton {
    count: Mutex<u64>,
}

impl CounterSingleton {
    /// The designated access point. The first call initializes the instance
    /// with a zero counter; every call returns the same reference.
    pub fn global() -> &'static CounterSingleton {
        static INSTANCE: OnceLock<CounterSingleton> = OnceLock::new();
        INSTANCE.get_or_init(|| CounterSingleton {
            count: Mutex::new(0),
        })
    }

    /// Adds one to the counter. Always succeeds.
    pub fn increment(&self) {
        let mut count = self.lock();
        *count += 1;
    }

    /// Subtracts one from the counter, unless it is already at zero. At
    /// zero the counter is left unchanged and `false` is returned; this is
    /// a defined boundary outcome, not an error.
    pub fn decrement(&self) -> bool {
        let mut count = self.lock();
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Current value, consistent with the latest completed mutation.
    pub fn value(&self) -> u64 {
        *self.lock()
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        // Nothing panics while the guard is held, so the lock cannot be
        // poisoned.
        self.count.lock().expect("counter lock poisoned")
    }
}

// ============================================================================
// Tests
// ============================================================================
