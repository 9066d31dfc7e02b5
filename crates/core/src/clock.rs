//! Clock abstraction for creation timestamps
//!
//! The record store derives `created_at` from an injected clock rather
//! than reading system time directly, so tests can pin timestamps and
//! no component carries hidden ambient state.

use crate::timestamp::Timestamp;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of creation timestamps
///
/// Implementations must be safe to share across threads.
pub trait Clock: Send + Sync {
    /// Current time, second granularity
    fn now(&self) -> Timestamp;
}

/// Wall-clock implementation backed by system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Manually advanced clock for tests
///
/// Starts at the given time and only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    secs: AtomicI64,
}

impl ManualClock {
    /// Create a manual clock pinned to the given timestamp
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: AtomicI64::new(start.as_secs()),
        }
    }

    /// Set the clock to an absolute time
    pub fn set(&self, ts: Timestamp) {
        self.secs.store(ts.as_secs(), Ordering::SeqCst);
    }

    /// Advance the clock by whole seconds
    pub fn advance_secs(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}
