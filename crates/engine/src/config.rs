//! Record store configuration
//!
//! Configuration is an explicit object handed to each store instance at
//! construction. There is no process-global state: two stores in one
//! process can carry different limits and clocks.

use chirp_core::{Clock, Limits, SystemClock};
use std::sync::Arc;

/// Configuration for a `RecordStore`
///
/// # Example
///
/// ```ignore
/// use chirp_engine::{RecordStore, StoreOptions};
/// use chirp_core::Limits;
///
/// let options = StoreOptions::default().limits(Limits::default());
/// let store = RecordStore::with_options(slots, options);
/// ```
#[derive(Clone)]
pub struct StoreOptions {
    /// Field-length limits enforced at creation
    pub limits: Limits,
    /// Source of creation timestamps
    pub clock: Arc<dyn Clock>,
}

impl StoreOptions {
    /// Replace the field-length limits
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the clock
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl std::fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOptions")
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
