//! Cooperative shutdown for long or paced runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown flag polled by [`Sim::run`][crate::Sim::run] at every tick
/// boundary.
///
/// Stopping is cooperative: the tick in progress always completes, so stores
/// are never left mid-update.
#[derive(Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle that can request the stop, safe to hand to another thread or
    /// a signal hook.
    pub fn handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.0))
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The requesting side of a [`StopToken`].
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request a stop at the next tick boundary.  Idempotent.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}
