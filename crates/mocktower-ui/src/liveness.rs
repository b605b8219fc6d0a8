//! View lifetime guard for asynchronous continuations.
//!
//! Network requests carry no cancellation token, so a response can land
//! after the view that issued it was torn down. Continuations hold a
//! [`LivenessToken`] acquired at request issue and check it before writing
//! view state; `release()` on teardown turns any late continuation into a
//! no-op.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag owned by a view instance.
#[derive(Debug, Clone)]
pub struct LivenessFlag {
    alive: Arc<AtomicBool>,
}

impl LivenessFlag {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Acquire a token for a continuation issued now.
    pub fn token(&self) -> LivenessToken {
        LivenessToken {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Mark the view as torn down. All outstanding tokens observe this.
    pub fn release(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}

impl Default for LivenessFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Token held by one continuation.
#[derive(Debug, Clone)]
pub struct LivenessToken {
    alive: Arc<AtomicBool>,
}

impl LivenessToken {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }
}
