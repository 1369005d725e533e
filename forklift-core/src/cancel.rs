//! Cooperative cancellation shared between a driver and a planner.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared abort flag.
///
/// Clones observe the same flag. Planners read it only between legs, so a
/// leg is either returned whole or never computed.
///
/// # Examples
/// ```
/// use forklift_core::CancelToken;
///
/// let token = CancelToken::new();
/// let driver_handle = token.clone();
/// driver_handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// A token that has not been cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the run stops at the next leg boundary.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Clear the flag so a restarted run can proceed.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }
}
