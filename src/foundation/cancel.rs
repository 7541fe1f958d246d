use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::foundation::error::{FootprintError, FootprintResult};

/// Cooperative cancellation flag shared between a caller and a running render.
///
/// Stages poll it once per pixel row, so a cancelled render stops within one row of work.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Every clone observes it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Return [`FootprintError::Cancelled`] once cancellation has been requested.
    pub fn check(&self) -> FootprintResult<()> {
        if self.is_cancelled() {
            return Err(FootprintError::Cancelled);
        }
        Ok(())
    }
}
