//! Submissions whose delivery has not settled yet.
//!
//! Shared through `AppState`, so a second identical submit that arrives while
//! the first is still being delivered is refused no matter which request,
//! tab or client sent it.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::contact::delivery::EmailPayload;

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Arc<Mutex<HashSet<EmailPayload>>>,
}

impl InFlight {
    /// Marks `payload` as being delivered. Returns `None` if an identical
    /// payload already is. The mark is released when the claim is dropped.
    pub fn claim(&self, payload: EmailPayload) -> Option<InFlightClaim> {
        if !self.lock().insert(payload.clone()) {
            return None;
        }
        Some(InFlightClaim {
            pending: Arc::clone(&self.pending),
            payload,
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<EmailPayload>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Exclusive right to deliver one payload.
#[derive(Debug)]
pub struct InFlightClaim {
    pending: Arc<Mutex<HashSet<EmailPayload>>>,
    payload: EmailPayload,
}

impl InFlightClaim {
    pub fn payload(&self) -> &EmailPayload {
        &self.payload
    }
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.payload);
    }
}
