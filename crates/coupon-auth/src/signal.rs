//! Unauthorized-session signal.
//!
//! The API gateway holds a clone and calls [`UnauthorizedSignal::notify`] once
//! per 401 response. Listeners run synchronously, before the gateway returns
//! the error to its caller, so by the time a failed call resolves every
//! listener has already observed the invalidation. Listeners must be
//! idempotent: several may be registered and the signal may fire repeatedly.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

type Listener = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`UnauthorizedSignal::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Inner {
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    fired: AtomicU64,
}

/// Cloneable callback registry; all clones share the same listeners.
#[derive(Clone, Default)]
pub struct UnauthorizedSignal {
    inner: Arc<Inner>,
}

impl UnauthorizedSignal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Invoke every listener once.
    pub fn notify(&self) {
        self.inner.fired.fetch_add(1, Ordering::SeqCst);
        // Snapshot first: a listener may subscribe or unsubscribe.
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        tracing::debug!(listeners = snapshot.len(), "unauthorized signal fired");
        for listener in snapshot {
            listener();
        }
    }

    /// How many times [`Self::notify`] has been called.
    #[must_use]
    pub fn fired_count(&self) -> u64 {
        self.inner.fired.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl fmt::Debug for UnauthorizedSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnauthorizedSignal")
            .field("listeners", &self.listener_count())
            .field("fired", &self.fired_count())
            .finish()
    }
}
