//! The change notification channel.
//!
//! A payload-less broadcast that lets independently-mounted views stay
//! consistent with the store without polling it. The store owns the
//! notifier and decides when to publish; the channel is deliberately
//! decoupled from any storage backend's native change events.
//!
//! This is a broadcast, not a queue: a listener that is not subscribed when
//! an event fires never receives it retroactively, and no coalescing is
//! guaranteed — two rapid mutations may invoke a callback twice before it
//! re-reads, in which case only the latest state is observed.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{Arc, Mutex, PoisonError, Weak},
};

type Callback = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_token: u64,
    listeners: BTreeMap<u64, Callback>,
}

/// A broadcast channel for payload-less "collection changed" events.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<Mutex<Registry>>,
}

impl ChangeNotifier {
    /// Creates a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` to run on every subsequent [`notify`].
    ///
    /// The callback stays registered for as long as the returned
    /// [`Subscription`] lives; dropping the subscription unsubscribes.
    /// Callbacks run on the thread that publishes, in subscription order.
    ///
    /// [`notify`]: Self::notify
    pub fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> Subscription {
        let token = {
            let mut registry = self
                .registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let token = registry.next_token;
            registry.next_token += 1;
            registry.listeners.insert(token, Arc::new(callback));
            token
        };

        Subscription {
            registry: Arc::downgrade(&self.registry),
            token,
        }
    }

    /// Invokes every currently-subscribed callback once.
    ///
    /// The registry lock is released before any callback runs, so a
    /// callback may freely read the store or manage subscriptions.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = {
            let registry = self
                .registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            registry.listeners.values().cloned().collect()
        };
        for callback in callbacks {
            callback();
        }
    }

    fn listener_count(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// A live registration on a [`ChangeNotifier`].
///
/// Views hold this for as long as they are mounted. Dropping it
/// unsubscribes the callback, so an unmounted view cannot leak a listener.
#[must_use = "dropping the subscription unsubscribes the callback"]
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    token: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .remove(&self.token);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("token", &self.token)
            .finish()
    }
}
