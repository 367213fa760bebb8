//! # Named channels
//!
//! A [Channel] keeps the ordered subscriber list of one event name
//! and remembers the arguments of its last trigger.
//! Channels are obtained from a [Registry], usually the process-wide one
//! returned by [registry].

use crate::{
    common::{OnceCell, Subscribers},
    Args, Callback, CallbackError, Error,
};
use parking_lot::RwLock;
use std::{fmt, sync::Arc};
use tracing::{debug, trace};

mod registry;
mod subscription;


pub use registry::Registry;
pub use subscription::Subscription;

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Installs `registry` as the process-wide default
///
/// Fails if the default was already initialized,
/// either by an earlier call or lazily by [registry]
pub fn init(registry: Registry) -> Result<&'static Registry, Error> {
    REGISTRY.set(registry).map_err(|_| Error::AlreadyInitialized)
}

/// The process-wide default registry, created empty on first use
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

/// Returns the channel for `name` from the default registry
pub fn get(name: &str) -> Channel {
    registry().get(name)
}

/// Subscriber list of a single event name
///
/// `Channel` is a handle: clones refer to the same channel
#[derive(Clone)]
pub struct Channel {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    subscribers: Subscribers,
    last_args: RwLock<Option<Args>>,
}

impl Channel {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.to_owned(),
                subscribers: Subscribers::new(),
                last_args: RwLock::new(None),
            }),
        }
    }

    /// Adds `callback` to the end of the subscriber list
    ///
    /// The same callback may be subscribed several times,
    /// it is then called once per subscription
    pub fn subscribe(&self, callback: Callback) -> Subscription {
        let last_args = self.last_args();
        let count = self.inner.subscribers.push(callback.clone());
        trace!(event = %self.inner.name, subscribers = count, "subscribed");
        Subscription::new(self.clone(), callback, last_args)
    }

    /// Calls every subscriber in order with `args`
    ///
    /// `args` are stored first, so they are visible to later subscribers
    /// even when nobody is listening yet. The first failing subscriber
    /// aborts the delivery and its error is returned as is.
    ///
    /// Subscribers are read from the live list one position at a time:
    /// a callback subscribed during the trigger is called in it, and a
    /// callback that unsubscribes itself makes the next one be skipped
    pub fn trigger(&self, args: Args) -> Result<(), CallbackError> {
        *self.inner.last_args.write() = Some(args.clone());
        let subscribers = &self.inner.subscribers;
        debug!(event = %self.inner.name, subscribers = subscribers.len(), "trigger");
        let mut index = 0;
        while let Some(callback) = subscribers.get(index) {
            callback.call(&args)?;
            index += 1;
        }
        Ok(())
    }

    /// Removes the first subscription of `callback`
    ///
    /// Returns whether a subscription was removed
    pub fn unsubscribe(&self, callback: &Callback) -> bool {
        let removed = self.inner.subscribers.remove(callback);
        trace!(event = %self.inner.name, removed, "unsubscribe");
        removed
    }

    /// Arguments of the last trigger, `None` if never triggered
    pub fn last_args(&self) -> Option<Args> {
        self.inner.last_args.read().clone()
    }

    /// Event name of this channel
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Number of subscriptions
    pub fn len(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles refer to the same channel
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("name", &self.inner.name)
            .field("subscribers", &self.len())
            .field("last_args", &self.last_args())
            .finish()
    }
}
