//! # Legacy subscribe / trigger / unsubscribe
//!
//! The original function-pair API. It keeps its own name to callbacks
//! mapping, so an event name used here and the same name used through a
//! [Registry](crate::channel::Registry) are unrelated.
//!
//! Compared to a [Channel](crate::channel::Channel):
//! - triggering an unknown event does nothing,
//! - no arguments are remembered,
//! - a callback returning [Flow::Stop] ends the trigger early,
//! - a failing callback is reported as [Error::Callback] naming the event.

use crate::{
    common::{OnceCell, Subscribers},
    Args, Callback, Error, Flow,
};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, trace};

#[cfg(test)]
mod test;

static CALLBACKS: OnceCell<LegacyEvents> = OnceCell::new();

fn callbacks() -> &'static LegacyEvents {
    CALLBACKS.get_or_init(LegacyEvents::new)
}

/// Adds `callback` to `event` in the process-wide legacy mapping
///
/// Always returns `true`
pub fn subscribe(event: &str, callback: Callback) -> bool {
    callbacks().subscribe(event, callback)
}

/// Triggers `event` in the process-wide legacy mapping
pub fn trigger(event: &str, args: Args) -> Result<(), Error> {
    callbacks().trigger(event, args)
}

/// Removes the first subscription of `callback` from `event`
/// in the process-wide legacy mapping
pub fn unsubscribe(event: &str, callback: &Callback) -> bool {
    callbacks().unsubscribe(event, callback)
}

/// Name to callbacks mapping behind the legacy functions
#[derive(Default)]
pub struct LegacyEvents {
    events: RwLock<HashMap<String, Arc<Subscribers>>>,
}

impl LegacyEvents {
    /// Creates an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `callback` to the end of the callbacks of `event`
    ///
    /// Always returns `true`
    pub fn subscribe(&self, event: &str, callback: Callback) -> bool {
        // fast path with shared access
        let events = self.events.read();
        if let Some(subscribers) = events.get(event) {
            let count = subscribers.push(callback);
            trace!(event, subscribers = count, "legacy subscribed");
            return true;
        }
        drop(events);

        // slow path with unique access
        let count = self
            .events
            .write()
            .entry(event.to_owned())
            .or_insert_with(|| Arc::new(Subscribers::new()))
            .push(callback);
        trace!(event, subscribers = count, "legacy subscribed");
        true
    }

    /// Calls the callbacks of `event` in order with `args`
    ///
    /// Does nothing if `event` was never subscribed to.
    /// Stops after the first callback returning [Flow::Stop].
    /// A failing callback stops the delivery and is reported
    /// as [Error::Callback].
    ///
    /// Like [Channel::trigger](crate::channel::Channel::trigger) the live
    /// list is walked by position, so changes made by a callback show up
    /// in the same trigger
    pub fn trigger(&self, event: &str, args: Args) -> Result<(), Error> {
        let callbacks = match self.events.read().get(event) {
            Some(subscribers) => subscribers.clone(),
            None => return Ok(()),
        };
        debug!(event, subscribers = callbacks.len(), "legacy trigger");
        let mut index = 0;
        while let Some(callback) = callbacks.get(index) {
            index += 1;
            match callback.call(&args) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => {
                    trace!(event, "legacy trigger stopped by callback");
                    break;
                }
                Err(source) => {
                    return Err(Error::Callback {
                        event: event.to_owned(),
                        source,
                    })
                }
            }
        }
        Ok(())
    }

    /// Removes the first subscription of `callback` from `event`
    ///
    /// Returns `false` if `event` is unknown or `callback` is not subscribed
    pub fn unsubscribe(&self, event: &str, callback: &Callback) -> bool {
        let removed = match self.events.read().get(event) {
            Some(subscribers) => subscribers.remove(callback),
            None => false,
        };
        trace!(event, removed, "legacy unsubscribe");
        removed
    }

    /// Returns `true` if `event` was ever subscribed to
    pub fn contains(&self, event: &str) -> bool {
        self.events.read().contains_key(event)
    }

    /// Number of callbacks subscribed to `event`
    pub fn len(&self, event: &str) -> usize {
        self.events
            .read()
            .get(event)
            .map_or(0, |subscribers| subscribers.len())
    }
}
