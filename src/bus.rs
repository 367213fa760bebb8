//! # Common named-event capability

use crate::{
    channel::{Registry, Subscription},
    legacy::LegacyEvents,
    Args, Callback, CallbackError, Error,
};

/// Named channels with ordered subscribers
///
/// Implemented by [Registry] and [LegacyEvents]. The implementations keep
/// their own storage and their own trigger semantics, this trait only
/// lets code be written against either of them
pub trait EventBus {
    /// What subscribing returns
    type Subscribed;

    /// Error returned when a subscriber fails
    type Error;

    /// Adds `callback` to the subscribers of `event`
    fn subscribe(&self, event: &str, callback: Callback) -> Self::Subscribed;

    /// Calls the subscribers of `event` in order with `args`
    fn trigger(&self, event: &str, args: Args) -> Result<(), Self::Error>;

    /// Removes the first subscription of `callback` from `event`
    fn unsubscribe(&self, event: &str, callback: &Callback) -> bool;
}

impl EventBus for Registry {
    type Subscribed = Subscription;
    type Error = CallbackError;

    fn subscribe(&self, event: &str, callback: Callback) -> Subscription {
        self.get(event).subscribe(callback)
    }

    fn trigger(&self, event: &str, args: Args) -> Result<(), CallbackError> {
        self.get(event).trigger(args)
    }

    fn unsubscribe(&self, event: &str, callback: &Callback) -> bool {
        self.get(event).unsubscribe(callback)
    }
}

impl EventBus for LegacyEvents {
    type Subscribed = bool;
    type Error = Error;

    fn subscribe(&self, event: &str, callback: Callback) -> bool {
        LegacyEvents::subscribe(self, event, callback)
    }

    fn trigger(&self, event: &str, args: Args) -> Result<(), Error> {
        LegacyEvents::trigger(self, event, args)
    }

    fn unsubscribe(&self, event: &str, callback: &Callback) -> bool {
        LegacyEvents::unsubscribe(self, event, callback)
    }
}
