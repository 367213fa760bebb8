use super::Channel;
use crate::{Args, Callback};

/// Result of [Channel::subscribe]
///
/// Dropping it keeps the callback subscribed,
/// use [unsubscribe](Subscription::unsubscribe) to leave the channel
#[derive(Debug, Clone)]
#[must_use = "a subscription carries the last trigger arguments and the unsubscribe handle"]
pub struct Subscription {
    channel: Channel,
    callback: Callback,
    last_args: Option<Args>,
}

impl Subscription {
    pub(super) fn new(channel: Channel, callback: Callback, last_args: Option<Args>) -> Self {
        Self {
            channel,
            callback,
            last_args,
        }
    }

    /// Arguments of the last trigger before this subscription was made
    pub fn last_args(&self) -> Option<&Args> {
        self.last_args.as_ref()
    }

    /// The subscribed callback
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// The channel this subscription belongs to
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Removes the first subscription of the bound callback from the channel
    ///
    /// Returns whether a subscription was removed
    pub fn unsubscribe(&self) -> bool {
        self.channel.unsubscribe(&self.callback)
    }
}
