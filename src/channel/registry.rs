use super::Channel;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;

/// Lazy mapping from event name to its [Channel]
///
/// There is at most one channel per name for the lifetime of the registry,
/// channels are never removed
#[derive(Default)]
pub struct Registry {
    channels: RwLock<HashMap<String, Channel>>,
}

impl Registry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the channel for `name`, creating it on first access
    pub fn get(&self, name: &str) -> Channel {
        macro_rules! try_get {
            ($channels:ident) => {
                if let Some(channel) = $channels.get(name) {
                    return channel.clone();
                }
            };
        }

        // fast get with shared access
        let channels = self.channels.read();
        try_get!(channels);
        drop(channels);

        // slow get with unique access
        let mut channels = self.channels.write();
        try_get!(channels);

        // create & store
        debug!(event = name, "creating channel");
        let channel = Channel::new(name);
        channels.insert(name.to_owned(), channel.clone());
        channel
    }

    /// Returns `true` if a channel for `name` was already created
    pub fn contains(&self, name: &str) -> bool {
        self.channels.read().contains_key(name)
    }

    /// Names of all created channels, in no particular order
    pub fn names(&self) -> Vec<String> {
        self.channels.read().keys().cloned().collect()
    }

    /// Number of created channels
    pub fn len(&self) -> usize {
        self.channels.read().len()
    }

    /// Returns `true` if no channel was created yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
