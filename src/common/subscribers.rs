use crate::Callback;
use parking_lot::Mutex;

/// Ordered subscriber list shared by both subsystems
///
/// Duplicates are kept as separate entries and membership is by identity.
/// The lock is only held for list manipulation, never while a callback runs,
/// so delivery walks the live list by position: entries added during a
/// trigger are reached, removing an earlier entry shifts the rest back
pub(crate) struct Subscribers {
    list: Mutex<Vec<Callback>>,
}

impl Subscribers {
    pub(crate) fn new() -> Self {
        Self {
            list: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push(&self, callback: Callback) -> usize {
        let mut list = self.list.lock();
        list.push(callback);
        list.len()
    }

    /// Removes the first entry identical to `callback`
    pub(crate) fn remove(&self, callback: &Callback) -> bool {
        let mut list = self.list.lock();
        match list.iter().position(|item| item.ptr_eq(callback)) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    /// Callback currently at `index`
    pub(crate) fn get(&self, index: usize) -> Option<Callback> {
        self.list.lock().get(index).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.list.lock().len()
    }
}
