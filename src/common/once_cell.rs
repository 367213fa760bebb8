use parking_lot::Once;
use std::{cell::UnsafeCell, mem::MaybeUninit};

pub(crate) struct OnceCell<T> {
    once: Once,
    cell: UnsafeCell<MaybeUninit<T>>,
}

// it is correct because OnceCell provide outside read-only reference
// and the single write is guarded by Once
unsafe impl<T: Send + Sync> Sync for OnceCell<T> {}

impl<T> OnceCell<T> {
    pub(crate) const fn new() -> Self {
        Self {
            once: Once::new(),
            cell: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    pub(crate) fn get_or_init(&self, f: impl FnOnce() -> T) -> &T {
        self.once.call_once(|| {
            unsafe { &mut *self.cell.get() }.write(f());
        });
        unsafe { (*self.cell.get()).assume_init_ref() }
    }

    /// Stores `value` unless the cell is already initialized,
    /// in which case `value` is handed back
    pub(crate) fn set(&self, value: T) -> Result<&T, T> {
        let mut value = Some(value);
        self.once.call_once(|| {
            if let Some(value) = value.take() {
                unsafe { &mut *self.cell.get() }.write(value);
            }
        });
        // the value is consumed only by the call that initialized the cell
        match value {
            None => Ok(unsafe { (*self.cell.get()).assume_init_ref() }),
            Some(value) => Err(value),
        }
    }

    pub(crate) fn get(&self) -> Option<&T> {
        if self.once.state().done() {
            Some(unsafe { (*self.cell.get()).assume_init_ref() })
        } else {
            None
        }
    }
}

impl<T> Drop for OnceCell<T> {
    fn drop(&mut self) {
        if self.once.state().done() {
            unsafe { self.cell.get_mut().assume_init_drop() };
        }
    }
}
