//! # Subscriber callbacks

use crate::Args;
use std::{fmt, sync::Arc};

/// Failure raised by a callback
///
/// Any error type converts into it with `?` or `.into()`
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

type RawCallback = dyn Fn(&Args) -> Result<Flow, CallbackError> + Send + Sync;

/// What a callback asks the trigger to do next
///
/// Only the [legacy](crate::legacy) trigger honours [`Flow::Stop`],
/// a [Channel](crate::channel::Channel) always delivers to everyone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep calling the remaining callbacks
    Continue,
    /// Skip the remaining callbacks of this trigger
    Stop,
}

impl From<()> for Flow {
    fn from(_: ()) -> Self {
        Flow::Continue
    }
}

impl From<bool> for Flow {
    fn from(proceed: bool) -> Self {
        if proceed {
            Flow::Continue
        } else {
            Flow::Stop
        }
    }
}

/// Shared handle to a subscriber function
///
/// Clones refer to the same subscriber. Equality is identity:
/// two callbacks created from the same code are still different subscribers
#[derive(Clone)]
pub struct Callback {
    inner: Arc<RawCallback>,
}

impl Callback {
    /// Wraps a function into a subscriber
    ///
    /// ```rust
    /// use named_events::{Callback, Flow};
    ///
    /// let log = Callback::new(|args| {
    ///     println!("{:?}", args);
    ///     Ok(())
    /// });
    /// let guard = Callback::new(|args| Ok(args.get::<bool>(0).copied().unwrap_or(true)));
    /// let stop = Callback::new(|_| Ok(Flow::Stop));
    /// # let _ = (log, guard, stop);
    /// ```
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Args) -> Result<R, CallbackError> + Send + Sync + 'static,
        R: Into<Flow>,
    {
        Self {
            inner: Arc::new(move |args: &Args| -> Result<Flow, CallbackError> {
                f(args).map(Into::into)
            }),
        }
    }

    /// Returns `true` if both handles refer to the same subscriber
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    pub(crate) fn call(&self, args: &Args) -> Result<Flow, CallbackError> {
        (self.inner)(args)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:p})", self.addr())
    }
}
