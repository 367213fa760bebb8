#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_panics_doc)]

//! Synchronous named-event publish/subscribe library
//!
//! Two independent APIs are provided:
//! - [channel]: a [Registry](channel::Registry) of named
//!   [Channel](channel::Channel)s that remember their last trigger,
//!   with a process-wide default reachable through [get],
//! - [legacy]: the [subscribe], [trigger] and [unsubscribe] functions
//!   working on their own mapping.
//!
//! ```rust
//! use named_events::{args, Callback};
//!
//! let greet = Callback::new(|args| {
//!     println!("hello {}", args.get::<&str>(0).unwrap_or(&"nobody"));
//!     Ok(())
//! });
//!
//! let subscription = named_events::get("greet").subscribe(greet.clone());
//! named_events::get("greet").trigger(args!["world"]).unwrap();
//! assert!(subscription.unsubscribe());
//!
//! assert!(named_events::subscribe("greet", greet.clone()));
//! named_events::trigger("greet", args!["again"]).unwrap();
//! assert!(named_events::unsubscribe("greet", &greet));
//! ```

mod common;

pub mod bus;
pub mod callback;
pub mod channel;
mod error;
pub mod legacy;

pub use bus::EventBus;
pub use callback::{Callback, CallbackError, Flow};
pub use channel::get;
pub use common::{Arg, Args};
pub use error::Error;
pub use legacy::{subscribe, trigger, unsubscribe};


/// An event declared with [declare!]
pub trait NamedEvent: Sized + 'static {
    /// Channel name of this event
    const NAME: &'static str;
}

/// Returns the default registry channel of a declared event
pub fn channel_of<E: NamedEvent>() -> channel::Channel {
    channel::get(E::NAME)
}

/// Builds [Args] from plain values
///
/// ```rust
/// let args = named_events::args![1, "two", 3.0f64];
/// assert_eq!(args.get::<&str>(1), Some(&"two"));
/// assert!(named_events::args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::Args::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Args::new(vec![$($crate::Arg::new($value)),+])
    };
}

/// Declare [NamedEvent] types bound to the default registry
///
/// ## Syntax
///
/// `<visibility>? event <name>;` \
/// `<visibility>? event <name> = "<channel name>";`
///
/// Without an explicit channel name the type name is used
///
///
/// ## Example
///
/// ```rust
/// named_events::declare! {
///    /// E1 event
///    event E1;
///    /// E2 event
///    pub(crate) event E2 = "app.e2";
///    /// E3 event
///    pub event E3 = "app.e3";
/// }
///
/// let _ = E2::subscribe(named_events::Callback::new(|_| Ok(())));
/// E2::trigger(named_events::args![1]).unwrap();
/// assert_eq!(E2::channel().name(), "app.e2");
/// assert_eq!(<E1 as named_events::NamedEvent>::NAME, "E1");
/// ```
#[macro_export]
macro_rules! declare {
    () => {};

    (
        $(#[$attr:meta])*
        $v:vis event $name:ident $(= $channel:literal)?;
        $($next:tt)*
    ) => {
        $(#[$attr])*
        $v struct $name;

        impl $crate::NamedEvent for $name {
            const NAME: &'static str = $crate::declare!(@name $name $($channel)?);
        }

        impl $name {
            #[doc = concat!("Returns the channel of ", stringify!($name))]
            #[allow(dead_code)]
            $v fn channel() -> $crate::channel::Channel {
                $crate::channel_of::<$name>()
            }

            #[doc = concat!("Subscribes a callback to ", stringify!($name))]
            #[allow(dead_code)]
            $v fn subscribe(callback: $crate::Callback) -> $crate::channel::Subscription {
                $crate::channel_of::<$name>().subscribe(callback)
            }

            #[doc = concat!("Triggers ", stringify!($name))]
            #[allow(dead_code)]
            $v fn trigger(args: $crate::Args) -> ::std::result::Result<(), $crate::CallbackError> {
                $crate::channel_of::<$name>().trigger(args)
            }
        }

        $crate::declare!($($next)*);
    };

    (@name $name:ident) => { stringify!($name) };
    (@name $name:ident $channel:literal) => { $channel };
}
