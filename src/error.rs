use crate::CallbackError;
use thiserror::Error;

/// This enumeration is the list of the possible error outcomes of the
/// [legacy trigger](crate::legacy::trigger) and the
/// [default registry initialization](crate::channel::init)
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// A subscriber of `event` failed, remaining subscribers were skipped
    #[error("{event} callback threw exception: {source}")]
    Callback {
        /// Name of the triggered event
        event: String,
        /// The error returned by the subscriber
        source: CallbackError,
    },
    /// The default registry was created before [init](crate::channel::init)
    #[error("default registry is already initialized")]
    AlreadyInitialized,
}
