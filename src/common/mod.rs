mod args;
mod once_cell;
mod subscribers;

pub use args::{Arg, Args};
pub(crate) use once_cell::OnceCell;
pub(crate) use subscribers::Subscribers;

#[cfg(test)]
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
