use std::{
    any::{self, Any},
    fmt,
    slice,
    sync::Arc,
};

/// A single dynamically typed trigger argument
///
/// The value is shared, so cloning an `Arg` never clones the payload
#[derive(Clone)]
pub struct Arg {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl Arg {
    /// Wraps a value into an argument
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
            type_name: any::type_name::<T>(),
        }
    }

    /// Returns a reference to the value if it is of type `T`
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Checks whether the value is of type `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Name of the wrapped type, for diagnostics only
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arg<{}>", self.type_name)
    }
}

/// Ordered list of arguments passed to every subscriber of a trigger
///
/// `Args` is immutable once built; clones share the same list
#[derive(Clone)]
pub struct Args {
    inner: Arc<[Arg]>,
}

impl Args {
    /// Builds an argument list
    pub fn new(args: Vec<Arg>) -> Self {
        Self { inner: args.into() }
    }

    /// The empty argument list
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if there are no arguments
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the argument at `index`
    pub fn arg(&self, index: usize) -> Option<&Arg> {
        self.inner.get(index)
    }

    /// Returns the value at `index` if it exists and is of type `T`
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.arg(index).and_then(Arg::get)
    }

    /// Iterates over the arguments in order
    pub fn iter(&self) -> slice::Iter<'_, Arg> {
        self.inner.iter()
    }

    /// Returns `true` if both values share the same underlying list
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl Default for Args {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.iter()).finish()
    }
}

impl From<Vec<Arg>> for Args {
    fn from(args: Vec<Arg>) -> Self {
        Self::new(args)
    }
}

impl FromIterator<Arg> for Args {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn typed_access() {
        let args = crate::args![1i32, "two", String::from("three")];
        assert_eq!(args.len(), 3);
        assert_eq!(args.get::<i32>(0), Some(&1));
        assert_eq!(args.get::<&str>(1), Some(&"two"));
        assert_eq!(args.get::<String>(2).map(String::as_str), Some("three"));
        assert_eq!(args.get::<i64>(0), None);
        assert!(args.arg(3).is_none());
        assert!(args.arg(1).unwrap().is::<&str>());
    }

    #[test]
    fn clones_share_list() {
        let args = crate::args![1u8];
        let copy = args.clone();
        assert!(Args::ptr_eq(&args, &copy));
        assert!(!Args::ptr_eq(&args, &crate::args![1u8]));
    }

    #[test]
    fn empty_list() {
        let args = crate::args![];
        assert!(args.is_empty());
        assert_eq!(format!("{:?}", args), "[]");
        assert_eq!(format!("{:?}", crate::args![7u16]), "[Arg<u16>]");
    }
}
