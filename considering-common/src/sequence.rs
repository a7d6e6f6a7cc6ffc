use std::ops::Deref;
use std::sync::Arc;

/// Immutable, shared sequence of values.
///
/// Cursors keep an `Arc<[T]>` alive so that any number of them can walk the
/// same tokens without copying. The sequence is never mutated once built.
#[derive(Debug)]
pub struct Sequence<T> {
    values: Arc<[T]>,
}

impl<T> Sequence<T> {
    /// Creates a sequence from owned values.
    pub fn new(values: Vec<T>) -> Self {
        Self {
            values: Arc::from(values),
        }
    }

    /// Creates a sequence from an existing shared buffer.
    pub fn with_arc(values: Arc<[T]>) -> Self {
        Self { values }
    }

    /// Returns the underlying shared buffer.
    pub fn shared(&self) -> Arc<[T]> {
        Arc::clone(&self.values)
    }

    /// Returns `true` if both sequences share one buffer.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if both sequences hold the same values, shared or not.
    pub fn same_contents(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.values[..] == other.values[..]
    }
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::new(values)
    }
}

impl<T> From<Arc<[T]>> for Sequence<T> {
    fn from(values: Arc<[T]>) -> Self {
        Self::with_arc(values)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_contents(other)
    }
}

impl<T: Eq> Eq for Sequence<T> {}
