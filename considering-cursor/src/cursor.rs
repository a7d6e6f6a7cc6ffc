use considering_common::{ConsiderError, Sequence};
use std::fmt::Display;

/// A bidirectional cursor over a shared sequence of tokens.
///
/// The cursor starts before the first value (pointer `-1`) so the first call
/// to [`Cursor::next`] selects index 0. Movement saturates: the pointer never
/// leaves `[-1, len - 1]`, and stepping past either end leaves it where it is.
///
/// Every step taken by `next`/`prev` records the value it lands on. That
/// history is what [`Cursor::range_until`] joins into text.
#[derive(Debug, Clone)]
pub struct Cursor<T> {
    sequence: Sequence<T>,
    pointer: isize,
    history: Vec<T>,
}

impl<T: Clone> Cursor<T> {
    /// Creates a cursor positioned before the first value.
    pub fn new(sequence: impl Into<Sequence<T>>) -> Self {
        Self {
            sequence: sequence.into(),
            pointer: -1,
            history: Vec::new(),
        }
    }

    /// Returns the shared sequence the cursor walks.
    pub fn sequence(&self) -> &Sequence<T> {
        &self.sequence
    }

    /// Returns the raw pointer, `-1` before the first step.
    pub fn pointer(&self) -> isize {
        self.pointer
    }

    /// Returns the current index, or `None` before the first step.
    pub fn position(&self) -> Option<usize> {
        usize::try_from(self.pointer).ok()
    }

    /// Returns the number of values in the sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the sequence holds no value.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Values visited since the last scan started.
    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Moves the cursor forward by one value.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &mut Self {
        self.next_by(1)
    }

    /// Moves the cursor forward by up to `n` values, stopping at the last one.
    ///
    /// Every step is recorded, including the ones that could not move.
    pub fn next_by(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if !self.is_last() {
                self.pointer += 1;
            }
            self.record();
        }
        self
    }

    /// Moves the cursor back by one value.
    pub fn prev(&mut self) -> &mut Self {
        self.prev_by(1)
    }

    /// Moves the cursor back by up to `n` values, stopping at the first one.
    pub fn prev_by(&mut self, n: usize) -> &mut Self {
        for _ in 0..n {
            if self.pointer > 0 {
                self.pointer -= 1;
            }
            self.record();
        }
        self
    }

    fn record(&mut self) {
        if let Some(value) = self.value().cloned() {
            self.history.push(value);
        }
    }

    /// Returns true if the cursor points at index 0.
    ///
    /// A fresh cursor is not "first": it points before the first value.
    pub fn is_first(&self) -> bool {
        self.pointer == 0
    }

    /// Returns true if the cursor points at the last index.
    ///
    /// On an empty sequence the sentinel is also the last position.
    pub fn is_last(&self) -> bool {
        self.pointer == self.sequence.len() as isize - 1
    }

    pub fn has_next(&self) -> bool {
        !self.is_last()
    }

    pub fn has_prev(&self) -> bool {
        !self.is_first()
    }

    /// Returns the value after the current one without moving.
    pub fn peek(&self) -> Option<&T> {
        self.sequence.get((self.pointer + 1) as usize)
    }

    /// Returns the current value, or `None` before the first step.
    pub fn value(&self) -> Option<&T> {
        self.position().and_then(|index| self.sequence.get(index))
    }

    /// Forgets the position and the history.
    pub fn reset(&mut self) {
        self.pointer = -1;
        self.history.clear();
    }

    /// Advances once, then hands the cursor to `check` for further assertions.
    pub fn followed_by<F, E>(&mut self, check: F) -> Result<&mut Self, E>
    where
        F: FnOnce(&mut Self) -> Result<(), E>,
    {
        self.next();
        check(&mut *self)?;
        Ok(self)
    }

    /// Scans forward until the current value equals `target`.
    ///
    /// The scan is a single forward pass starting after the current position.
    /// Returns `false` when the end is reached without a match; the cursor is
    /// then left on the last value.
    pub fn seek_to<Q>(&mut self, target: &Q) -> bool
    where
        T: PartialEq<Q>,
        Q: ?Sized,
    {
        self.history.clear();
        while self.has_next() {
            self.next();
            if self.value().is_some_and(|value| value == target) {
                return true;
            }
        }
        false
    }
}

impl<T> Cursor<T>
where
    T: Clone + Display,
{
    /// Asserts that the current value equals `expected`.
    pub fn is<Q>(&mut self, expected: &Q) -> Result<&mut Self, ConsiderError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        if self.value().is_some_and(|value| value == expected) {
            return Ok(self);
        }
        let actual = self.value().map(ToString::to_string);
        Err(ConsiderError::expected(expected.to_string(), actual.as_deref()))
    }

    /// Asserts that the current value differs from `unexpected`.
    ///
    /// A cursor with no current value passes.
    pub fn is_not<Q>(&mut self, unexpected: &Q) -> Result<&mut Self, ConsiderError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        if self.value().is_some_and(|value| value == unexpected) {
            return Err(ConsiderError::unexpected(unexpected.to_string()));
        }
        Ok(self)
    }

    /// Advances once and asserts the new value equals `expected`.
    pub fn next_is<Q>(&mut self, expected: &Q) -> Result<&mut Self, ConsiderError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        self.next().is(expected)
    }

    /// Advances once and asserts the new value differs from `unexpected`.
    pub fn next_is_not<Q>(&mut self, unexpected: &Q) -> Result<&mut Self, ConsiderError>
    where
        T: PartialEq<Q>,
        Q: Display + ?Sized,
    {
        self.next().is_not(unexpected)
    }
}

impl<T> Cursor<T>
where
    T: Clone + PartialEq + AsRef<str>,
{
    /// Walks forward to the position of `other` and returns the values visited
    /// on the way, joined by spaces.
    ///
    /// From index `i` to a target at `j > i` this yields the values
    /// `i + 1 ..= j`. A target at or behind the cursor yields an empty string.
    pub fn range_until(&mut self, other: &Cursor<T>) -> Result<String, ConsiderError> {
        if !self.sequence.same_contents(&other.sequence) {
            return Err(ConsiderError::IncompatibleCursor);
        }

        self.history.clear();
        while self.pointer < other.pointer && self.has_next() {
            self.next();
        }
        Ok(join(&self.history))
    }

    /// Joins the current value and everything after it, moving the cursor to
    /// the end.
    pub fn tail(&mut self) -> String {
        self.collect_tail(None)
    }

    /// Like [`Cursor::tail`] but stops before the first `stop` value after
    /// the starting one. The cursor is left on `stop`.
    pub fn tail_until(&mut self, stop: &str) -> String {
        self.collect_tail(Some(stop))
    }

    fn collect_tail(&mut self, stop: Option<&str>) -> String {
        let mut result = self
            .value()
            .map(|value| value.as_ref().to_owned())
            .unwrap_or_default();

        while self.has_next() {
            self.next();
            let Some(value) = self.value() else {
                break;
            };
            let value = value.as_ref();
            // Before the first step there is nothing to separate from.
            if result.is_empty() {
                result.push_str(value);
                continue;
            }
            if stop == Some(value) {
                break;
            }
            result.push(' ');
            result.push_str(value);
        }
        result
    }
}

fn join<T: AsRef<str>>(values: &[T]) -> String {
    values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
