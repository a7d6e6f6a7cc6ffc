/// Half-open range of token positions inside a token sequence.
///
/// Grammar slots record where they were found so callers can map a slot back
/// onto the tokens of its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Index of the first token
    pub start: usize,
    /// Index one past the last token
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Creates a span covering the single token at `index`.
    pub fn at(index: usize) -> Self {
        Self {
            start: index,
            end: index + 1,
        }
    }

    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no token.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if the token at `index` lies inside the span.
    pub fn contains(&self, index: usize) -> bool {
        (self.start..self.end).contains(&index)
    }
}
