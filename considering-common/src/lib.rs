//! Considering Common
//!
//! Shared vocabulary of the cursor and grammar crates: error kinds, token
//! spans, shared token sequences and tags.

pub mod error;
pub mod sequence;
pub mod span;
pub mod tag;

pub use error::{ConsiderError, Expectation};
pub use sequence::Sequence;
pub use span::Span;
pub use tag::{Tag, TagOrString, Tagged};
