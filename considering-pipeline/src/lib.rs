//! Batches of statements on disk, and what they add up to.
//!
//! A [`StatementStore`] reads and appends statements as plain lines or as a
//! JSON array keeping their tags. A [`Summary`] counts the user stories of a
//! batch; a [`StoryCollection`] keeps the valid ones apart from the rest.

pub mod collection;
pub mod error;
pub mod store;
pub mod summary;

pub use collection::StoryCollection;
pub use error::PipelineError;
pub use store::{StatementStore, StoreFormat};
pub use summary::{Summary, Totals};

/// Result type of the pipeline layer.
pub type Result<T> = std::result::Result<T, PipelineError>;
