//! Grammar extraction over user-story sentences.
//!
//! A [`Statement`] is any sentence. Statements written as
//! `As a <user>, I want to <action> so that <purpose>` convert into a
//! [`UserStory`], whose slots and [`Correlation`] can be queried. Every
//! content-owning type exposes the same selection surface through
//! [`Owner::select`].

pub mod correlation;
pub mod epic;
pub mod error;
pub mod extractor;
pub mod rules;
pub mod selection;
pub mod slot;
pub mod statement;
pub mod story;
pub mod traits;
pub mod verb;

pub use considering_common::{ConsiderError, Span, Tag, TagOrString, Tagged};
pub use considering_cursor::Cursor;
pub use correlation::Correlation;
pub use epic::Epic;
pub use error::StoryError;
pub use extractor::{Extraction, StoryExtractor};
pub use rules::{ActionRule, PurposeRule, UserRule};
pub use selection::{
    Determiner, LineOperations, Operation, Owner, Selection, StoryOperations, Strategy, Where,
    WordOperations,
};
pub use slot::{Absent, AbsentReason, Slot, SlotKind};
pub use statement::Statement;
pub use story::UserStory;
pub use traits::SlotRule;
pub use verb::{is_verb, Verb, VerbClass};
