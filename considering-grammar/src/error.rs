use crate::slot::Absent;
use crate::statement::Statement;
use crate::verb::VerbClass;
use considering_common::ConsiderError;
use thiserror::Error;

/// The error type of grammar extraction and story conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoryError {
    /// A statement was converted to a user story but one of its slots is absent
    #[error("The statement {:?} is not in a user story format: {absent}", .statement.contents())]
    GrammarMismatch {
        statement: Box<Statement>,
        absent: Absent,
    },

    /// A word was classified as a verb of a class it does not belong to
    #[error("'{value}' is not a valid {class} verb")]
    InvalidVerb { value: String, class: VerbClass },

    /// A slot needed to derive a clause is absent
    #[error(transparent)]
    Slot(#[from] Absent),

    /// A cursor or a selection binding was misused
    #[error(transparent)]
    Consider(#[from] ConsiderError),
}

impl StoryError {
    /// Returns the offending statement of a grammar mismatch.
    pub fn statement(&self) -> Option<&Statement> {
        match self {
            StoryError::GrammarMismatch { statement, .. } => Some(&**statement),
            _ => None,
        }
    }
}
