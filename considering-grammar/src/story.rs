use crate::correlation::Correlation;
use crate::epic::Epic;
use crate::error::StoryError;
use crate::slot::Slot;
use crate::statement::Statement;
use considering_common::Tagged;

/// A statement validated against the user-story grammar, with its slots.
///
/// Only built through [`UserStory::try_from`] (or the helpers that call it),
/// so every value has all three slots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserStory {
    statement: Statement,
    user: Slot,
    action: Slot,
    purpose: Slot,
}

impl UserStory {
    /// Validates `text` as a user story.
    pub fn parse(text: &str) -> Result<Self, StoryError> {
        Self::try_from(Statement::new(text))
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn into_statement(self) -> Statement {
        self.statement
    }

    pub fn user(&self) -> &Slot {
        &self.user
    }

    pub fn action(&self) -> &Slot {
        &self.action
    }

    pub fn purpose(&self) -> &Slot {
        &self.purpose
    }

    pub fn correlations(&self) -> Result<Correlation, StoryError> {
        Correlation::of(self)
    }

    /// Puts this story and `other` into a new unnamed epic.
    pub fn group_with(self, other: UserStory) -> Epic {
        Epic::new(Epic::UNNAMED, vec![self, other])
    }
}

impl TryFrom<Statement> for UserStory {
    type Error = StoryError;

    fn try_from(statement: Statement) -> Result<Self, Self::Error> {
        match statement.extractor().extract() {
            Ok(extraction) => Ok(Self {
                statement,
                user: extraction.user,
                action: extraction.action,
                purpose: extraction.purpose,
            }),
            Err(absent) => Err(StoryError::GrammarMismatch {
                statement: Box::new(statement),
                absent,
            }),
        }
    }
}

impl std::fmt::Display for UserStory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.statement, f)
    }
}

impl Tagged for UserStory {
    fn has_tag(&self, value: &str) -> bool {
        self.statement.has_tag(value)
    }

    fn tag_values(&self) -> Vec<String> {
        self.statement.tag_values()
    }
}
