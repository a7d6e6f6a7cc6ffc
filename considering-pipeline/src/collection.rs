use crate::store::StatementStore;
use crate::Result;
use considering_grammar::{Epic, Operation, Owner, Statement, UserStory};
use tracing::warn;

/// The user stories of a batch, with the statements that failed validation
/// kept aside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoryCollection {
    stories: Vec<UserStory>,
    invalid: Vec<Statement>,
}

impl StoryCollection {
    pub fn from_statements(statements: impl IntoIterator<Item = Statement>) -> Self {
        let mut collection = Self::default();
        for statement in statements {
            match statement.convert_to_user_story() {
                Ok(story) => collection.stories.push(story),
                Err(err) => {
                    warn!(%err, "User story is invalid");
                    collection.invalid.push(statement);
                }
            }
        }
        collection
    }

    /// Reads `store` and collects its stories.
    pub fn from_store(store: &mut StatementStore) -> Result<Self> {
        Ok(Self::from_statements(store.read()?.iter().cloned()))
    }

    pub fn stories(&self) -> &[UserStory] {
        &self.stories
    }

    pub fn invalid_statements(&self) -> &[Statement] {
        &self.invalid
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Turns the valid stories into an epic.
    pub fn into_epic(self, name: impl Into<String>) -> Epic {
        Epic::new(name, self.stories)
    }
}

impl Owner for StoryCollection {
    type Item = UserStory;

    fn owner_name(&self) -> &'static str {
        "StoryCollection"
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::UserStory]
    }

    fn to_values(&self) -> Vec<UserStory> {
        self.stories.clone()
    }
}
