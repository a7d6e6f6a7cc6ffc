use crate::selection::{Operation, Owner};
use crate::story::UserStory;

/// A named group of user stories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Epic {
    name: String,
    stories: Vec<UserStory>,
}

impl Epic {
    /// Name given to epics grouped without one.
    pub const UNNAMED: &'static str = "Unnamed epic";

    pub fn new(name: impl Into<String>, stories: Vec<UserStory>) -> Self {
        Self {
            name: name.into(),
            stories,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename_as(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn append(&mut self, story: UserStory) -> &mut Self {
        self.stories.push(story);
        self
    }

    pub fn stories(&self) -> &[UserStory] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}

impl Owner for Epic {
    type Item = UserStory;

    fn owner_name(&self) -> &'static str {
        "Epic"
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::UserStory]
    }

    fn to_values(&self) -> Vec<UserStory> {
        self.stories.clone()
    }
}
