use crate::error::StoryError;
use crate::story::UserStory;

/// How the parts of a user story relate to each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Correlation {
    /// The verb right after `I`
    pub action: String,
    /// Words between the verb and `so that`
    pub action_clause: String,
    /// Everything after `so that`
    pub purpose_clause: String,
    /// The user word wherever it appears again, action clause first
    pub user_mentions: Vec<String>,
}

impl Correlation {
    pub fn of(story: &UserStory) -> Result<Self, StoryError> {
        let action_clause = story.statement().extractor().action_clause()?;
        let purpose_clause = story.purpose().text().to_owned();

        let user = story.user().text();
        let user_mentions = action_clause
            .split(' ')
            .chain(purpose_clause.split(' '))
            .filter(|word| *word == user)
            .map(str::to_owned)
            .collect();

        Ok(Self {
            action: story.action().text().to_owned(),
            action_clause,
            purpose_clause,
            user_mentions,
        })
    }

    pub fn mentions_user(&self) -> bool {
        !self.user_mentions.is_empty()
    }
}
