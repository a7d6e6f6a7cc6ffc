use crate::error::StoryError;
use crate::extractor::StoryExtractor;
use crate::selection::{Operation, Owner};
use crate::slot::{Absent, Slot};
use crate::story::UserStory;
use considering_common::{Sequence, Tag, TagOrString, Tagged};
use considering_cursor::tokenize;

/// A sentence and the tags attached to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statement {
    contents: String,
    #[cfg_attr(feature = "serde", serde(default))]
    tags: Vec<String>,
}

impl Statement {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            tags: Vec::new(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) -> &mut Self {
        self.contents = contents.into();
        self
    }

    pub fn has_contents(&self) -> bool {
        !self.contents.is_empty()
    }

    /// Tokenizes the contents. Every call reads the text afresh.
    pub fn words(&self) -> Vec<String> {
        tokenize(&self.contents)
    }

    /// The words as a shared sequence, ready for cursors.
    pub fn tokens(&self) -> Sequence<String> {
        Sequence::new(self.words())
    }

    /// Byte offsets of every non-overlapping occurrence of `fragment`.
    pub fn find(&self, fragment: &str) -> Vec<usize> {
        if fragment.is_empty() {
            return Vec::new();
        }
        self.contents
            .match_indices(fragment)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, fragment: &str) -> usize {
        self.find(fragment).len()
    }

    /// Attaches a tag. Tagging twice with the same value keeps one tag.
    pub fn tag(&mut self, tag: impl Into<TagOrString>) -> &mut Self {
        let value = tag.into().into_value();
        if !self.has_tag(&value) {
            self.tags.push(value);
        }
        self
    }

    /// Builder form of [`Statement::tag`].
    pub fn tagged(mut self, tag: impl Into<TagOrString>) -> Self {
        self.tag(tag);
        self
    }

    pub fn untag(&mut self, value: &str) -> &mut Self {
        self.tags.retain(|tag| tag != value);
        self
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.tags.iter().cloned().map(Tag::new).collect()
    }

    pub fn extractor(&self) -> StoryExtractor {
        StoryExtractor::new(self.tokens())
    }

    pub fn probe_user(&self) -> Result<Slot, Absent> {
        self.extractor().probe_user()
    }

    pub fn probe_action(&self) -> Result<Slot, Absent> {
        self.extractor().probe_action()
    }

    pub fn probe_purpose(&self) -> Result<Slot, Absent> {
        self.extractor().probe_purpose()
    }

    pub fn has_user(&self) -> bool {
        self.probe_user().is_ok()
    }

    pub fn has_action(&self) -> bool {
        self.probe_action().is_ok()
    }

    pub fn has_purpose(&self) -> bool {
        self.probe_purpose().is_ok()
    }

    /// Returns true if the sentence reads `As a <user>, I want to <action> so that <purpose>`.
    pub fn is_user_story_format(&self) -> bool {
        self.extractor().is_valid_story()
    }

    /// Converts into a user story, keeping the statement in the error if it does not fit.
    pub fn convert_to_user_story(&self) -> Result<UserStory, StoryError> {
        UserStory::try_from(self.clone())
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.contents)
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.contents
    }
}

impl From<&str> for Statement {
    fn from(contents: &str) -> Self {
        Self::new(contents)
    }
}

impl From<String> for Statement {
    fn from(contents: String) -> Self {
        Self::new(contents)
    }
}

impl Tagged for Statement {
    fn has_tag(&self, value: &str) -> bool {
        self.tags.iter().any(|tag| tag == value)
    }

    fn tag_values(&self) -> Vec<String> {
        self.tags.clone()
    }
}

impl Owner for Statement {
    type Item = String;

    fn owner_name(&self) -> &'static str {
        "Statement"
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::Word]
    }

    fn to_values(&self) -> Vec<String> {
        self.words()
    }
}

/// A tag owns its own text but supports no operation.
impl Owner for Tag {
    type Item = String;

    fn owner_name(&self) -> &'static str {
        "Tag"
    }

    fn operations(&self) -> &'static [Operation] {
        &[]
    }

    fn to_values(&self) -> Vec<String> {
        vec![self.value().to_owned()]
    }
}
