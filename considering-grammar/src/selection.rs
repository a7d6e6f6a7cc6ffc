//! One query surface for every owner of content.
//!
//! ```text
//! statement.select().first().word()
//! store.select().each_tagged("User Story").line()
//! epic.select().last().user_story()
//! ```
//!
//! An owner declares which operations it supports; the capability traits make
//! the operation available only where the owner's item type fits it, and
//! invoking an undeclared one fails with [`ConsiderError::NotImplemented`].

use considering_common::{ConsiderError, TagOrString, Tagged};
use considering_cursor::Cursor;

use crate::statement::Statement;
use crate::story::UserStory;

/// A domain operation an owner can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Word,
    Line,
    UserStory,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Word => "word",
            Operation::Line => "line",
            Operation::UserStory => "userStory",
        }
    }
}

/// Something whose content can be selected from.
pub trait Owner {
    type Item: Clone + PartialEq + Tagged;

    /// Name used in error messages.
    fn owner_name(&self) -> &'static str;

    /// Operations this owner supports.
    fn operations(&self) -> &'static [Operation];

    /// The owner's content, in order.
    fn to_values(&self) -> Vec<Self::Item>;

    /// Starts a selection over the owner's content.
    fn select(&self) -> Where<'_, Self>
    where
        Self: Sized,
    {
        Where { owner: self }
    }
}

/// Which values a selection keeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    Each,
    First,
    Last,
    FilteredByTag(String),
}

impl Strategy {
    /// Computes the value set of this strategy.
    pub fn apply<T>(&self, values: Vec<T>) -> Selection<T>
    where
        T: Clone + Tagged,
    {
        let (values, cursor) = match self {
            Strategy::Each => (values, None),
            Strategy::First => {
                let mut cursor = Cursor::new(values);
                cursor.next();
                (cursor.value().cloned().into_iter().collect(), Some(cursor))
            }
            Strategy::Last => (values.into_iter().last().into_iter().collect(), None),
            Strategy::FilteredByTag(tag) => (
                values.into_iter().filter(|value| value.has_tag(tag)).collect(),
                None,
            ),
        };

        Selection {
            strategy: self.clone(),
            values,
            cursor,
        }
    }
}

/// The result of a selection.
///
/// `First` selections also carry the cursor that produced them, positioned on
/// the first value.
#[derive(Debug, Clone)]
pub struct Selection<T> {
    strategy: Strategy,
    values: Vec<T>,
    cursor: Option<Cursor<T>>,
}

impl<T> Selection<T> {
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn cursor(&self) -> Option<&Cursor<T>> {
        self.cursor.as_ref()
    }

    pub fn into_cursor(self) -> Option<Cursor<T>> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Picks the strategy of a selection.
#[derive(Debug)]
pub struct Where<'a, O> {
    owner: &'a O,
}

impl<'a, O: Owner> Where<'a, O> {
    pub fn each(&self) -> Determiner<'a, O> {
        self.bind(Strategy::Each)
    }

    pub fn first(&self) -> Determiner<'a, O> {
        self.bind(Strategy::First)
    }

    pub fn last(&self) -> Determiner<'a, O> {
        self.bind(Strategy::Last)
    }

    /// Keeps the values carrying `tag`.
    pub fn each_tagged(&self, tag: impl Into<TagOrString>) -> Determiner<'a, O> {
        self.bind(Strategy::FilteredByTag(tag.into().into_value()))
    }

    fn bind(&self, strategy: Strategy) -> Determiner<'a, O> {
        Determiner {
            owner: self.owner,
            strategy,
        }
    }
}

/// An owner bound to a strategy, waiting for the operation to run.
#[derive(Debug)]
pub struct Determiner<'a, O> {
    owner: &'a O,
    strategy: Strategy,
}

impl<O: Owner> Determiner<'_, O> {
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Applies the strategy without checking any operation.
    pub fn values(&self) -> Selection<O::Item> {
        self.strategy.apply(self.owner.to_values())
    }

    /// Runs `operation` if the owner declared it.
    pub fn invoke(&self, operation: Operation) -> Result<Selection<O::Item>, ConsiderError> {
        if !self.owner.operations().contains(&operation) {
            return Err(ConsiderError::NotImplemented {
                operation: operation.name(),
                owner: self.owner.owner_name(),
            });
        }
        Ok(self.values())
    }
}

/// Selection of words.
pub trait WordOperations {
    fn word(&self) -> Result<Selection<String>, ConsiderError>;
}

/// Selection of statements.
pub trait LineOperations {
    fn line(&self) -> Result<Selection<Statement>, ConsiderError>;
}

/// Selection of user stories.
pub trait StoryOperations {
    fn user_story(&self) -> Result<Selection<UserStory>, ConsiderError>;
}

impl<O: Owner<Item = String>> WordOperations for Determiner<'_, O> {
    fn word(&self) -> Result<Selection<String>, ConsiderError> {
        self.invoke(Operation::Word)
    }
}

impl<O: Owner<Item = Statement>> LineOperations for Determiner<'_, O> {
    fn line(&self) -> Result<Selection<Statement>, ConsiderError> {
        self.invoke(Operation::Line)
    }
}

impl<O: Owner<Item = UserStory>> StoryOperations for Determiner<'_, O> {
    fn user_story(&self) -> Result<Selection<UserStory>, ConsiderError> {
        self.invoke(Operation::UserStory)
    }
}
