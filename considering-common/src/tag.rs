/// A label attached to statements, e.g. `"User Story"` or `"Invalid"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tag {
    value: String,
}

impl Tag {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Returns the tag's text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns `true` if `value` matches the tag's text.
    pub fn equals(&self, value: &str) -> bool {
        self.value == value
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Tag argument accepted at API boundaries: either a [`Tag`] or its raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOrString {
    Tag(Tag),
    Text(String),
}

impl TagOrString {
    /// Resolves the argument to the tag's text.
    pub fn into_value(self) -> String {
        match self {
            TagOrString::Tag(tag) => tag.value,
            TagOrString::Text(text) => text,
        }
    }

    /// Borrows the tag's text.
    pub fn as_str(&self) -> &str {
        match self {
            TagOrString::Tag(tag) => tag.value(),
            TagOrString::Text(text) => text,
        }
    }
}

impl From<Tag> for TagOrString {
    fn from(tag: Tag) -> Self {
        TagOrString::Tag(tag)
    }
}

impl From<&Tag> for TagOrString {
    fn from(tag: &Tag) -> Self {
        TagOrString::Tag(tag.clone())
    }
}

impl From<String> for TagOrString {
    fn from(text: String) -> Self {
        TagOrString::Text(text)
    }
}

impl From<&str> for TagOrString {
    fn from(text: &str) -> Self {
        TagOrString::Text(text.to_owned())
    }
}

/// Anything that can carry tags.
///
/// Selection by tag only needs these two queries from the tagged value.
pub trait Tagged {
    /// Returns `true` if one of the tags has this text.
    fn has_tag(&self, value: &str) -> bool;

    /// Returns the text of every tag, in insertion order.
    fn tag_values(&self) -> Vec<String>;
}

/// Bare words never carry tags.
impl Tagged for String {
    fn has_tag(&self, _value: &str) -> bool {
        false
    }

    fn tag_values(&self) -> Vec<String> {
        Vec::new()
    }
}
