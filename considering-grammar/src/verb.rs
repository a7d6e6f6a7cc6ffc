use crate::error::StoryError;

const MODAL_VERBS: &[&str] = &[
    "must", "shall", "will", "should", "would", "can", "could", "may", "might",
];
const AUXILIARY_VERBS: &[&str] = &["be", "do", "have"];
const OTHER_VERBS: &[&str] = &["want", "record"];

/// The closed partition of known verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerbClass {
    /// Expresses necessity or possibility: must, shall, can, ...
    Modal,
    /// be, do, have
    Auxiliary,
    Other,
}

impl VerbClass {
    pub const ALL: [VerbClass; 3] = [VerbClass::Modal, VerbClass::Auxiliary, VerbClass::Other];

    /// Returns the words of this class.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            VerbClass::Modal => MODAL_VERBS,
            VerbClass::Auxiliary => AUXILIARY_VERBS,
            VerbClass::Other => OTHER_VERBS,
        }
    }

    pub fn contains(self, word: &str) -> bool {
        self.words().contains(&word)
    }

    /// Classifies a word, if it is a known verb.
    pub fn of(word: &str) -> Option<VerbClass> {
        Self::ALL.into_iter().find(|class| class.contains(word))
    }
}

impl std::fmt::Display for VerbClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            VerbClass::Modal => "modal",
            VerbClass::Auxiliary => "auxiliary",
            VerbClass::Other => "other",
        })
    }
}

/// Returns true if the word belongs to any verb class.
pub fn is_verb(word: &str) -> bool {
    VerbClass::of(word).is_some()
}

/// A word known to belong to a given verb class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verb {
    value: String,
    class: VerbClass,
}

impl Verb {
    /// Checks `value` against `class`.
    pub fn new(value: impl Into<String>, class: VerbClass) -> Result<Self, StoryError> {
        let value = value.into();
        if !class.contains(&value) {
            return Err(StoryError::InvalidVerb { value, class });
        }
        Ok(Self { value, class })
    }

    pub fn modal(value: impl Into<String>) -> Result<Self, StoryError> {
        Self::new(value, VerbClass::Modal)
    }

    pub fn auxiliary(value: impl Into<String>) -> Result<Self, StoryError> {
        Self::new(value, VerbClass::Auxiliary)
    }

    pub fn other(value: impl Into<String>) -> Result<Self, StoryError> {
        Self::new(value, VerbClass::Other)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn class(&self) -> VerbClass {
        self.class
    }
}
