use considering_common::{ConsiderError, Span};
use thiserror::Error;

/// The three parts of the user-story grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlotKind {
    User,
    Action,
    Purpose,
}

impl SlotKind {
    /// Slots in the order a sentence reads.
    pub const ALL: [SlotKind; 3] = [SlotKind::User, SlotKind::Action, SlotKind::Purpose];
}

impl std::fmt::Display for SlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SlotKind::User => "user",
            SlotKind::Action => "action",
            SlotKind::Purpose => "purpose",
        })
    }
}

/// A grammar slot found in a sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    kind: SlotKind,
    span: Span,
    text: String,
}

impl Slot {
    pub fn new(kind: SlotKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Token positions the slot covers.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Why a probe did not find its slot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AbsentReason {
    /// An anchor word did not match
    #[error(transparent)]
    Mismatch(#[from] ConsiderError),

    /// The scan reached the end without meeting the anchor
    #[error("anchor {0:?} not found")]
    AnchorNotFound(&'static str),

    /// The anchor is the last word of the sentence
    #[error("nothing follows {0:?}")]
    NothingFollows(&'static str),

    /// The word after the anchor is not a known verb
    #[error("{0:?} is not a known verb")]
    NotAVerb(String),

    /// The slot is not directly followed by the next anchor
    #[error("{value:?} is not followed by {anchor:?}")]
    NotFollowedBy { value: String, anchor: &'static str },
}

/// A slot that a probe could not find.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} slot is absent: {reason}")]
pub struct Absent {
    pub kind: SlotKind,
    pub reason: AbsentReason,
}

impl Absent {
    pub fn new(kind: SlotKind, reason: impl Into<AbsentReason>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}
