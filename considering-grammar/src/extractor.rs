use crate::error::StoryError;
use crate::rules::{ActionRule, PurposeRule, UserRule};
use crate::slot::{Absent, AbsentReason, Slot, SlotKind};
use crate::traits::SlotRule;
use considering_common::{ConsiderError, Sequence};
use considering_cursor::{tokenize, Cursor};
use tracing::{debug, trace};

/// The three slots of a sentence that follows the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub user: Slot,
    pub action: Slot,
    pub purpose: Slot,
}

/// Runs the slot rules over one tokenized sentence.
///
/// Every probe starts from a fresh cursor over the shared tokens, so probes
/// can be asked in any order and never see each other's position.
#[derive(Debug, Clone)]
pub struct StoryExtractor {
    tokens: Sequence<String>,
}

impl StoryExtractor {
    pub fn new(tokens: impl Into<Sequence<String>>) -> Self {
        Self {
            tokens: tokens.into(),
        }
    }

    /// Tokenizes `text` and creates an extractor over it.
    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    pub fn tokens(&self) -> &Sequence<String> {
        &self.tokens
    }

    /// A cursor moved onto the first token, where every scan starts.
    pub fn anchored_cursor(&self) -> Cursor<String> {
        let mut cursor = Cursor::new(self.tokens.clone());
        cursor.next();
        cursor
    }

    fn rule(kind: SlotKind) -> &'static dyn SlotRule {
        match kind {
            SlotKind::User => &UserRule,
            SlotKind::Action => &ActionRule,
            SlotKind::Purpose => &PurposeRule,
        }
    }

    /// Looks for one slot.
    pub fn probe(&self, kind: SlotKind) -> Result<Slot, Absent> {
        let rule = Self::rule(kind);
        let first = self.tokens.first().map(String::as_str);

        // Quick check optimization: skip the scan when the opening cannot match
        let result = if let Some(false) = rule.quick_check(first) {
            Err(Absent::new(
                kind,
                AbsentReason::Mismatch(ConsiderError::expected("As", first)),
            ))
        } else {
            rule.probe(&mut self.anchored_cursor())
        };

        match &result {
            Ok(slot) => trace!(%kind, text = slot.text(), "slot found"),
            Err(absent) => debug!(%kind, reason = %absent.reason, "slot absent"),
        }
        result
    }

    pub fn probe_user(&self) -> Result<Slot, Absent> {
        self.probe(SlotKind::User)
    }

    pub fn probe_action(&self) -> Result<Slot, Absent> {
        self.probe(SlotKind::Action)
    }

    pub fn probe_purpose(&self) -> Result<Slot, Absent> {
        self.probe(SlotKind::Purpose)
    }

    /// Returns true when all three slots are present.
    pub fn is_valid_story(&self) -> bool {
        SlotKind::ALL.into_iter().all(|kind| self.probe(kind).is_ok())
    }

    /// Reads all three slots, failing on the first absent one.
    pub fn extract(&self) -> Result<Extraction, Absent> {
        Ok(Extraction {
            user: self.probe_user()?,
            action: self.probe_action()?,
            purpose: self.probe_purpose()?,
        })
    }

    /// The words between the action verb and `so that`.
    ///
    /// For `... I want to be able to create user stories so that ...` this is
    /// `to be able to create user stories`.
    pub fn action_clause(&self) -> Result<String, StoryError> {
        let mut action = self.anchored_cursor();
        ActionRule.locate(&mut action)?;

        let mut purpose = self.anchored_cursor();
        PurposeRule.locate(&mut purpose)?;
        purpose.prev_by(PurposeRule::CLAUSE_OFFSET);

        Ok(action.range_until(&purpose)?)
    }
}
