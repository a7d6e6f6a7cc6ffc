//! The three slot scans of `As a <user>, I want to <action> so that <purpose>`.

use crate::slot::{Absent, AbsentReason, Slot, SlotKind};
use crate::traits::SlotRule;
use crate::verb::is_verb;
use considering_common::{ConsiderError, Span};
use considering_cursor::Cursor;

/// Words opening every user story.
pub const USER_ANCHOR: [&str; 2] = ["As", "a"];
/// Word introducing the action.
pub const ACTION_ANCHOR: &str = "I";
/// Words introducing the purpose.
pub const PURPOSE_ANCHOR: [&str; 2] = ["so", "that"];

/// Asserts the `As a` opening on a cursor sitting on the first token.
fn opening(cursor: &mut Cursor<String>) -> Result<&mut Cursor<String>, ConsiderError> {
    cursor.is(USER_ANCHOR[0])?.next_is(USER_ANCHOR[1])
}

fn starts_with_opening(first_token: Option<&str>) -> Option<bool> {
    Some(first_token == Some(USER_ANCHOR[0]))
}

/// Steps onto the token after `anchor`, failing if the anchor ends the sentence.
fn step_past(
    cursor: &mut Cursor<String>,
    kind: SlotKind,
    anchor: &'static str,
) -> Result<(), Absent> {
    if !cursor.has_next() {
        return Err(Absent::new(kind, AbsentReason::NothingFollows(anchor)));
    }
    cursor.next();
    Ok(())
}

fn current(cursor: &Cursor<String>) -> Option<(usize, &String)> {
    Some((cursor.position()?, cursor.value()?))
}

/// Finds the user: the word after `As a`, directly followed by `I`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRule;

impl SlotRule for UserRule {
    fn kind(&self) -> SlotKind {
        SlotKind::User
    }

    fn locate(&self, cursor: &mut Cursor<String>) -> Result<(), Absent> {
        // "As a, I want ..." leaves the user out.
        opening(cursor)
            .and_then(|c| c.next_is_not(ACTION_ANCHOR))
            .map(|_| ())
            .map_err(|err| Absent::new(SlotKind::User, err))
    }

    fn read(&self, cursor: &mut Cursor<String>) -> Result<Slot, Absent> {
        let (index, value) = current(cursor)
            .ok_or_else(|| Absent::new(SlotKind::User, AbsentReason::NothingFollows(USER_ANCHOR[1])))?;

        if cursor.peek().map(String::as_str) != Some(ACTION_ANCHOR) {
            return Err(Absent::new(
                SlotKind::User,
                AbsentReason::NotFollowedBy {
                    value: value.clone(),
                    anchor: ACTION_ANCHOR,
                },
            ));
        }
        Ok(Slot::new(SlotKind::User, Span::at(index), value.clone()))
    }

    fn quick_check(&self, first_token: Option<&str>) -> Option<bool> {
        starts_with_opening(first_token)
    }
}

/// Finds the action: the verb right after the first `I`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionRule;

impl SlotRule for ActionRule {
    fn kind(&self) -> SlotKind {
        SlotKind::Action
    }

    fn locate(&self, cursor: &mut Cursor<String>) -> Result<(), Absent> {
        opening(cursor).map_err(|err| Absent::new(SlotKind::Action, err))?;
        if !cursor.seek_to(ACTION_ANCHOR) {
            return Err(Absent::new(
                SlotKind::Action,
                AbsentReason::AnchorNotFound(ACTION_ANCHOR),
            ));
        }
        step_past(cursor, SlotKind::Action, ACTION_ANCHOR)
    }

    fn read(&self, cursor: &mut Cursor<String>) -> Result<Slot, Absent> {
        let (index, value) = current(cursor)
            .ok_or_else(|| Absent::new(SlotKind::Action, AbsentReason::NothingFollows(ACTION_ANCHOR)))?;

        if !is_verb(value) {
            return Err(Absent::new(
                SlotKind::Action,
                AbsentReason::NotAVerb(value.clone()),
            ));
        }
        Ok(Slot::new(SlotKind::Action, Span::at(index), value.clone()))
    }

    fn quick_check(&self, first_token: Option<&str>) -> Option<bool> {
        starts_with_opening(first_token)
    }
}

/// Finds the purpose: everything after the first `so that`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PurposeRule;

impl PurposeRule {
    /// How far back from the purpose's first token the action clause ends:
    /// over the anchor words, onto the last word before them.
    pub const CLAUSE_OFFSET: usize = PURPOSE_ANCHOR.len() + 1;
}

impl SlotRule for PurposeRule {
    fn kind(&self) -> SlotKind {
        SlotKind::Purpose
    }

    fn locate(&self, cursor: &mut Cursor<String>) -> Result<(), Absent> {
        opening(cursor).map_err(|err| Absent::new(SlotKind::Purpose, err))?;
        if !cursor.seek_to(PURPOSE_ANCHOR[0]) {
            return Err(Absent::new(
                SlotKind::Purpose,
                AbsentReason::AnchorNotFound(PURPOSE_ANCHOR[0]),
            ));
        }
        for anchor in &PURPOSE_ANCHOR[1..] {
            cursor
                .next_is(*anchor)
                .map_err(|err| Absent::new(SlotKind::Purpose, err))?;
        }
        step_past(cursor, SlotKind::Purpose, PURPOSE_ANCHOR[PURPOSE_ANCHOR.len() - 1])
    }

    fn read(&self, cursor: &mut Cursor<String>) -> Result<Slot, Absent> {
        let start = cursor.position().ok_or_else(|| {
            Absent::new(
                SlotKind::Purpose,
                AbsentReason::NothingFollows(PURPOSE_ANCHOR[PURPOSE_ANCHOR.len() - 1]),
            )
        })?;
        let text = cursor.tail();
        Ok(Slot::new(
            SlotKind::Purpose,
            Span::new(start, cursor.len()),
            text,
        ))
    }

    fn quick_check(&self, first_token: Option<&str>) -> Option<bool> {
        starts_with_opening(first_token)
    }
}
