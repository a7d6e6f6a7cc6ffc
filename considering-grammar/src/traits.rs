use crate::slot::{Absent, Slot, SlotKind};
use considering_cursor::Cursor;

/// A scan that finds one grammar slot in a tokenized sentence.
///
/// Rules are independent of each other: each one receives its own cursor,
/// already moved onto the first token, and walks it forward in a single pass.
pub trait SlotRule {
    /// The slot this rule looks for.
    fn kind(&self) -> SlotKind;

    /// Moves the cursor onto the first token of the slot.
    ///
    /// The cursor only moves forward; a rule never rewinds to retry.
    fn locate(&self, cursor: &mut Cursor<String>) -> Result<(), Absent>;

    /// Reads the slot at a cursor left by [`SlotRule::locate`].
    fn read(&self, cursor: &mut Cursor<String>) -> Result<Slot, Absent>;

    /// Locates then reads the slot.
    fn probe(&self, cursor: &mut Cursor<String>) -> Result<Slot, Absent> {
        self.locate(cursor)?;
        self.read(cursor)
    }

    /// Quick check: returns whether this rule might match based on the first token.
    ///
    /// - `Some(true)`  - This rule might match
    /// - `Some(false)` - This rule definitely won't match
    /// - `None`        - Unknown, need to probe
    #[inline]
    fn quick_check(&self, first_token: Option<&str>) -> Option<bool> {
        let _ = first_token;
        None
    }
}
