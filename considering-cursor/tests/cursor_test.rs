use considering_cursor::{tokenize, ConsiderError, Cursor, Expectation};

const STORY: &str = "As a user, I want to be able to create user stories so that I record my needs.";

fn story_cursor() -> Cursor<String> {
    Cursor::new(tokenize(STORY))
}

#[test]
fn test_cursor_new() {
    let cursor = story_cursor();
    assert_eq!(cursor.pointer(), -1);
    assert_eq!(cursor.position(), None);
    assert_eq!(cursor.value(), None);
    assert_eq!(cursor.len(), 18);
    assert!(!cursor.is_first());
    assert!(cursor.has_next());
}

#[test]
fn test_cursor_next_and_prev() {
    let mut cursor = story_cursor();
    cursor.next();
    assert!(cursor.is_first());
    assert_eq!(cursor.value().map(String::as_str), Some("As"));

    cursor.next_by(2);
    assert_eq!(cursor.value().map(String::as_str), Some("user"));
    assert_eq!(cursor.peek().map(String::as_str), Some("I"));

    cursor.prev();
    assert_eq!(cursor.value().map(String::as_str), Some("a"));
    cursor.prev_by(10);
    assert_eq!(cursor.position(), Some(0));
    assert!(!cursor.has_prev());
}

#[test]
fn test_cursor_next_saturates_at_last() {
    let mut cursor = Cursor::new(tokenize("I record my needs"));
    cursor.next_by(100);
    assert!(cursor.is_last());
    assert!(!cursor.has_next());
    let last = cursor.value().cloned();
    assert_eq!(cursor.next().value().cloned(), last);
    assert_eq!(cursor.peek(), None);
    assert_eq!(cursor.pointer(), 3);
}

#[test]
fn test_cursor_empty_sequence() {
    let mut cursor: Cursor<String> = Cursor::new(Vec::new());
    assert!(cursor.is_empty());
    assert!(cursor.is_last());
    cursor.next();
    assert_eq!(cursor.pointer(), -1);
    assert_eq!(cursor.value(), None);
    assert_eq!(cursor.peek(), None);
    assert!(!cursor.seek_to("I"));
    assert_eq!(cursor.tail(), "");
}

#[test]
fn test_cursor_is_chain() {
    let mut cursor = story_cursor();
    let result = cursor
        .next()
        .is("As")
        .and_then(|c| c.next_is("a"))
        .and_then(|c| c.next_is_not("I"));
    assert_eq!(
        result.map(|c| c.value().cloned()),
        Ok(Some("user".to_owned()))
    );
}

#[test]
fn test_cursor_is_mismatch() {
    let mut cursor = story_cursor();
    let err = cursor.next().next_is("an").unwrap_err();
    assert_eq!(
        err,
        ConsiderError::ValueMismatch {
            expectation: Expectation::Equal("an".to_owned()),
            actual: Some("a".to_owned()),
        }
    );

    let mut fresh = story_cursor();
    assert!(fresh.is("As").is_err());
    assert!(fresh.is_not("As").is_ok());
}

#[test]
fn test_cursor_is_not_mismatch() {
    let mut cursor = Cursor::new(tokenize("As a, I want"));
    let err = cursor
        .next_by(2)
        .next_is_not("I")
        .expect_err("the user is missing");
    assert!(err.is_mismatch());
    assert_eq!(err, ConsiderError::unexpected("I"));
}

#[test]
fn test_cursor_followed_by() {
    let mut cursor = story_cursor();
    let mut seen = None;
    cursor
        .next()
        .followed_by(|c| {
            seen = c.value().cloned();
            c.next_is("user").map(|_| ())
        })
        .expect("assertions hold");
    assert_eq!(seen.as_deref(), Some("a"));
    assert_eq!(cursor.value().map(String::as_str), Some("user"));
}

#[test]
fn test_cursor_followed_by_propagates() {
    let mut cursor = story_cursor();
    let result = cursor.followed_by(|c| c.is("a").map(|_| ()));
    assert!(result.is_err());
}

#[test]
fn test_cursor_seek_to_found() {
    let mut cursor = story_cursor();
    assert!(cursor.seek_to("so"));
    assert_eq!(cursor.value().map(String::as_str), Some("so"));
    assert_eq!(cursor.peek().map(String::as_str), Some("that"));
}

#[test]
fn test_cursor_seek_to_first_occurrence() {
    let mut cursor = story_cursor();
    assert!(cursor.seek_to("I"));
    assert_eq!(cursor.position(), Some(3));
}

#[test]
fn test_cursor_seek_to_missing() {
    let mut cursor = story_cursor();
    assert!(!cursor.seek_to("because"));
    assert!(cursor.is_last());
    assert_eq!(cursor.value().map(String::as_str), Some("needs"));
}

#[test]
fn test_cursor_seek_is_monotonic() {
    let mut cursor = story_cursor();
    cursor.seek_to("so");
    // "As" is behind the cursor, the scan never rewinds to find it.
    assert!(!cursor.seek_to("As"));
    assert!(cursor.is_last());
}

#[test]
fn test_cursor_range_until() {
    let mut from = story_cursor();
    from.seek_to("want");
    let mut to = story_cursor();
    to.seek_to("so");
    to.prev();

    let clause = from.range_until(&to).expect("same tokens");
    assert_eq!(clause, "to be able to create user stories");
    assert_eq!(from.position(), to.position());
}

#[test]
fn test_cursor_range_until_behind() {
    let mut from = story_cursor();
    from.seek_to("so");
    let mut to = story_cursor();
    to.next();
    assert_eq!(from.range_until(&to), Ok(String::new()));
}

#[test]
fn test_cursor_range_until_incompatible() {
    let mut from = story_cursor();
    let to = Cursor::new(tokenize("As a user"));
    assert_eq!(
        from.range_until(&to),
        Err(ConsiderError::IncompatibleCursor)
    );
}

#[test]
fn test_cursor_range_until_separate_buffers() {
    let mut from = story_cursor();
    let mut to = story_cursor();
    to.next_by(3);
    assert_eq!(from.range_until(&to), Ok("As a user".to_owned()));
}

#[test]
fn test_cursor_tail() {
    let mut cursor = story_cursor();
    cursor.seek_to("that");
    cursor.next();
    assert_eq!(cursor.tail(), "I record my needs");
    assert!(cursor.is_last());
}

#[test]
fn test_cursor_tail_until() {
    let mut cursor = story_cursor();
    cursor.seek_to("want");
    cursor.next();
    assert_eq!(cursor.tail_until("so"), "to be able to create user stories");
    assert_eq!(cursor.value().map(String::as_str), Some("so"));
}

#[test]
fn test_cursor_reset() {
    let mut cursor = story_cursor();
    cursor.seek_to("user");
    cursor.reset();
    assert_eq!(cursor.pointer(), -1);
    assert!(cursor.history().is_empty());
}

#[test]
fn test_cursor_clones_share_tokens() {
    let mut first = story_cursor();
    first.next();
    let second = first.clone();
    assert!(first.sequence().ptr_eq(second.sequence()));
    first.next();
    assert_eq!(second.position(), Some(0));
}
