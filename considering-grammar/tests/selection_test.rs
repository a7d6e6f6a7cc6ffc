use considering_grammar::{
    ConsiderError, Epic, LineOperations, Operation, Owner, Statement, StoryOperations, Strategy,
    Tag, UserStory, WordOperations,
};

const STORY: &str = "As a user, I want to be able to create user stories so that I record my needs.";

/// Owns statements, the way a file of sentences does.
struct Lines(Vec<Statement>);

impl Owner for Lines {
    type Item = Statement;

    fn owner_name(&self) -> &'static str {
        "Lines"
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::Line]
    }

    fn to_values(&self) -> Vec<Statement> {
        self.0.clone()
    }
}

#[test]
fn test_each_word() {
    let statement = Statement::new(STORY);
    let words = statement.select().each().word().unwrap();
    assert_eq!(words.len(), 18);
    assert_eq!(words.strategy(), &Strategy::Each);
    assert!(words.cursor().is_none());
}

#[test]
fn test_first_word_carries_a_cursor() {
    let statement = Statement::new(STORY);
    let first = statement.select().first().word().unwrap();
    assert_eq!(first.values(), ["As"]);

    let mut cursor = first.into_cursor().expect("first selection has a cursor");
    assert!(cursor.is_first());
    assert!(cursor.next_is("a").is_ok());
}

#[test]
fn test_last_word() {
    let statement = Statement::new(STORY);
    assert_eq!(statement.select().last().word().unwrap().values(), ["needs"]);
}

#[test]
fn test_words_are_never_tagged() {
    let statement = Statement::new(STORY).tagged("User Story");
    assert!(statement
        .select()
        .each_tagged("User Story")
        .word()
        .unwrap()
        .is_empty());
}

#[test]
fn test_lines_filtered_by_tag() {
    let lines = Lines(vec![
        Statement::new(STORY).tagged("User Story"),
        Statement::new("Hello"),
        Statement::new("As a admin, I can ban users so that I keep order").tagged(Tag::new("User Story")),
    ]);

    let tagged = lines.select().each_tagged("User Story").line().unwrap();
    assert_eq!(tagged.len(), 2);
    assert_eq!(tagged.values()[1].contents(), "As a admin, I can ban users so that I keep order");

    let by_tag = lines.select().each_tagged(Tag::new("User Story")).line().unwrap();
    assert_eq!(by_tag.values(), tagged.values());
}

#[test]
fn test_epic_stories() {
    let approved = Statement::new(STORY).tagged("Approved").convert_to_user_story().unwrap();
    let other = UserStory::parse("As a admin, I can ban users so that I keep order").unwrap();
    let epic = approved.clone().group_with(other.clone());

    assert_eq!(epic.select().last().user_story().unwrap().values(), [other]);
    assert_eq!(
        epic.select().each_tagged("Approved").user_story().unwrap().values(),
        [approved]
    );
    assert!(Epic::default().select().first().user_story().unwrap().is_empty());
}

#[test]
fn test_tag_declares_no_operation() {
    let tag = Tag::new("User Story");
    let err = tag.select().each().word().unwrap_err();
    assert_eq!(
        err,
        ConsiderError::NotImplemented {
            operation: "word",
            owner: "Tag"
        }
    );
    assert_eq!(err.to_string(), "Operation `word` is not implemented by Tag");

    // Values stay reachable without an operation.
    assert_eq!(tag.select().each().values().values(), ["User Story"]);
}
