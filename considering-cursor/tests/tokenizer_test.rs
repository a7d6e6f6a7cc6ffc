use considering_cursor::{split_lines, tokenize};

#[test]
fn test_tokenize_story() {
    let tokens = tokenize(
        "As a user, I want to be able to create user stories so that I record my needs.",
    );
    assert_eq!(tokens.len(), 18);
    assert_eq!(&tokens[..4], ["As", "a", "user", "I"]);
    assert_eq!(tokens.last().map(String::as_str), Some("needs"));
}

#[test]
fn test_tokenize_punctuation_keeps_boundaries() {
    assert_eq!(
        tokenize("As a user,I want (really) \"this\" - isn't it?"),
        vec!["As", "a", "user", "I", "want", "really", "this", "isn", "t", "it"]
    );
}

#[test]
fn test_tokenize_collapses_spaces() {
    assert_eq!(
        tokenize("As a user,I want to be able to create user stories, so that I record my needs , alright ? ")
            .len(),
        19
    );
    assert_eq!(tokenize("  many    spaces   here "), vec!["many", "spaces", "here"]);
}

#[test]
fn test_tokenize_keeps_tabs_inside_tokens() {
    assert_eq!(tokenize("one\ttwo three"), vec!["one\ttwo", "three"]);
}

#[test]
fn test_tokenize_newline_followed_by_space() {
    assert_eq!(tokenize("first\n second"), vec!["first\nsecond"]);
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert!(tokenize("...?!").is_empty());
}

#[test]
fn test_split_lines() {
    let text = "This is the first line.\r\nThis is the second line.";
    assert_eq!(
        split_lines(text),
        vec!["This is the first line.", "This is the second line."]
    );
}
