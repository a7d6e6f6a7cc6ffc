use considering_grammar::{Statement, Tagged, UserStory};
use serde::Serialize;

/// Counts over a batch of statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub valid: usize,
    pub invalid: usize,
    /// Tags over all statements, repeats included
    pub tags: usize,
}

/// User-story facts about a batch of statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub totals: Totals,
    pub invalid_statements: Vec<Statement>,
    pub valid_user_stories: Vec<UserStory>,
}

impl Summary {
    pub fn of(statements: &[Statement]) -> Self {
        let mut summary = Summary::default();
        for statement in statements {
            summary.totals.tags += statement.tag_values().len();
            match statement.convert_to_user_story() {
                Ok(story) => summary.valid_user_stories.push(story),
                Err(_) => summary.invalid_statements.push(statement.clone()),
            }
        }
        summary.totals.valid = summary.valid_user_stories.len();
        summary.totals.invalid = summary.invalid_statements.len();
        summary
    }

    /// Invalid statements that lack the user.
    pub fn invalid_user_items(&self) -> Vec<&Statement> {
        self.invalid_items(Statement::has_user)
    }

    /// Invalid statements that lack the action.
    pub fn invalid_action_items(&self) -> Vec<&Statement> {
        self.invalid_items(Statement::has_action)
    }

    /// Invalid statements that lack the purpose.
    pub fn invalid_purpose_items(&self) -> Vec<&Statement> {
        self.invalid_items(Statement::has_purpose)
    }

    fn invalid_items(&self, has_slot: fn(&Statement) -> bool) -> Vec<&Statement> {
        self.invalid_statements
            .iter()
            .filter(|statement| !has_slot(statement))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_nothing() {
        let summary = Summary::of(&[]);
        assert_eq!(summary.totals, Totals::default());
        assert!(summary.invalid_user_items().is_empty());
    }

    #[test]
    fn test_summary_counts() {
        let statements = [
            Statement::new("As a user, I want to rest so that I sleep").tagged("User Story"),
            Statement::new("As a, I want to rest so that I sleep")
                .tagged("User Story")
                .tagged("Draft"),
            Statement::new("As a user, I want to rest"),
        ];
        let summary = Summary::of(&statements);
        assert_eq!(
            summary.totals,
            Totals {
                valid: 1,
                invalid: 2,
                tags: 3
            }
        );
        assert_eq!(summary.valid_user_stories[0].user().text(), "user");
        assert_eq!(summary.invalid_user_items(), [&statements[1]]);
        assert!(summary.invalid_action_items().is_empty());
        assert_eq!(summary.invalid_purpose_items(), [&statements[2]]);
    }
}
