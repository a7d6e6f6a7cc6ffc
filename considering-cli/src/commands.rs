use anyhow::{Context, Result};
use considering_grammar::{LineOperations, Owner, Statement, Tagged};
use considering_pipeline::{StatementStore, StoreFormat, Summary};
use serde_json::{json, Value};
use std::fmt::Write;
use std::path::Path;
use tracing::info;

/// Validates each sentence and reports its slots.
pub fn check(sentences: &[String], json: bool) -> Result<String> {
    let reports = sentences
        .iter()
        .map(|sentence| check_one(&Statement::new(sentence.as_str())))
        .collect::<Result<Vec<_>>>()?;

    if json {
        return Ok(serde_json::to_string_pretty(&reports)?);
    }

    let mut out = String::new();
    for report in &reports {
        let valid = report["valid"].as_bool().unwrap_or_default();
        writeln!(
            out,
            "{} {}",
            if valid { "valid  " } else { "invalid" },
            report["statement"].as_str().unwrap_or_default()
        )?;
        for slot in ["user", "action", "purpose"] {
            match report[slot].as_str() {
                Some(text) => writeln!(out, "  {slot}: {text}")?,
                None => writeln!(out, "  {slot}: absent ({})", report["absent"][slot].as_str().unwrap_or_default())?,
            }
        }
        if let Some(mentions) = report["correlation"]["userMentions"].as_array() {
            writeln!(out, "  user mentions: {}", mentions.len())?;
        }
    }
    Ok(out.trim_end().to_owned())
}

fn check_one(statement: &Statement) -> Result<Value> {
    let mut report = json!({
        "statement": statement.contents(),
        "valid": statement.is_user_story_format(),
    });

    for (name, probe) in [
        ("user", statement.probe_user()),
        ("action", statement.probe_action()),
        ("purpose", statement.probe_purpose()),
    ] {
        match probe {
            Ok(slot) => report[name] = json!(slot.text()),
            Err(absent) => report["absent"][name] = json!(absent.reason.to_string()),
        }
    }

    if let Ok(story) = statement.convert_to_user_story() {
        let correlation = story
            .correlations()
            .with_context(|| format!("Failed to correlate {:?}", statement.contents()))?;
        report["correlation"] = serde_json::to_value(correlation)?;
    }
    Ok(report)
}

fn open(path: &Path, format: StoreFormat) -> Result<StatementStore> {
    StatementStore::open(path, format)
        .with_context(|| format!("Failed to open statements file {}", path.display()))
}

/// Counts the user stories of a file.
pub fn summary(path: &Path, format: StoreFormat, json: bool) -> Result<String> {
    let summary = open(path, format)?
        .summary()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    info!(valid = summary.totals.valid, invalid = summary.totals.invalid, "summarized");

    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }
    render_summary(&summary)
}

fn render_summary(summary: &Summary) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "valid:   {}", summary.totals.valid)?;
    writeln!(out, "invalid: {}", summary.totals.invalid)?;
    writeln!(out, "tags:    {}", summary.totals.tags)?;

    for (slot, items) in [
        ("user", summary.invalid_user_items()),
        ("action", summary.invalid_action_items()),
        ("purpose", summary.invalid_purpose_items()),
    ] {
        if items.is_empty() {
            continue;
        }
        writeln!(out, "missing {slot}:")?;
        for statement in items {
            writeln!(out, "  {statement}")?;
        }
    }
    Ok(out.trim_end().to_owned())
}

/// Lists the statements of a file tagged with `tag`.
pub fn filter(path: &Path, format: StoreFormat, tag: &str, json: bool) -> Result<String> {
    let mut store = open(path, format)?;
    store
        .read()
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let tagged = store.select().each_tagged(tag).line()?;

    if json {
        return Ok(serde_json::to_string_pretty(tagged.values())?);
    }
    let mut out = String::new();
    for statement in tagged.values() {
        writeln!(out, "{statement} [{}]", statement.tag_values().join(", "))?;
    }
    Ok(out.trim_end().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const STORY: &str = "As a user, I want to be able to create user stories so that I record my needs";

    #[test]
    fn test_check_text() {
        let out = check(&[STORY.to_owned(), "As a, I want to rest so that I sleep".to_owned()], false)
            .unwrap();
        assert!(out.starts_with(&format!("valid   {STORY}\n  user: user\n  action: want")));
        assert!(out.contains("user mentions: 1"));
        assert!(out.contains("invalid As a, I want to rest so that I sleep\n  user: absent ("));
    }

    #[test]
    fn test_check_json() {
        let out = check(&[STORY.to_owned()], true).unwrap();
        let reports: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(reports[0]["valid"], true);
        assert_eq!(
            reports[0]["correlation"]["actionClause"],
            "to be able to create user stories"
        );
    }

    #[test]
    fn test_summary_and_filter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("statements.json");
        fs::write(
            &path,
            json!([
                {"contents": STORY, "tags": ["User Story"]},
                {"contents": "I want to be able to create user stories, I hope.", "tags": ["User Story"]},
                {"contents": "Hello"},
            ])
            .to_string(),
        )
        .unwrap();

        let out = summary(&path, StoreFormat::Json, false).unwrap();
        assert!(out.starts_with("valid:   1\ninvalid: 2\ntags:    2"));
        assert!(out.contains("missing user:\n  I want to be able to create user stories, I hope.\n  Hello"));

        let out = filter(&path, StoreFormat::Json, "User Story", false).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.ends_with("I hope. [User Story]"));
    }

    #[test]
    fn test_missing_file() {
        let err = summary(Path::new("nowhere.txt"), StoreFormat::Lines, false).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open statements file"));
    }
}
