use crate::error::PipelineError;
use crate::summary::Summary;
use crate::Result;
use considering_cursor::split_lines;
use considering_grammar::{Operation, Owner, Statement};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How statements are laid out in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFormat {
    /// One statement per line, no tags
    #[default]
    Lines,
    /// A JSON array of `{ "contents": .., "tags": [..] }`
    Json,
}

impl StoreFormat {
    /// Picks [`StoreFormat::Json`] for `.json` files and lines otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Lines,
        }
    }
}

/// A file of statements.
///
/// Contents are only loaded by [`StatementStore::read`]; selections made
/// through [`Owner::select`] see what was last read.
#[derive(Debug, Clone)]
pub struct StatementStore {
    path: PathBuf,
    format: StoreFormat,
    contents: Vec<Statement>,
    has_read: bool,
}

impl StatementStore {
    /// Opens an existing file without reading it.
    pub fn open(path: impl AsRef<Path>, format: StoreFormat) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::MissingFile(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            format,
            contents: Vec::new(),
            has_read: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StoreFormat {
        self.format
    }

    pub fn has_read(&self) -> bool {
        self.has_read
    }

    /// Loads the file, replacing anything read before.
    pub fn read(&mut self) -> Result<&[Statement]> {
        let text = fs::read_to_string(&self.path).map_err(PipelineError::io(&self.path))?;
        self.contents = self.deserialize(&text)?;
        self.has_read = true;
        info!(path = %self.path.display(), count = self.contents.len(), "read statements");
        Ok(&self.contents)
    }

    fn deserialize(&self, text: &str) -> Result<Vec<Statement>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        match self.format {
            StoreFormat::Lines => Ok(split_lines(text).into_iter().map(Statement::from).collect()),
            StoreFormat::Json => {
                serde_json::from_str(text).map_err(PipelineError::json(&self.path))
            }
        }
    }

    /// Statements loaded by the last read.
    pub fn statements(&self) -> Result<&[Statement]> {
        if !self.has_read {
            return Err(PipelineError::NotRead(self.path.clone()));
        }
        Ok(&self.contents)
    }

    /// Adds a statement to the file.
    ///
    /// Line files get the text appended on its own line. JSON files are read
    /// first if needed, then rewritten whole with the new statement last.
    pub fn append(&mut self, statement: Statement) -> Result<&mut Self> {
        match self.format {
            StoreFormat::Lines => {
                let separator = if self.is_empty_on_disk()? { "" } else { "\n" };
                let mut file = OpenOptions::new()
                    .append(true)
                    .open(&self.path)
                    .map_err(PipelineError::io(&self.path))?;
                write!(file, "{separator}{}", statement.contents())
                    .map_err(PipelineError::io(&self.path))?;
                if self.has_read {
                    self.contents.push(statement);
                }
            }
            StoreFormat::Json => {
                if !self.has_read {
                    self.read()?;
                }
                self.contents.push(statement);
                let text =
                    serde_json::to_string(&self.contents).map_err(PipelineError::json(&self.path))?;
                fs::write(&self.path, text).map_err(PipelineError::io(&self.path))?;
            }
        }
        debug!(path = %self.path.display(), "appended statement");
        Ok(self)
    }

    /// Truncates the file. Statements already read stay in memory.
    pub fn clear_on_disk(&self) -> Result<()> {
        fs::write(&self.path, "").map_err(PipelineError::io(&self.path))
    }

    pub fn is_empty_on_disk(&self) -> Result<bool> {
        let metadata = fs::metadata(&self.path).map_err(PipelineError::io(&self.path))?;
        Ok(metadata.len() == 0)
    }

    /// Re-reads the file and summarizes it.
    pub fn summary(&mut self) -> Result<Summary> {
        Ok(Summary::of(self.read()?))
    }
}

impl Owner for StatementStore {
    type Item = Statement;

    fn owner_name(&self) -> &'static str {
        "StatementStore"
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::Line]
    }

    fn to_values(&self) -> Vec<Statement> {
        self.contents.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(StoreFormat::from_path(Path::new("a/b.JSON")), StoreFormat::Json);
        assert_eq!(StoreFormat::from_path(Path::new("stories.txt")), StoreFormat::Lines);
        assert_eq!(StoreFormat::from_path(Path::new("stories")), StoreFormat::Lines);
    }

    #[test]
    fn test_open_missing_file() {
        let err = StatementStore::open("does/not/exist.txt", StoreFormat::Lines).unwrap_err();
        assert!(matches!(err, PipelineError::MissingFile(_)));
        assert_eq!(err.to_string(), "File \"does/not/exist.txt\" not found");
    }
}
