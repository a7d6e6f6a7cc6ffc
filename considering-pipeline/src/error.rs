use considering_grammar::StoryError;
use std::path::PathBuf;
use thiserror::Error;

/// The common error type used by this crate
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A store was opened on a path that does not exist
    #[error("File {0:?} not found")]
    MissingFile(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O on {path:?} failed: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON array of statements
    #[error("{path:?} is not a valid statements file, is it corrupted? {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Statements were asked for before the file was read
    #[error("{0:?} has not been read yet")]
    NotRead(PathBuf),

    /// A story operation failed
    #[error(transparent)]
    Story(#[from] StoryError),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| PipelineError::Io { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| PipelineError::Json { path, source }
    }
}
