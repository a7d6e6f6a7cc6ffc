use thiserror::Error;

/// What a cursor assertion expected of the current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// The current value had to equal this one.
    Equal(String),
    /// The current value had to differ from this one.
    NotEqual(String),
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Equal(value) => write!(f, "{value:?}"),
            Expectation::NotEqual(value) => write!(f, "anything but {value:?}"),
        }
    }
}

/// Errors raised by cursors and selection bindings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsiderError {
    /// A cursor assertion (`is` / `is_not`) did not hold
    #[error("Value iterated is {}, expected {expectation}", display_actual(.actual))]
    ValueMismatch {
        expectation: Expectation,
        actual: Option<String>,
    },

    /// Two cursors over different sequences were combined
    #[error("Cursors should have both the same contents")]
    IncompatibleCursor,

    /// An operation was invoked on an owner that never declared it
    #[error("Operation `{operation}` is not implemented by {owner}")]
    NotImplemented {
        operation: &'static str,
        owner: &'static str,
    },
}

impl ConsiderError {
    /// Builds a mismatch for an `is` assertion.
    pub fn expected(value: impl Into<String>, actual: Option<&str>) -> Self {
        ConsiderError::ValueMismatch {
            expectation: Expectation::Equal(value.into()),
            actual: actual.map(str::to_owned),
        }
    }

    /// Builds a mismatch for an `is_not` assertion.
    pub fn unexpected(value: impl Into<String>) -> Self {
        let value = value.into();
        ConsiderError::ValueMismatch {
            actual: Some(value.clone()),
            expectation: Expectation::NotEqual(value),
        }
    }

    /// Returns true for the recoverable assertion failure.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ConsiderError::ValueMismatch { .. })
    }
}

fn display_actual(actual: &Option<String>) -> String {
    match actual {
        Some(value) => format!("{value:?}"),
        None => "nothing".to_owned(),
    }
}
