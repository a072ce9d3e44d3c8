use thiserror::Error;

/// Errors raised while reading, interpreting or answering command lines
#[derive(Debug, Error)]
pub enum CommandError {
    /// A token that must be a number did not parse
    #[error("malformed {field}: `{token}` is not a valid {expected}")]
    MalformedNumber {
        field: &'static str,
        expected: &'static str,
        token: String,
    },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render cart summary: {0}")]
    Summary(#[from] serde_json::Error),
}

impl CommandError {
    pub fn is_malformed_number(&self) -> bool {
        matches!(self, CommandError::MalformedNumber { .. })
    }
}
