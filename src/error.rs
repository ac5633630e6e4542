use thiserror::Error;

/// Unified error type for git-reckon operations
#[derive(Error, Debug)]
pub enum ReckonError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Collaborator failure: {0}")]
    Collaborator(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(#[from] semver::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-reckon
pub type Result<T> = std::result::Result<T, ReckonError>;

impl ReckonError {
    /// Create an invalid argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ReckonError::InvalidArgument(msg.into())
    }

    /// Create a collaborator error with context
    pub fn collaborator(msg: impl Into<String>) -> Self {
        ReckonError::Collaborator(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReckonError::Config(msg.into())
    }

    /// Whether the failure came from reading the repository rather than from caller input
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, ReckonError::Collaborator(_) | ReckonError::Git(_))
    }
}
