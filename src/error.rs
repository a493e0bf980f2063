use thiserror::Error;

/// Unified error type for relver operations.
///
/// Every variant is fatal for the invocation that raised it: no parser or
/// composer in this crate guesses a default version or silently drops a
/// malformed commit. Callers decide what, if anything, is recoverable.
#[derive(Error, Debug)]
pub enum RelverError {
    #[error("git executable not found in PATH")]
    GitMissing,

    #[error("not inside a git repository")]
    RepositoryNotFound,

    #[error("repository has no commits yet")]
    RepositoryEmpty,

    #[error("git reports the repository as broken")]
    RepositoryBroken,

    #[error("tag version is not semantic: {0}")]
    TagNotSemVer(String),

    #[error("commit {hash} does not follow the conventional commits format")]
    NotConventional { hash: String },

    #[error("unexpected git output: {0}")]
    UnexpectedOutput(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in relver
pub type Result<T> = std::result::Result<T, RelverError>;

impl RelverError {
    /// Create a tag-version error with the offending text
    pub fn tag_not_semver(text: impl Into<String>) -> Self {
        RelverError::TagNotSemVer(text.into())
    }

    /// Create a non-conventional-commit error for a given hash
    pub fn not_conventional(hash: impl Into<String>) -> Self {
        RelverError::NotConventional { hash: hash.into() }
    }

    /// Create an unexpected-output error with context
    pub fn unexpected(msg: impl Into<String>) -> Self {
        RelverError::UnexpectedOutput(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        RelverError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RelverError::config("bad toml");
        assert_eq!(err.to_string(), "configuration error: bad toml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RelverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(RelverError::tag_not_semver("v1.2")
            .to_string()
            .contains("not semantic"));
        assert!(RelverError::not_conventional("abc123")
            .to_string()
            .contains("abc123"));
        assert!(RelverError::unexpected("garbage")
            .to_string()
            .contains("garbage"));
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let errors = vec![
            RelverError::GitMissing,
            RelverError::RepositoryNotFound,
            RelverError::RepositoryEmpty,
            RelverError::RepositoryBroken,
            RelverError::tag_not_semver("x"),
            RelverError::not_conventional("x"),
            RelverError::unexpected("x"),
        ];

        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        for (i, msg) in messages.iter().enumerate() {
            assert!(!msg.is_empty());
            for (j, other) in messages.iter().enumerate() {
                if i != j {
                    assert_ne!(msg, other);
                }
            }
        }
    }
}
