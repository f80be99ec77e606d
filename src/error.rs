use thiserror::Error;

/// Unified error type for version-guard operations
#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid version format: {0}")]
    Format(String),

    #[error("Malformed manifest: {0}")]
    Manifest(String),

    #[error("Missing version in project.toml (expected project.version)")]
    MissingField,

    #[error("Version value in project.toml must be a string")]
    WrongType,

    #[error("Base reference '{0}' not found. Fetch the base branch before running version checks.")]
    ReferenceNotFound(String),

    #[error("Unable to locate the commit introducing version {0} in history. Ensure full git history is available.")]
    BaseCommitNotFound(String),

    #[error("History is too shallow to locate version {0}. Fetch full git history before running version checks.")]
    HistoryUnavailable(String),

    #[error("Version regressed. Base is {base}, head is {head}.")]
    VersionRegressed { base: String, head: String },

    #[error("Invalid version progression: {0}")]
    InvalidProgression(String),

    #[error("Promotion pull requests must not change the base version. Base is {base}, head is {head}.")]
    PromotionVersionChanged { base: String, head: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in version-guard
pub type Result<T> = std::result::Result<T, GuardError>;

impl GuardError {
    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        GuardError::Format(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        GuardError::Manifest(msg.into())
    }

    /// Create a progression rule violation with context
    pub fn progression(msg: impl Into<String>) -> Self {
        GuardError::InvalidProgression(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuardError::format("1.2");
        assert_eq!(err.to_string(), "Invalid version format: 1.2");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GuardError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(GuardError::manifest("test").to_string().contains("manifest"));
        assert!(GuardError::progression("test")
            .to_string()
            .contains("progression"));
    }

    #[test]
    fn test_regression_message_carries_both_versions() {
        let err = GuardError::VersionRegressed {
            base: "1.3.0".to_string(),
            head: "1.2.3".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.3.0"));
        assert!(msg.contains("1.2.3"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GuardError::MissingField, "Missing version"),
            (GuardError::WrongType, "must be a string"),
            (
                GuardError::ReferenceNotFound("develop".to_string()),
                "Base reference",
            ),
            (
                GuardError::BaseCommitNotFound("1.2.3".to_string()),
                "Unable to locate",
            ),
            (
                GuardError::HistoryUnavailable("1.2.3".to_string()),
                "History is too shallow",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
