//! Git operations abstraction layer
//!
//! Trait-based abstraction over the read-only git queries the checker needs,
//! with a real implementation backed by the `git2` crate and a mock
//! implementation for testing.
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::{GuardError, Result};

/// A manifest snapshot taken from commit history.
///
/// One entry per commit that changed the manifest, paired with the manifest
/// content at the commit's first parent (None at the root commit or when the
/// file did not yet exist).
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestRevision {
    /// Full hex commit id
    pub commit: String,
    /// Manifest content at this commit
    pub text: String,
    /// Manifest content at the first parent, if any
    pub parent_text: Option<String>,
}

/// Read-only git queries used by the version checker.
///
/// All methods are side-effect free; implementations must not mutate the
/// repository. Implementors must be `Send + Sync`.
pub trait Repository: Send + Sync {
    /// True if `reference` resolves to an existing commit-ish.
    fn reference_exists(&self, reference: &str) -> bool;

    /// Manifest text as it existed at the given commit-ish.
    fn manifest_at(&self, reference: &str) -> Result<String>;

    /// Revisions of the manifest reachable from HEAD, newest first.
    ///
    /// Only commits where the manifest content differs from the first parent
    /// are included.
    fn manifest_revisions(&self) -> Result<Vec<ManifestRevision>>;

    /// Number of commits after `commit` up to and including HEAD.
    fn commits_since(&self, commit: &str) -> Result<u32>;

    /// True when history is truncated by a shallow clone.
    fn is_shallow(&self) -> bool;
}

/// Resolve a candidate base reference to a verified existing reference.
///
/// Tries the name as-is, then prefixed with `origin/`.
pub fn resolve_base_reference<R: Repository>(repo: &R, reference: &str) -> Result<String> {
    if repo.reference_exists(reference) {
        return Ok(reference.to_string());
    }

    let remote_reference = format!("origin/{}", reference);
    if repo.reference_exists(&remote_reference) {
        return Ok(remote_reference);
    }

    Err(GuardError::ReferenceNotFound(reference.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_local_reference() {
        let mut repo = MockRepository::new();
        repo.add_reference("develop");
        repo.add_reference("origin/develop");

        assert_eq!(resolve_base_reference(&repo, "develop").unwrap(), "develop");
    }

    #[test]
    fn test_resolve_falls_back_to_remote_tracking() {
        let mut repo = MockRepository::new();
        repo.add_reference("origin/develop");

        assert_eq!(
            resolve_base_reference(&repo, "develop").unwrap(),
            "origin/develop"
        );
    }

    #[test]
    fn test_resolve_missing_reference_is_fatal() {
        let repo = MockRepository::new();
        let err = resolve_base_reference(&repo, "develop").unwrap_err();
        assert!(matches!(err, GuardError::ReferenceNotFound(_)));
    }
}
