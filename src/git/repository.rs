use crate::error::{GuardError, Result};
use crate::git::ManifestRevision;
use crate::manifest::MANIFEST_FILE;
use git2::{Commit, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Manifest text at a commit, or None if the file does not exist there
    fn manifest_blob(&self, commit: &Commit) -> Result<Option<String>> {
        let tree = commit.tree()?;

        let entry = match tree.get_path(Path::new(MANIFEST_FILE)) {
            Ok(entry) => entry,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let object = entry.to_object(&self.repo)?;
        let blob = object.as_blob().ok_or_else(|| {
            GuardError::manifest(format!(
                "{} is not a regular file at commit {}",
                MANIFEST_FILE,
                commit.id()
            ))
        })?;

        let text = std::str::from_utf8(blob.content()).map_err(|_| {
            GuardError::manifest(format!(
                "{} is not valid UTF-8 at commit {}",
                MANIFEST_FILE,
                commit.id()
            ))
        })?;

        Ok(Some(text.to_string()))
    }
}

impl super::Repository for Git2Repository {
    fn reference_exists(&self, reference: &str) -> bool {
        self.repo.revparse_single(reference).is_ok()
    }

    fn manifest_at(&self, reference: &str) -> Result<String> {
        let object = self.repo.revparse_single(reference)?;
        let commit = object.peel_to_commit()?;

        self.manifest_blob(&commit)?.ok_or_else(|| {
            GuardError::manifest(format!("{} not found at '{}'", MANIFEST_FILE, reference))
        })
    }

    fn manifest_revisions(&self) -> Result<Vec<ManifestRevision>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let mut revisions = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            let text = match self.manifest_blob(&commit)? {
                Some(text) => text,
                None => continue,
            };

            // Merge commits compare against the first parent only
            let parent_text = match commit.parent(0) {
                Ok(parent) => self.manifest_blob(&parent)?,
                Err(_) => None,
            };

            if parent_text.as_deref() == Some(text.as_str()) {
                continue;
            }

            revisions.push(ManifestRevision {
                commit: oid.to_string(),
                text,
                parent_text,
            });
        }

        Ok(revisions)
    }

    fn commits_since(&self, commit: &str) -> Result<u32> {
        let oid = git2::Oid::from_str(commit)?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        revwalk.hide(oid)?;

        let mut count = 0u32;
        for oid in revwalk {
            oid?;
            count += 1;
        }

        Ok(count)
    }

    fn is_shallow(&self) -> bool {
        self.repo.is_shallow()
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send.
// All trait methods are read-only queries; libgit2 is thread-safe for
// read operations via its thread-safe design.
unsafe impl Sync for Git2Repository {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_outside_a_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Git2Repository::open(dir.path()).is_err());
    }
}
