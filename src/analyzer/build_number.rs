//! Build number derivation from commit history.
//!
//! The build number is the count of commits since the commit that introduced
//! the current version literal into the manifest.

use crate::domain::Version;
use crate::error::{GuardError, Result};
use crate::git::Repository;
use crate::manifest;

/// Find the commit that introduced `version` into the manifest.
///
/// Candidates are scanned newest first. A commit qualifies when the version
/// literal is present in its manifest but absent from its parent's, and the
/// manifest at that point actually parses to an equal version. The second
/// check guards against commits where the string appears without being the
/// live value, and against squashed history; candidates whose manifest fails
/// to parse are skipped rather than aborting the scan.
pub fn find_base_version_commit<R: Repository>(repo: &R, version: &Version) -> Result<String> {
    let literal = format!("version = \"{}\"", version);

    for revision in repo.manifest_revisions()? {
        if !revision.text.contains(&literal) {
            continue;
        }
        if let Some(parent_text) = &revision.parent_text {
            if parent_text.contains(&literal) {
                continue;
            }
        }

        match manifest::version_from_text(&revision.text, true) {
            Ok(found) if found == *version => return Ok(revision.commit),
            _ => continue,
        }
    }

    if repo.is_shallow() {
        return Err(GuardError::HistoryUnavailable(version.to_string()));
    }
    Err(GuardError::BaseCommitNotFound(version.to_string()))
}

/// Derive the build number for `version` from git history.
pub fn derive_build_number<R: Repository>(repo: &R, version: &Version) -> Result<u32> {
    let base_commit = find_base_version_commit(repo, version)?;
    repo.commits_since(&base_commit)
}
