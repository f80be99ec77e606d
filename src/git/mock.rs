use crate::error::{GuardError, Result};
use crate::git::{ManifestRevision, Repository};
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    references: HashSet<String>,
    manifests: HashMap<String, String>,
    revisions: Vec<ManifestRevision>,
    commit_counts: HashMap<String, u32>,
    shallow: bool,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            references: HashSet::new(),
            manifests: HashMap::new(),
            revisions: Vec::new(),
            commit_counts: HashMap::new(),
            shallow: false,
        }
    }

    /// Register an existing reference
    pub fn add_reference(&mut self, reference: impl Into<String>) {
        self.references.insert(reference.into());
    }

    /// Set the manifest text visible at a reference
    pub fn set_manifest(&mut self, reference: impl Into<String>, text: impl Into<String>) {
        let reference = reference.into();
        self.references.insert(reference.clone());
        self.manifests.insert(reference, text.into());
    }

    /// Append a manifest revision; call newest first
    pub fn push_revision(
        &mut self,
        commit: impl Into<String>,
        text: impl Into<String>,
        parent_text: Option<&str>,
    ) {
        self.revisions.push(ManifestRevision {
            commit: commit.into(),
            text: text.into(),
            parent_text: parent_text.map(|s| s.to_string()),
        });
    }

    /// Set the commit count between a commit and HEAD
    pub fn set_commits_since(&mut self, commit: impl Into<String>, count: u32) {
        self.commit_counts.insert(commit.into(), count);
    }

    /// Mark the history as shallow
    pub fn set_shallow(&mut self, shallow: bool) {
        self.shallow = shallow;
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn reference_exists(&self, reference: &str) -> bool {
        self.references.contains(reference)
    }

    fn manifest_at(&self, reference: &str) -> Result<String> {
        self.manifests
            .get(reference)
            .cloned()
            .ok_or_else(|| GuardError::manifest(format!("no manifest at '{}'", reference)))
    }

    fn manifest_revisions(&self) -> Result<Vec<ManifestRevision>> {
        Ok(self.revisions.clone())
    }

    fn commits_since(&self, commit: &str) -> Result<u32> {
        self.commit_counts
            .get(commit)
            .copied()
            .ok_or_else(|| GuardError::manifest(format!("unknown commit '{}'", commit)))
    }

    fn is_shallow(&self) -> bool {
        self.shallow
    }
}
