//! Check orchestration.
//!
//! Evaluation order: the head version's build number is always derived as a
//! sanity check that history search succeeds, then the base comparison runs
//! only when the configuration requests one.

use crate::analyzer;
use crate::config::CheckConfig;
use crate::domain::{BranchContext, Version};
use crate::error::Result;
use crate::git::{self, Repository};
use crate::manifest;
use crate::rules;

/// Base comparison performed during a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// The resolved base reference (possibly remote-tracking)
    pub reference: String,
    /// Short name of the base branch
    pub branch: String,
    /// Version declared at the base reference
    pub base: Version,
}

/// Result of a successful check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub head: Version,
    pub build_number: u32,
    /// None when no base comparison was requested
    pub comparison: Option<Comparison>,
}

/// Run the version governance check for an already-loaded head version.
pub fn run_check<R: Repository>(
    repo: &R,
    head: Version,
    config: &CheckConfig,
) -> Result<CheckOutcome> {
    let build_number = analyzer::derive_build_number(repo, &head)?;

    let comparison = match config.comparison_base() {
        Some(base_ref) => {
            let reference = git::resolve_base_reference(repo, base_ref)?;
            let base_text = repo.manifest_at(&reference)?;
            let base = manifest::version_from_text(&base_text, true)?;

            let branch = BranchContext::from_reference(reference.as_str());
            rules::check_progression(branch.kind, base, head)?;

            Some(Comparison {
                reference,
                branch: branch.name,
                base,
            })
        }
        None => None,
    };

    Ok(CheckOutcome {
        head,
        build_number,
        comparison,
    })
}
