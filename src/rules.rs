//! Version progression rules.
//!
//! Pure functions over two immutable [Version] values. The universal
//! regression check always runs first; the branch kind then selects which
//! additional rule set applies.

use crate::domain::{BranchKind, Version};
use crate::error::{GuardError, Result};

/// Evaluate all progression rules for a pull request against `kind`.
pub fn check_progression(kind: BranchKind, base: Version, head: Version) -> Result<()> {
    ensure_not_regressed(base, head)?;

    match kind {
        BranchKind::Develop => check_develop(base, head),
        BranchKind::Promotion => check_promotion(base, head),
        BranchKind::Other => Ok(()),
    }
}

/// Ensure the head version does not regress from the base
pub fn ensure_not_regressed(base: Version, head: Version) -> Result<()> {
    if head < base {
        return Err(GuardError::VersionRegressed {
            base: base.to_string(),
            head: head.to_string(),
        });
    }
    Ok(())
}

/// Validate develop-bound version rules.
///
/// Same (major, minor): the patch may stay put (routine commit) or move up
/// by exactly one (new patch cycle). A minor bump requires the patch to
/// reset to 0; a major bump requires minor and patch to reset to 0.
pub fn check_develop(base: Version, head: Version) -> Result<()> {
    if (head.major, head.minor) == (base.major, base.minor) {
        if head.patch == base.patch || head.patch == base.patch + 1 {
            return Ok(());
        }
        return Err(GuardError::progression(format!(
            "PATCH must remain the same for feature work or increment by 1 for a new cycle. \
             Base is {}, head is {}.",
            base, head
        )));
    }

    if head.major == base.major && head.minor > base.minor {
        if head.patch != 0 {
            return Err(GuardError::progression(
                "PATCH must reset to 0 when MINOR changes.",
            ));
        }
        return Ok(());
    }

    if head.major > base.major && (head.minor != 0 || head.patch != 0) {
        return Err(GuardError::progression(
            "MINOR and PATCH must reset to 0 when MAJOR changes.",
        ));
    }

    Ok(())
}

/// Validate promotion-bound version rules.
///
/// Promotions must not alter the declared version.
pub fn check_promotion(base: Version, head: Version) -> Result<()> {
    if head != base {
        return Err(GuardError::PromotionVersionChanged {
            base: base.to_string(),
            head: head.to_string(),
        });
    }
    Ok(())
}
