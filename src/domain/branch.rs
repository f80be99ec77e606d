/// Branch kind driving which progression rules apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// Feature-integration branch (`develop`)
    Develop,
    /// Version-frozen merge target (`release`, `main`)
    Promotion,
    /// Any other branch; only the universal regression check applies
    Other,
}

/// Represents a resolved base branch with its short name and kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub kind: BranchKind,
}

impl BranchContext {
    /// Classify a resolved reference by its short name.
    ///
    /// Remote-tracking references like `origin/develop` classify the same as
    /// their local counterparts.
    pub fn from_reference(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        let name = reference
            .rsplit('/')
            .next()
            .unwrap_or(reference.as_str())
            .to_string();

        let kind = match name.as_str() {
            "develop" => BranchKind::Develop,
            "release" | "main" => BranchKind::Promotion,
            _ => BranchKind::Other,
        };

        BranchContext { name, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_develop_branch() {
        let branch = BranchContext::from_reference("develop");
        assert_eq!(branch.kind, BranchKind::Develop);
        assert_eq!(branch.name, "develop");
    }

    #[test]
    fn test_promotion_branches() {
        assert_eq!(
            BranchContext::from_reference("main").kind,
            BranchKind::Promotion
        );
        assert_eq!(
            BranchContext::from_reference("release").kind,
            BranchKind::Promotion
        );
    }

    #[test]
    fn test_other_branch() {
        let branch = BranchContext::from_reference("staging");
        assert_eq!(branch.kind, BranchKind::Other);
    }

    #[test]
    fn test_remote_tracking_reference_uses_short_name() {
        let branch = BranchContext::from_reference("origin/develop");
        assert_eq!(branch.name, "develop");
        assert_eq!(branch.kind, BranchKind::Develop);

        let branch = BranchContext::from_reference("origin/main");
        assert_eq!(branch.kind, BranchKind::Promotion);
    }
}
