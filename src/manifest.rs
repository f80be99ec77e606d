//! Manifest version loading.
//!
//! The governed project declares its version as a `project.version` string
//! in `project.toml` at the repository root. Worktree loads forbid a build
//! component; history loads tolerate one (older manifest formats carried it).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::Version;
use crate::error::{GuardError, Result};

/// Manifest file expected at the repository root
pub const MANIFEST_FILE: &str = "project.toml";

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    project: Option<toml::Value>,
}

/// Extract and parse the version from manifest text.
pub fn version_from_text(text: &str, allow_build: bool) -> Result<Version> {
    let doc: ManifestDoc =
        toml::from_str(text).map_err(|e| GuardError::manifest(e.to_string()))?;

    let version_value = match doc.project {
        Some(toml::Value::Table(ref project)) => project.get("version").cloned(),
        _ => None,
    };

    match version_value {
        Some(toml::Value::String(value)) => Version::parse(&value, allow_build),
        Some(_) => Err(GuardError::WrongType),
        None => Err(GuardError::MissingField),
    }
}

/// Load the head version from the working tree
pub fn version_from_worktree(root: &Path) -> Result<Version> {
    let text = fs::read_to_string(root.join(MANIFEST_FILE))?;
    version_from_text(&text, false)
}

/// Fail fast if invoked outside the repository root
pub fn ensure_project_root(root: &Path) -> Result<()> {
    if !root.join(MANIFEST_FILE).is_file() {
        return Err(GuardError::manifest(format!(
            "Run from the repository root ({} missing).",
            MANIFEST_FILE
        )));
    }
    Ok(())
}
