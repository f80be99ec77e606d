//! Runtime configuration for the version checker.
//!
//! CI context comes from `GITHUB_BASE_REF` / `GITHUB_EVENT_NAME`. The
//! environment is read exactly once at startup and folded into an explicit
//! [CheckConfig]; CLI arguments take precedence over the environment.

use std::env;

/// Environment variable carrying the CI-provided base branch name
pub const BASE_REF_ENV: &str = "GITHUB_BASE_REF";

/// Environment variable carrying the CI event type
pub const EVENT_NAME_ENV: &str = "GITHUB_EVENT_NAME";

/// Resolved checker configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub base_ref: Option<String>,
    pub event_name: Option<String>,
    /// True when the base ref came from the CLI rather than the environment
    pub base_ref_explicit: bool,
}

impl CheckConfig {
    /// Resolve configuration from CLI arguments and the process environment.
    pub fn resolve(cli_base_ref: Option<String>, cli_event_name: Option<String>) -> Self {
        Self::from_parts(
            cli_base_ref,
            cli_event_name,
            env::var(BASE_REF_ENV).ok(),
            env::var(EVENT_NAME_ENV).ok(),
        )
    }

    /// Combine CLI and environment values, CLI winning.
    pub fn from_parts(
        cli_base_ref: Option<String>,
        cli_event_name: Option<String>,
        env_base_ref: Option<String>,
        env_event_name: Option<String>,
    ) -> Self {
        let base_ref_explicit = cli_base_ref.is_some();
        let base_ref = cli_base_ref
            .or(env_base_ref)
            .filter(|value| !value.is_empty());
        let event_name = cli_event_name.or(env_event_name);

        CheckConfig {
            base_ref,
            event_name,
            base_ref_explicit,
        }
    }

    /// The base ref to compare against, when a comparison is requested.
    ///
    /// A comparison runs only when a base ref is known and either the CI
    /// event is a pull request or the ref was passed explicitly on the CLI.
    /// Otherwise the comparison is skipped and the run succeeds on the head
    /// checks alone.
    pub fn comparison_base(&self) -> Option<&str> {
        let base_ref = self.base_ref.as_deref()?;
        if self.base_ref_explicit || self.event_name.as_deref() == Some("pull_request") {
            Some(base_ref)
        } else {
            None
        }
    }
}
