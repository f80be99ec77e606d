use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{GuardError, Result};

fn strict_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$").unwrap()
    })
}

fn build_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:\.(0|[1-9][0-9]*))?$")
            .unwrap()
    })
}

/// Semantic version representation without a build component.
///
/// Ordering is lexicographic on (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string against the strict MAJOR.MINOR.PATCH grammar.
    ///
    /// Components must have no leading zeros. When `allow_build` is set, a
    /// trailing `.BUILD` component is tolerated and discarded; older manifest
    /// formats in history may carry one, the working tree never does.
    pub fn parse(value: &str, allow_build: bool) -> Result<Self> {
        let pattern = if allow_build {
            build_pattern()
        } else {
            strict_pattern()
        };

        let captures = pattern
            .captures(value)
            .ok_or_else(|| GuardError::format(value))?;

        // The pattern guarantees each component is a plain decimal integer,
        // but a component can still overflow u32.
        let component = |index: usize| -> Result<u32> {
            captures[index]
                .parse::<u32>()
                .map_err(|_| GuardError::format(value))
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Return the version as a comparison tuple
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
