//! Control-plane version parsing and ordering.
//!
//! Clusters report versions such as `v1.24.0`, `v1.24.0-rc.0` or
//! `v1.24.0+k3s1`. After stripping the discovery-endpoint decorations the
//! string is parsed as a [`semver::Version`], and versions are ordered by
//! semver precedence only: build metadata is kept for display but never
//! takes part in equality or ordering.

use crate::error::VersionParseError;
use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// The lowest version semver can express, `0.0.0-0`.
pub(crate) static OLDEST: LazyLock<Version> =
    LazyLock::new(|| Version::with_pre_release(0, 0, 0, "0"));

/// Strip leading ASCII whitespace and a single `v` prefix.
///
/// Only ASCII whitespace counts; a non-breaking space is left in place and
/// fails to parse.
fn normalize(input: &str) -> &str {
    let trimmed = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    trimmed.strip_prefix('v').unwrap_or(trimmed)
}

/// A parsed control-plane version.
#[derive(Debug, Clone)]
pub(crate) struct Version(semver::Version);

impl Version {
    /// Build a threshold version from known-good parts.
    pub(crate) fn with_pre_release(major: u64, minor: u64, patch: u64, pre: &str) -> Self {
        let mut version = semver::Version::new(major, minor, patch);
        version.pre = Prerelease::new(pre).unwrap();
        Self(version)
    }

    /// Parse a version as reported by a cluster's discovery endpoint.
    ///
    /// Leading whitespace and a single leading `v` are accepted. Trailing
    /// text of any kind is not.
    pub(crate) fn parse(input: &str) -> Result<Self, VersionParseError> {
        semver::Version::parse(normalize(input))
            .map(Self)
            .map_err(|e| VersionParseError::new(input, &e))
    }

    pub(crate) fn is_pre_release(&self) -> bool {
        !self.0.pre.is_empty()
    }

    pub(crate) fn build_metadata(&self) -> Option<&str> {
        (!self.0.build.is_empty()).then(|| self.0.build.as_str())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// semver's own `Ord` breaks ties on build metadata; precedence does not.
impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}
