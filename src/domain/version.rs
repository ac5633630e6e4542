//! Semantic version helpers layered over [`semver::Version`]
//!
//! Parsing, formatting and precedence come from the `semver` crate. This module
//! adds the handful of transformations version inference needs.

use crate::domain::ChangeScope;
use crate::error::{ReckonError, Result};
use semver::{BuildMetadata, Prerelease, Version};

/// Version transformations used by the inference engine
pub trait VersionExt {
    /// The `major.minor.patch` part, without pre-release or build metadata
    fn normal(&self) -> Version;

    /// Whether the version carries no pre-release label
    fn is_normal(&self) -> bool;

    /// Increment the component named by `scope`, resetting lower components
    /// and clearing pre-release and build metadata
    ///
    /// Fails when the component is already `u64::MAX`.
    fn increment(&self, scope: ChangeScope) -> Result<Version>;

    /// Replace the pre-release label
    fn with_pre_release(&self, pre: &str) -> Result<Version>;

    /// Replace the build metadata
    fn with_build_metadata(&self, build: &str) -> Result<Version>;

    /// Increment the trailing numeric identifier of the pre-release label
    ///
    /// `rc.1` becomes `rc.2`; a label without a numeric suffix gains `.1`.
    fn increment_pre_release(&self) -> Result<Version>;

    /// The stage name of a pre-release (its first non-numeric identifier)
    fn stage(&self) -> Option<String>;
}

impl VersionExt for Version {
    fn normal(&self) -> Version {
        Version::new(self.major, self.minor, self.patch)
    }

    fn is_normal(&self) -> bool {
        self.pre.is_empty()
    }

    fn increment(&self, scope: ChangeScope) -> Result<Version> {
        let component = match scope {
            ChangeScope::Major => self.major,
            ChangeScope::Minor => self.minor,
            ChangeScope::Patch => self.patch,
        };
        let next = component.checked_add(1).ok_or_else(|| {
            ReckonError::invalid_argument(format!(
                "Cannot increment {} component of {}: already at maximum",
                scope, self
            ))
        })?;

        Ok(match scope {
            ChangeScope::Major => Version::new(next, 0, 0),
            ChangeScope::Minor => Version::new(self.major, next, 0),
            ChangeScope::Patch => Version::new(self.major, self.minor, next),
        })
    }

    fn with_pre_release(&self, pre: &str) -> Result<Version> {
        let mut version = self.clone();
        version.pre = Prerelease::new(pre)?;
        Ok(version)
    }

    fn with_build_metadata(&self, build: &str) -> Result<Version> {
        let mut version = self.clone();
        version.build = BuildMetadata::new(build)?;
        Ok(version)
    }

    fn increment_pre_release(&self) -> Result<Version> {
        if self.pre.is_empty() {
            return Err(ReckonError::invalid_argument(format!(
                "Version {} has no pre-release label to increment",
                self
            )));
        }

        let mut identifiers: Vec<String> = self.pre.split('.').map(str::to_string).collect();
        let next = match identifiers.last().and_then(|last| last.parse::<u64>().ok()) {
            Some(n) => {
                identifiers.pop();
                n.checked_add(1).ok_or_else(|| {
                    ReckonError::invalid_argument(format!(
                        "Cannot increment pre-release of {}: already at maximum",
                        self
                    ))
                })?
            }
            None => 1,
        };
        identifiers.push(next.to_string());

        self.with_pre_release(&identifiers.join("."))
    }

    fn stage(&self) -> Option<String> {
        self.pre
            .split('.')
            .next()
            .filter(|first| !first.is_empty() && first.parse::<u64>().is_err())
            .map(str::to_string)
    }
}
