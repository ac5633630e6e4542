use crate::domain::VersionExt;
use semver::Version;
use std::fmt;

/// Snapshot of the version tags nearest to HEAD
///
/// `distance_from_any` is not guaranteed to be less than or equal to
/// `distance_from_normal`: the two tags may sit on different branch points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestVersion {
    /// Nearest tagged version without a pre-release label
    pub normal: Version,
    /// Nearest tagged version of any kind
    pub any: Version,
    /// Stage label of `any`, if it is a pre-release
    pub stage: Option<String>,
    /// Commits from HEAD back to the `normal` tag
    pub distance_from_normal: u64,
    /// Commits from HEAD back to the `any` tag
    pub distance_from_any: u64,
}

impl NearestVersion {
    /// Build a snapshot, deriving `stage` from `any`
    pub fn new(
        normal: Version,
        any: Version,
        distance_from_normal: u64,
        distance_from_any: u64,
    ) -> Self {
        let stage = any.stage();
        NearestVersion {
            normal,
            any,
            stage,
            distance_from_normal,
            distance_from_any,
        }
    }

    /// Snapshot for a history with no version tags at all
    pub fn untagged(commit_count: u64) -> Self {
        NearestVersion::new(
            Version::new(0, 0, 0),
            Version::new(0, 0, 0),
            commit_count,
            commit_count,
        )
    }
}

impl fmt::Display for NearestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "normal {} ({} commits ago), any {} ({} commits ago)",
            self.normal, self.distance_from_normal, self.any, self.distance_from_any
        )
    }
}
