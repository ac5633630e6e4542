use crate::domain::TagPattern;
use crate::inference::InferenceResult;
use semver::{BuildMetadata, Version};
use std::fmt;

/// Warnings that occur when inferring near the edges of the tag history.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the nearest tag; the nearest version is reported unchanged
    NothingToRelease { nearest_tag: String },
    /// No tag matched the configured pattern; inference started from 0.0.0
    NoVersionTags { pattern: String, commits: u64 },
    /// The inferred version has lower precedence than an existing tag
    BelowNearestTag { inferred: String, nearest_tag: String },
}

impl BoundaryWarning {
    /// Collect the warnings that apply to an inference result
    pub fn detect(result: &InferenceResult, pattern: &TagPattern) -> Vec<BoundaryWarning> {
        let mut warnings = Vec::new();
        let nearest = &result.nearest;
        let zero = Version::new(0, 0, 0);

        if nearest.normal == zero && nearest.any == zero {
            warnings.push(BoundaryWarning::NoVersionTags {
                pattern: pattern.as_str().to_string(),
                commits: nearest.distance_from_normal,
            });
        }

        if !result.releasable {
            warnings.push(BoundaryWarning::NothingToRelease {
                nearest_tag: pattern.format(&nearest.any),
            });
        } else if without_build(&result.version) < without_build(&nearest.any) {
            warnings.push(BoundaryWarning::BelowNearestTag {
                inferred: result.version.to_string(),
                nearest_tag: pattern.format(&nearest.any),
            });
        }

        warnings
    }
}

/// Build metadata does not take part in precedence
fn without_build(version: &Version) -> Version {
    let mut version = version.clone();
    version.build = BuildMetadata::EMPTY;
    version
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NothingToRelease { nearest_tag } => {
                write!(
                    f,
                    "No new commits since tag '{}'; nothing to release",
                    nearest_tag
                )
            }
            BoundaryWarning::NoVersionTags { pattern, commits } => {
                write!(
                    f,
                    "No tags match pattern '{}'; inferring from 0.0.0 across {} commits",
                    pattern, commits
                )
            }
            BoundaryWarning::BelowNearestTag {
                inferred,
                nearest_tag,
            } => {
                write!(
                    f,
                    "Inferred version {} precedes existing tag '{}'",
                    inferred, nearest_tag
                )
            }
        }
    }
}
