use crate::domain::{NearestVersion, Stage};
use crate::error::Result;
use crate::git::Repository;

/// Override points consulted by the inference engine
///
/// Each hook is called at most once per inference, in this order:
/// [allow_release](InferenceStrategy::allow_release), then (only when a
/// release is allowed) [use_build_metadata](InferenceStrategy::use_build_metadata),
/// then (only when that returned `true`)
/// [create_build_metadata](InferenceStrategy::create_build_metadata).
pub trait InferenceStrategy: Send {
    /// Whether any new version may be produced
    ///
    /// Defaults to requiring at least one commit since the nearest version of any kind.
    fn allow_release(&self, nearest: &NearestVersion) -> bool {
        nearest.distance_from_any > 0
    }

    /// Whether build metadata is appended for `stage`
    ///
    /// Defaults to every stage except `final`.
    fn use_build_metadata(&self, stage: &Stage) -> bool {
        !stage.is_final()
    }

    /// The build metadata to append
    ///
    /// Defaults to the abbreviated id of the HEAD commit.
    fn create_build_metadata(&self, repo: &dyn Repository) -> Result<String> {
        repo.head_short_id()
    }
}

/// Strategy using every default
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStrategy;

impl InferenceStrategy for DefaultStrategy {}

/// Strategy driven by the `[build_metadata]` configuration section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredStrategy {
    /// When false, no stage receives build metadata
    pub build_metadata: bool,
    /// Static metadata used instead of the HEAD short id
    pub build_metadata_value: Option<String>,
}

impl Default for ConfiguredStrategy {
    fn default() -> Self {
        ConfiguredStrategy {
            build_metadata: true,
            build_metadata_value: None,
        }
    }
}

impl InferenceStrategy for ConfiguredStrategy {
    fn use_build_metadata(&self, stage: &Stage) -> bool {
        self.build_metadata && !stage.is_final()
    }

    fn create_build_metadata(&self, repo: &dyn Repository) -> Result<String> {
        match &self.build_metadata_value {
            Some(value) => Ok(value.clone()),
            None => repo.head_short_id(),
        }
    }
}
