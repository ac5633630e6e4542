use crate::domain::{ChangeScope, NearestVersion, Stage, StageSet, VersionExt};
use crate::error::Result;
use crate::git::Repository;
use crate::inference::strategy::{DefaultStrategy, InferenceStrategy};
use semver::Version;
use std::fmt;
use tracing::info;

/// Outcome of a single inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResult {
    /// The inferred version, or the nearest version unchanged when not releasable
    pub version: Version,
    /// Whether a new version was permitted
    pub releasable: bool,
    /// The snapshot the version was computed from
    pub nearest: NearestVersion,
}

impl fmt::Display for InferenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}

/// Infers the next version from the tags nearest to HEAD
///
/// The engine keeps the last successful result. [version](Self::version)
/// returns it, running a default inference first if nothing has been inferred
/// yet; every successful `infer*` call replaces it. Failed calls leave it
/// untouched. Methods that write the cache take `&mut self`, so concurrent use
/// needs external synchronization.
pub struct VersionInferenceEngine<R, S = DefaultStrategy> {
    repo: R,
    stages: StageSet,
    strategy: S,
    last: Option<InferenceResult>,
}

impl<R: Repository> VersionInferenceEngine<R, DefaultStrategy> {
    /// Create an engine with the default strategy
    pub fn new(repo: R, stages: StageSet) -> Self {
        Self::with_strategy(repo, stages, DefaultStrategy)
    }
}

impl<R: Repository, S: InferenceStrategy> VersionInferenceEngine<R, S> {
    /// Create an engine with a custom strategy
    pub fn with_strategy(repo: R, stages: StageSet, strategy: S) -> Self {
        VersionInferenceEngine {
            repo,
            stages,
            strategy,
            last: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// The last successful result, if any
    pub fn last_result(&self) -> Option<&InferenceResult> {
        self.last.as_ref()
    }

    /// Scope and stage used when the caller supplies neither
    ///
    /// The stage is the lowest untagged stage and the scope is `patch`.
    pub fn resolve_default_scope_and_stage(&self) -> Result<(ChangeScope, Stage)> {
        Ok((ChangeScope::default(), self.stages.default_stage()?))
    }

    /// Infer using the default scope and stage
    pub fn infer_default(&mut self) -> Result<InferenceResult> {
        let (scope, stage) = self.resolve_default_scope_and_stage()?;
        self.infer_stage(scope, stage)
    }

    /// Infer for an explicit scope and stage name
    pub fn infer(&mut self, scope: ChangeScope, stage: &str) -> Result<InferenceResult> {
        let stage = self.stages.classify(stage)?;
        self.infer_stage(scope, stage)
    }

    /// Infer, defaulting whichever of scope and stage is absent
    pub fn infer_with(
        &mut self,
        scope: Option<ChangeScope>,
        stage: Option<&str>,
    ) -> Result<InferenceResult> {
        let stage = match stage {
            Some(name) => self.stages.classify(name)?,
            None => self.stages.default_stage()?,
        };
        self.infer_stage(scope.unwrap_or_default(), stage)
    }

    /// Infer from textual scope and stage, as read from configuration
    ///
    /// Blank values count as absent.
    pub fn infer_from_str(
        &mut self,
        scope: Option<&str>,
        stage: Option<&str>,
    ) -> Result<InferenceResult> {
        let scope = non_blank(scope).map(ChangeScope::parse).transpose()?;
        self.infer_with(scope, non_blank(stage))
    }

    /// The last inferred version, inferring with defaults on first use
    pub fn version(&mut self) -> Result<Version> {
        if let Some(last) = &self.last {
            return Ok(last.version.clone());
        }
        Ok(self.infer_default()?.version)
    }

    fn infer_stage(&mut self, scope: ChangeScope, stage: Stage) -> Result<InferenceResult> {
        let result = self.compute(scope, &stage)?;
        self.last = Some(result.clone());
        Ok(result)
    }

    fn compute(&self, scope: ChangeScope, stage: &Stage) -> Result<InferenceResult> {
        info!(%scope, %stage, "inferring version");

        let nearest = self.repo.locate_nearest_version()?;
        info!(%nearest, "located nearest versions");

        if !self.strategy.allow_release(&nearest) {
            info!(version = %nearest.any, "release not allowed, keeping nearest version");
            return Ok(InferenceResult {
                version: nearest.any.clone(),
                releasable: false,
                nearest,
            });
        }

        let target = nearest.normal.increment(scope)?;
        let mut version = match stage {
            Stage::Final => target,
            Stage::Untagged(name) => {
                target.with_pre_release(&format!("{}.{}", name, nearest.distance_from_normal))?
            }
            Stage::Tagged(name) if continues_release_train(&nearest, &target, name) => {
                let next = nearest.any.increment_pre_release()?;
                target.with_pre_release(next.pre.as_str())?
            }
            Stage::Tagged(name) => target.with_pre_release(&format!("{}.1", name))?,
        };

        if self.strategy.use_build_metadata(stage) {
            let build = self.strategy.create_build_metadata(&self.repo)?;
            version = version.with_build_metadata(&build)?;
        }

        info!(%version, "inferred version");
        Ok(InferenceResult {
            version,
            releasable: true,
            nearest,
        })
    }
}

/// The nearest tag is already a pre-release of `target` in the same stage
fn continues_release_train(nearest: &NearestVersion, target: &Version, stage: &str) -> bool {
    nearest.any.normal() == *target && nearest.stage.as_deref() == Some(stage)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
