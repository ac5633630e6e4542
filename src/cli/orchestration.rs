//! Main workflow orchestration logic
//!
//! This module contains the inference workflow behind the binary. It keeps CLI
//! argument parsing in `main.rs` separate from the steps below, so the
//! workflow can be driven programmatically without depending on clap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::git::Git2Repository;
use crate::inference::{InferenceResult, VersionInferenceEngine};

/// Arguments for the inference workflow
///
/// Mirrors the CLI Args in a form suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct InferWorkflowArgs {
    /// Directory inside the repository to inspect
    pub repo_path: PathBuf,

    /// Requested scope; falls back to the configured scope
    pub scope: Option<String>,

    /// Requested stage; falls back to the configured stage
    pub stage: Option<String>,

    /// Output the tag name instead of the bare version
    pub print_tag: bool,
}

impl Default for InferWorkflowArgs {
    fn default() -> Self {
        InferWorkflowArgs {
            repo_path: PathBuf::from("."),
            scope: None,
            stage: None,
            print_tag: false,
        }
    }
}

/// Result of a successful inference workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The engine's result
    pub inference: InferenceResult,

    /// Text to print: the version, or the tag name for it
    pub output: String,

    /// Non-fatal issues to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Main inference workflow
///
/// 1. Validate configuration into stages, tag pattern and strategy
/// 2. Open the git repository
/// 3. Resolve scope and stage (argument, then configuration, then defaults)
/// 4. Infer the version
/// 5. Collect boundary warnings and format the output
pub fn run_infer_workflow(args: InferWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let stages = config.stage_set()?;
    let pattern = config.tag_pattern()?;

    let repo = Git2Repository::open(&args.repo_path, pattern.clone()).with_context(|| {
        format!(
            "Cannot open git repository at '{}'",
            args.repo_path.display()
        )
    })?;

    let scope = first_non_blank(args.scope.as_deref(), config.scope.as_deref());
    let stage = first_non_blank(args.stage.as_deref(), config.stage.as_deref());
    debug!(?scope, ?stage, "resolved requested scope and stage");

    let mut engine = VersionInferenceEngine::with_strategy(repo, stages, config.strategy());
    let inference = engine.infer_from_str(scope, stage)?;

    let warnings = BoundaryWarning::detect(&inference, &pattern);
    let output = if args.print_tag {
        pattern.format(&inference.version)
    } else {
        inference.version.to_string()
    };

    Ok(WorkflowResult {
        inference,
        output,
        warnings,
    })
}

fn first_non_blank<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    primary
        .filter(|s| !s.trim().is_empty())
        .or(fallback.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_non_blank() {
        assert_eq!(first_non_blank(Some("minor"), Some("major")), Some("minor"));
        assert_eq!(first_non_blank(Some(" "), Some("major")), Some("major"));
        assert_eq!(first_non_blank(None, Some("major")), Some("major"));
        assert_eq!(first_non_blank(None, Some("")), None);
        assert_eq!(first_non_blank(None, None), None);
    }

    #[test]
    fn test_workflow_outside_repository_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = InferWorkflowArgs {
            repo_path: dir.path().to_path_buf(),
            ..InferWorkflowArgs::default()
        };

        let err = run_infer_workflow(args, Config::default()).unwrap_err();
        assert!(err.to_string().contains("Cannot open git repository"));
    }
}
