pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod inference;
pub mod telemetry;
pub mod ui;

pub use domain::{ChangeScope, NearestVersion, Stage, StageSet};
pub use error::{ReckonError, Result};
pub use inference::{InferenceResult, VersionInferenceEngine};
