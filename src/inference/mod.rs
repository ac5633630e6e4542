//! Version inference: decides the next version from the nearest tags,
//! a requested scope and a requested stage

pub mod engine;
pub mod strategy;

pub use engine::{InferenceResult, VersionInferenceEngine};
pub use strategy::{ConfiguredStrategy, DefaultStrategy, InferenceStrategy};
