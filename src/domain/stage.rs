//! Release stages and their numbering strategy
//!
//! A stage name is classified once, at validation time, into one of three
//! disjoint kinds:
//!
//! - untagged stages (e.g. `dev`) are numbered by commits since the nearest normal version
//! - tagged stages (e.g. `milestone`, `rc`) are numbered by release sequence
//! - `final` produces a normal version with no pre-release label

use crate::error::{ReckonError, Result};
use std::collections::BTreeSet;
use std::fmt;

/// Name of the reserved stage that produces normal versions
pub const FINAL_STAGE: &str = "final";

/// A validated stage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stage {
    /// No pre-release label
    Final,
    /// Numbered by commit distance from the nearest normal version
    Untagged(String),
    /// Numbered by release sequence within a target normal version
    Tagged(String),
}

impl Stage {
    /// The stage name as it appears in pre-release labels
    pub fn name(&self) -> &str {
        match self {
            Stage::Final => FINAL_STAGE,
            Stage::Untagged(name) | Stage::Tagged(name) => name,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Stage::Final)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The configured untagged and tagged stage names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSet {
    untagged: BTreeSet<String>,
    tagged: BTreeSet<String>,
}

impl StageSet {
    /// Build a stage set, rejecting names that cannot form a pre-release label,
    /// the reserved `final` name, and names present in both sets
    pub fn new<I, J, S>(untagged: I, tagged: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let untagged: BTreeSet<String> = untagged.into_iter().map(Into::into).collect();
        let tagged: BTreeSet<String> = tagged.into_iter().map(Into::into).collect();

        for name in untagged.iter().chain(tagged.iter()) {
            validate_stage_name(name)?;
        }

        if let Some(shared) = untagged.intersection(&tagged).next() {
            return Err(ReckonError::config(format!(
                "Stage \"{}\" cannot be both untagged and tagged",
                shared
            )));
        }

        Ok(StageSet { untagged, tagged })
    }

    pub fn untagged(&self) -> &BTreeSet<String> {
        &self.untagged
    }

    pub fn tagged(&self) -> &BTreeSet<String> {
        &self.tagged
    }

    /// Every valid stage name, sorted
    pub fn all(&self) -> Vec<String> {
        let mut all: Vec<String> = self
            .untagged
            .iter()
            .chain(self.tagged.iter())
            .cloned()
            .collect();
        all.push(FINAL_STAGE.to_string());
        all.sort();
        all
    }

    /// Resolve a stage name to its kind
    pub fn classify(&self, name: &str) -> Result<Stage> {
        if name == FINAL_STAGE {
            Ok(Stage::Final)
        } else if self.untagged.contains(name) {
            Ok(Stage::Untagged(name.to_string()))
        } else if self.tagged.contains(name) {
            Ok(Stage::Tagged(name.to_string()))
        } else {
            Err(ReckonError::invalid_argument(format!(
                "Invalid stage \"{}\"; must be one of: {}",
                name,
                self.all().join(", ")
            )))
        }
    }

    /// The lexicographically lowest untagged stage
    ///
    /// Under semver precedence this is the least finished label available.
    pub fn default_stage(&self) -> Result<Stage> {
        self.untagged
            .iter()
            .next()
            .map(|name| Stage::Untagged(name.clone()))
            .ok_or_else(|| {
                ReckonError::invalid_argument(
                    "No untagged stages configured; a stage must be given explicitly",
                )
            })
    }
}

impl Default for StageSet {
    fn default() -> Self {
        StageSet {
            untagged: ["dev".to_string()].into_iter().collect(),
            tagged: ["milestone".to_string(), "rc".to_string()]
                .into_iter()
                .collect(),
        }
    }
}

fn validate_stage_name(name: &str) -> Result<()> {
    if name == FINAL_STAGE {
        return Err(ReckonError::config(format!(
            "Stage \"{}\" is reserved and cannot be configured",
            FINAL_STAGE
        )));
    }

    let well_formed = !name.is_empty()
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !name.chars().all(|c| c.is_ascii_digit());

    if well_formed {
        Ok(())
    } else {
        Err(ReckonError::config(format!(
            "Invalid stage name \"{}\": expected alphanumerics and hyphens",
            name
        )))
    }
}
