use crate::domain::{ChangeScope, StageSet, TagPattern};
use crate::error::{ReckonError, Result};
use crate::inference::ConfiguredStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "reckon.toml";

/// Represents the complete configuration for git-reckon.
///
/// Contains the tag naming pattern, optional default scope and stage, the
/// stage classification and build metadata behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    /// Scope used when none is given on the command line
    #[serde(default)]
    pub scope: Option<String>,

    /// Stage used when none is given on the command line
    #[serde(default)]
    pub stage: Option<String>,

    #[serde(default)]
    pub stages: StagesConfig,

    #[serde(default)]
    pub build_metadata: BuildMetadataConfig,
}

/// Returns the default tag naming pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Returns the default stages numbered by commit distance.
fn default_untagged_stages() -> Vec<String> {
    vec!["dev".to_string()]
}

/// Returns the default stages numbered by release sequence.
fn default_tagged_stages() -> Vec<String> {
    vec!["milestone".to_string(), "rc".to_string()]
}

fn default_true() -> bool {
    true
}

/// Stage classification.
///
/// `final` is always valid and must not appear in either list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StagesConfig {
    #[serde(default = "default_untagged_stages")]
    pub untagged: Vec<String>,

    #[serde(default = "default_tagged_stages")]
    pub tagged: Vec<String>,
}

impl Default for StagesConfig {
    fn default() -> Self {
        StagesConfig {
            untagged: default_untagged_stages(),
            tagged: default_tagged_stages(),
        }
    }
}

/// Build metadata behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildMetadataConfig {
    /// When false, no stage receives build metadata
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Static metadata used instead of the HEAD short id
    #[serde(default)]
    pub value: Option<String>,
}

impl Default for BuildMetadataConfig {
    fn default() -> Self {
        BuildMetadataConfig {
            enabled: true,
            value: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tag_pattern: default_tag_pattern(),
            scope: None,
            stage: None,
            stages: StagesConfig::default(),
            build_metadata: BuildMetadataConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(text).map_err(|e| ReckonError::config(format!("Invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// The validated stage classification
    pub fn stage_set(&self) -> Result<StageSet> {
        StageSet::new(self.stages.untagged.clone(), self.stages.tagged.clone())
    }

    /// The compiled tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.clone())
    }

    /// The inference strategy described by `[build_metadata]`
    pub fn strategy(&self) -> ConfiguredStrategy {
        ConfiguredStrategy {
            build_metadata: self.build_metadata.enabled,
            build_metadata_value: self.build_metadata.value.clone(),
        }
    }

    /// Check every setting that would otherwise only fail at inference time
    pub fn validate(&self) -> Result<()> {
        let stages = self.stage_set()?;
        self.tag_pattern()?;

        if let Some(scope) = self.scope.as_deref().filter(|s| !s.trim().is_empty()) {
            ChangeScope::parse(scope)
                .map_err(|e| ReckonError::config(format!("Default scope: {}", e)))?;
        }
        if let Some(stage) = self.stage.as_deref().filter(|s| !s.trim().is_empty()) {
            stages
                .classify(stage.trim())
                .map_err(|e| ReckonError::config(format!("Default stage: {}", e)))?;
        }
        if let Some(value) = &self.build_metadata.value {
            semver::BuildMetadata::new(value).map_err(|e| {
                ReckonError::config(format!("Invalid build metadata \"{}\": {}", value, e))
            })?;
        }

        Ok(())
    }
}

/// Locates the configuration file to load, if any.
///
/// Attempts the following in order:
/// 1. Custom path provided as parameter
/// 2. `reckon.toml` in current directory
/// 3. `reckon.toml` in user config directory
pub fn find_config_file(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match find_config_file(config_path) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            match Config::from_toml(&text) {
                Err(ReckonError::Config(msg)) => Err(ReckonError::config(format!(
                    "{}: {}",
                    path.display(),
                    msg
                ))),
                other => other,
            }
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stage_set().unwrap(), StageSet::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("scope = \"minor\"\n").unwrap();
        assert_eq!(config.scope.as_deref(), Some("minor"));
        assert_eq!(config.tag_pattern, "v{version}");
        assert_eq!(config.stages.untagged, vec!["dev".to_string()]);
        assert!(config.build_metadata.enabled);
    }

    #[test]
    fn test_rejects_overlapping_stages() {
        let toml = r#"
[stages]
untagged = ["dev"]
tagged = ["dev", "rc"]
"#;
        assert!(matches!(
            Config::from_toml(toml).unwrap_err(),
            ReckonError::Config(_)
        ));
    }

    #[test]
    fn test_rejects_unknown_default_stage() {
        let err = Config::from_toml("stage = \"beta\"\n").unwrap_err();
        assert!(err.to_string().contains("Default stage"));
    }

    #[test]
    fn test_rejects_unknown_default_scope() {
        assert!(Config::from_toml("scope = \"huge\"\n").is_err());
    }

    #[test]
    fn test_rejects_pattern_without_placeholder() {
        assert!(Config::from_toml("tag_pattern = \"release\"\n").is_err());
    }

    #[test]
    fn test_rejects_invalid_build_metadata() {
        let toml = r#"
[build_metadata]
value = "not valid!"
"#;
        assert!(Config::from_toml(toml).is_err());
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(Config::from_toml("stages = [").is_err());
    }

    #[test]
    fn test_strategy_from_config() {
        let toml = r#"
[build_metadata]
enabled = false
value = "ci.7"
"#;
        let strategy = Config::from_toml(toml).unwrap().strategy();
        assert!(!strategy.build_metadata);
        assert_eq!(strategy.build_metadata_value.as_deref(), Some("ci.7"));
    }
}
