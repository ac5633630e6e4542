// tests/config_test.rs
use git_reckon::config::{load_config, Config, CONFIG_FILE_NAME};
use git_reckon::domain::{Stage, StageSet};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.tag_pattern, "v{version}");
    assert_eq!(config.scope, None);
    assert_eq!(config.stage, None);
    assert_eq!(config.stage_set().unwrap(), StageSet::default());
    assert!(config.build_metadata.enabled);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
scope = "major"

[stages]
untagged = ["dev", "ci"]
tagged = ["rc"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.scope.as_deref(), Some("major"));

    let stages = config.stage_set().unwrap();
    assert_eq!(
        stages.default_stage().unwrap(),
        Stage::Untagged("ci".to_string())
    );
    assert!(stages.classify("milestone").is_err());
}

#[test]
fn test_load_fixture() {
    let config = load_config(Some("tests/fixtures/reckon.toml")).expect("Failed to load fixture");
    assert_eq!(config.tag_pattern, "release-{version}");
    assert_eq!(config.stage.as_deref(), Some("beta"));
    assert!(!config.build_metadata.enabled);
    assert_eq!(
        config.stage_set().unwrap().classify("beta").unwrap(),
        Stage::Tagged("beta".to_string())
    );
}

#[test]
fn test_invalid_file_names_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"stage = \"final-ish\"\n").unwrap();
    temp_file.flush().unwrap();

    let path = temp_file.path().to_str().unwrap().to_string();
    let err = load_config(Some(&path)).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains(&path), "{}", msg);
    assert!(msg.contains("final-ish"), "{}", msg);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    assert!(load_config(Some("tests/fixtures/does-not-exist.toml")).is_err());
}

#[test]
#[serial]
fn test_load_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(CONFIG_FILE_NAME),
        "tag_pattern = \"{version}\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(temp_dir.path()).expect("Could not change to temp dir");
    let config = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(config.unwrap().tag_pattern, "{version}");
}
