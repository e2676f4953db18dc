use std::path::{Path, PathBuf};

use tempfile::TempDir;

use stylebook::SbError;
use stylebook::config::{Config, DEFAULT_CONFIG_TOML, IdMode, PROJECT_CONFIG_FILE};

#[test]
fn partial_file_is_layered_over_defaults() {
    let config =
        Config::from_toml("[source]\nroot = \"assets/css\"\n\n[examples]\nids = \"sequential\"\n")
            .unwrap();
    assert_eq!(config.source.root, PathBuf::from("assets/css"));
    assert_eq!(config.examples.ids, IdMode::Sequential);
    assert_eq!(config.output.dest, PathBuf::from("styleguide"));
}

#[test]
fn explicit_config_replaces_project_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(PROJECT_CONFIG_FILE), "[output]\ndest = \"project\"\n").unwrap();
    let explicit = temp.path().join("ci.toml");
    std::fs::write(&explicit, "[output]\nextension = \"htm\"\n").unwrap();

    let config = Config::load(Some(&explicit), temp.path()).unwrap();
    assert_eq!(config.output.extension, "htm");
    assert_eq!(config.output.dest, PathBuf::from("styleguide"));
}

#[test]
fn malformed_project_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("broken.toml");
    std::fs::write(&explicit, "[output\n").unwrap();
    assert!(matches!(Config::load(Some(&explicit), temp.path()), Err(SbError::Config(_))));
}

#[test]
fn unknown_id_mode_is_rejected() {
    assert!(Config::from_toml("[examples]\nids = \"uuid\"\n").is_err());
}

#[test]
fn init_template_round_trips_through_loader() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(PROJECT_CONFIG_FILE);
    std::fs::write(&path, DEFAULT_CONFIG_TOML).unwrap();
    let config = Config::load(Some(&path), temp.path()).unwrap();
    config.validate().unwrap();
    assert_eq!(
        config.resolved(Path::new("/srv/site")).source.root,
        PathBuf::from("/srv/site/styles")
    );
}
