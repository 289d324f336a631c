//! Tests for each supported file format and value substitution

use crate::{ConfigProvider, FileDiscovery};
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn load_project_file(name: &str, contents: &str) -> crate::Config {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("project");
    let global = temp_dir.path().join("global");
    fs::create_dir_all(&project).unwrap();
    fs::create_dir_all(&global).unwrap();
    fs::write(project.join(name), contents).unwrap();

    ConfigProvider::with_discovery(FileDiscovery::with_directories(Some(project), Some(global)))
        .load()
        .unwrap()
}

#[test]
#[serial]
fn test_toml_sections() {
    let config = load_project_file(
        "recordtabs.toml",
        r#"
[Hierarchy]
search = false
treeSearchLimit = 75
"#,
    );
    assert_eq!(config.get_bool("Hierarchy.search"), Some(false));
    assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(75));
}

#[test]
#[serial]
fn test_yml_extension() {
    let config = load_project_file(
        "recordtabs.yml",
        r#"
Hierarchy:
  search: "no"
"#,
    );
    assert_eq!(config.get_bool("Hierarchy.search"), Some(false));
}

#[test]
#[serial]
fn test_json_file() {
    let config = load_project_file(
        "recordtabs.json",
        r#"{"Hierarchy": {"search": 1, "treeSearchLimit": "-1"}}"#,
    );
    assert_eq!(config.get_bool("Hierarchy.search"), Some(true));
    assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(-1));
}

#[test]
#[serial]
fn test_env_substitution_in_file_values() {
    std::env::remove_var("RECORDTABS_TEST_TREE_LIMIT");
    let config = load_project_file(
        "recordtabs.toml",
        r#"
[Hierarchy]
treeSearchLimit = "${RECORDTABS_TEST_TREE_LIMIT:-150}"
"#,
    );
    assert_eq!(config.get_i64("Hierarchy.treeSearchLimit"), Some(150));
}
