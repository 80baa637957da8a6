#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

#[test]
fn Config___from_str___parses_both_tables() {
    let toml = r#"
[generator]
package = "mdmcommands"
responses = false
shared = false
string_maps = true
describe_fields = true

[refs]
package = "ddm"
name = "declarationRefs"
"#;

    let config = Config::from_str(toml).unwrap();

    assert_eq!(config.generator.package, "mdmcommands");
    assert!(!config.generator.responses);
    assert!(!config.generator.shared);
    assert!(config.generator.string_maps);
    assert!(config.generator.describe_fields);
    assert_eq!(config.refs.package, "ddm");
    assert_eq!(config.refs.name, "declarationRefs");
}

#[test]
fn Config___from_str___empty_is_default() {
    let config = Config::from_str("").unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.generator.package, "main");
    assert_eq!(config.refs.name, "idRefs");
}

#[test]
fn Config___from_str___partial_table_keeps_other_defaults() {
    let config = Config::from_str("[generator]\npackage = \"cmds\"\n").unwrap();

    assert_eq!(config.generator.package, "cmds");
    assert!(config.generator.responses);
    assert!(config.generator.shared);
    assert_eq!(config.refs, RefsConfig::default());
}

#[test]
fn Config___from_str___unknown_field_rejected() {
    let result = Config::from_str("[generator]\nno_depend = true\n");

    assert!(result.is_err());
}

#[test]
fn Config___from_str___wrong_type_rejected() {
    let result = Config::from_str("[generator]\nresponses = \"yes\"\n");

    assert!(result.is_err());
}

#[test]
fn Config___from_file___reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mdmgen.toml");
    std::fs::write(&path, "[refs]\nname = \"refs\"\n").unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.refs.name, "refs");
}

#[test]
fn Config___load_explicit_missing_file___error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    let err = Config::load(Some(path.as_path())).unwrap_err();

    assert!(format!("{err:#}").contains("missing.toml"));
}
