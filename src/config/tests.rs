//! Tests for the config module

use super::loader::apply_env;
use super::types::*;
use crate::error::AimlError;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.taxonomy.version, "2.0.1");
    assert!(!config.taxonomy.strict);
    assert!(config.schemas.directory.is_none());
    assert_eq!(config.output.verbosity, Verbosity::Normal);
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[taxonomy]
version = "2.0.1"
strict = true

[schemas]
directory = "/srv/aiml-schemas"

[output]
verbosity = "verbose"
format = "json"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert!(config.taxonomy.strict);
    assert_eq!(
        config.schemas.directory,
        Some(PathBuf::from("/srv/aiml-schemas"))
    );
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config: Config = toml::from_str("[taxonomy]\nstrict = true\n").unwrap();
    assert_eq!(config.taxonomy.version, "2.0.1");
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn test_verbosity_parse() {
    assert_eq!(Verbosity::parse("QUIET"), Some(Verbosity::Quiet));
    assert_eq!(Verbosity::parse(" debug "), Some(Verbosity::Debug));
    assert_eq!(Verbosity::parse("loud"), None);
}

#[test]
fn test_taxonomy_resolves_version() {
    let config = Config::default();
    let taxonomy = config.taxonomy().unwrap();
    assert_eq!(taxonomy.version(), "2.0.1");
}

#[test]
fn test_taxonomy_unsupported_version() {
    let mut config = Config::default();
    config.taxonomy.version = "1.0.0".to_string();

    match config.taxonomy() {
        Err(AimlError::UnsupportedTaxonomyVersion { version, supported }) => {
            assert_eq!(version, "1.0.0");
            assert_eq!(supported, "2.0.1");
        }
        other => panic!("expected unsupported version, got {other:?}"),
    }
}

#[test]
fn test_load_with_warnings_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aiml.toml");
    fs::write(
        &path,
        "[taxonomy]\nversion = \"2.0.1\"\nstrickt = true\n\n[outptu]\nformat = \"json\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert!(!config.taxonomy.strict);
    assert_eq!(warnings.len(), 2);

    assert_eq!(warnings[0].key, "strickt");
    assert_eq!(warnings[0].line, Some(3));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("strict"));
    assert_eq!(warnings[0].file, path);

    assert_eq!(warnings[1].key, "outptu");
    assert_eq!(warnings[1].suggestion.as_deref(), Some("output"));
}

#[test]
fn test_load_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aiml.toml");
    fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

    match Config::load(&path) {
        Err(AimlError::InvalidConfig { file, .. }) => assert_eq!(file, path),
        other => panic!("expected invalid config, got {other:?}"),
    }
}

#[test]
fn test_relative_schema_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aiml.toml");
    fs::write(&path, "[schemas]\ndirectory = \"mirror\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.schemas.directory, Some(dir.path().join("mirror")));
}

#[test]
fn test_discover_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("aiml.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(warnings.is_empty());
}

#[test]
fn test_discover_explicit_path_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let result = Config::discover(Some(&missing), Path::new("."));
    assert!(matches!(result, Err(AimlError::Io(_))));
}

#[test]
fn test_env_overrides() {
    let config = apply_env(
        Config::default(),
        env(&[
            ("AIML_TAXONOMY_VERSION", "v2.0.1"),
            ("AIML_STRICT", "yes"),
            ("AIML_SCHEMA_DIR", "/tmp/schemas"),
            ("AIML_VERBOSITY", "debug"),
        ]),
    );

    assert_eq!(config.taxonomy.version, "v2.0.1");
    assert!(config.taxonomy().is_ok());
    assert!(config.taxonomy.strict);
    assert_eq!(config.schemas.directory, Some(PathBuf::from("/tmp/schemas")));
    assert_eq!(config.output.verbosity, Verbosity::Debug);
}

#[test]
fn test_invalid_env_values_keep_file_values() {
    let mut base = Config::default();
    base.taxonomy.strict = true;
    base.output.verbosity = Verbosity::Quiet;

    let config = apply_env(
        base,
        env(&[("AIML_STRICT", "maybe"), ("AIML_VERBOSITY", "verbos")]),
    );

    assert!(config.taxonomy.strict);
    assert_eq!(config.output.verbosity, Verbosity::Quiet);
}

#[test]
fn test_blank_env_values_ignored() {
    let config = apply_env(
        Config::default(),
        env(&[("AIML_TAXONOMY_VERSION", "  "), ("AIML_SCHEMA_DIR", "")]),
    );
    assert_eq!(config, Config::default());
}
