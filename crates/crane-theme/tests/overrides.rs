use std::io::Write;

use crane_theme::{Overrides, RawValue, ThemeError, ThemeResolver};
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_yaml_file_by_extension() {
    for suffix in [".yaml", ".yml"] {
        let file = temp_file(suffix, "primaryColor: '#000000'\n");
        let overrides = Overrides::from_file(file.path()).unwrap();
        assert_eq!(overrides.get("primaryColor"), Some(&RawValue::from("#000000")));
    }
}

#[test]
fn test_json_file_by_extension() {
    let file = temp_file(".json", r#"{"mediumSpacing": "12px"}"#);
    let overrides = Overrides::from_file(file.path()).unwrap();
    let theme = ThemeResolver::with_overrides(&overrides).unwrap();
    assert_eq!(theme.large_spacing().to_string(), "24px");
}

#[test]
fn test_unknown_extension_is_read_as_yaml() {
    let file = temp_file(".theme", "uppercaseTitles: true\n");
    let overrides = Overrides::from_file(file.path()).unwrap();
    assert_eq!(overrides.get("uppercaseTitles"), Some(&RawValue::Bool(true)));
}

#[test]
fn test_json_content_in_yaml_file_still_parses() {
    // JSON is a subset of YAML.
    let file = temp_file(".yaml", r#"{"linkStyle": "none"}"#);
    let overrides = Overrides::from_file(file.path()).unwrap();
    assert_eq!(overrides.get("linkStyle"), Some(&RawValue::from("none")));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Overrides::from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ThemeError::Io(_)));
}

#[test]
fn test_malformed_files_report_format() {
    let file = temp_file(".json", "{ not json");
    assert!(matches!(
        Overrides::from_file(file.path()).unwrap_err(),
        ThemeError::Json(_)
    ));

    let file = temp_file(".yaml", "primaryColor: [unclosed\n");
    assert!(matches!(
        Overrides::from_file(file.path()).unwrap_err(),
        ThemeError::Yaml(_)
    ));
}

#[test]
fn test_overrides_embed_in_larger_config() {
    #[derive(serde::Deserialize)]
    struct SiteConfig {
        title: String,
        theme: Overrides,
    }

    let config: SiteConfig = serde_yaml::from_str(
        "title: Harbour\ntheme:\n  primaryColor: '#0b3d91'\n  mediumSpacing: 16px\n",
    )
    .unwrap();
    assert_eq!(config.title, "Harbour");

    let theme = ThemeResolver::with_overrides(&config.theme).unwrap();
    assert_eq!(theme.small_spacing().to_string(), "8px");
}

#[test]
fn test_extralarge_typo_is_migrated() {
    let overrides = Overrides::new().set("extralargeSpacing", "90px");
    let theme = ThemeResolver::with_overrides(&overrides).unwrap();
    assert_eq!(theme.extra_large_spacing().to_string(), "90px");
}
