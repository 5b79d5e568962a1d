use std::path::Path;

use super::*;

#[test]
fn empty_document_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config: Config = toml::from_str(
        r#"
        [audit]
        tokens = "design/tokens.json"
        mode = "dark"
        "#,
    )
    .unwrap();

    assert_eq!(config.audit.tokens.as_deref(), Some(Path::new("design/tokens.json")));
    assert_eq!(config.audit.mode, Some(ThemeMode::Dark));
    assert_eq!(config.audit.max_listed, 10);
    assert_eq!(config.audit.extensions.len(), 6);
    assert_eq!(config.scanner, ScannerConfig::default());
}

#[test]
fn scanner_section_overrides_lists() {
    let config: Config = toml::from_str(
        r#"
        [scanner]
        exclude_dirs = ["vendor"]
        exclude = ["**/*.generated.ts"]
        gitignore = true
        "#,
    )
    .unwrap();

    assert_eq!(config.scanner.exclude_dirs, ["vendor"]);
    assert_eq!(config.scanner.exclude, ["**/*.generated.ts"]);
    assert!(config.scanner.gitignore);
}

#[test]
fn unknown_fields_are_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[audit]\ncolour = \"red\"\n");
    assert!(result.is_err());

    let result: std::result::Result<Config, _> = toml::from_str("[stats]\nenabled = true\n");
    assert!(result.is_err());
}

#[test]
fn invalid_mode_is_rejected() {
    let result: std::result::Result<Config, _> = toml::from_str("[audit]\nmode = \"sepia\"\n");
    assert!(result.is_err());
}
