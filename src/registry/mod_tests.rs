use super::*;

#[test]
fn defaults_allow_documented_colors() {
    let allowed = AllowedValues::default();
    assert!(allowed.is_allowed(Category::HardcodedColor, "#ffffff"));
    assert!(allowed.is_allowed(Category::HardcodedColor, "#fff"));
    assert!(!allowed.is_allowed(Category::HardcodedColor, "#ff0000"));
}

#[test]
fn color_membership_is_case_insensitive() {
    let allowed = AllowedValues::default();
    assert!(allowed.is_allowed(Category::HardcodedColor, "#FFFFFF"));
    assert!(allowed.is_allowed(Category::HardcodedColor, "#4CAF50"));
}

#[test]
fn spacing_allows_scale_and_hairlines() {
    let allowed = AllowedValues::default();
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "16px"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "64"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "1px"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "0px"));
    assert!(!allowed.is_allowed(Category::NonStandardSpacing, "13px"));
    assert!(!allowed.is_allowed(Category::NonStandardSpacing, "10px"));
}

#[test]
fn radii_have_no_hairline_exemption() {
    let allowed = AllowedValues::default();
    assert!(allowed.is_allowed(Category::NonStandardRadius, "8px"));
    assert!(!allowed.is_allowed(Category::NonStandardRadius, "2px"));
    assert!(!allowed.is_allowed(Category::NonStandardRadius, "6px"));
}

#[test]
fn categories_without_a_set_never_allow() {
    let allowed = AllowedValues::default();
    assert!(!allowed.is_allowed(Category::LegacyPattern, "yes"));
    assert!(!allowed.is_allowed(Category::ParseError, ""));
}

#[test]
fn empty_registry_allows_only_hairlines() {
    let allowed = AllowedValues::empty();
    assert!(!allowed.is_allowed(Category::HardcodedColor, "#fff"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "2px"));
    assert!(!allowed.is_allowed(Category::NonStandardSpacing, "4px"));
}

#[test]
fn parse_pixels_accepts_plain_and_suffixed() {
    assert_eq!(parse_pixels("16px"), Some(16));
    assert_eq!(parse_pixels(" 24 "), Some(24));
    assert_eq!(parse_pixels("1rem"), None);
    assert_eq!(parse_pixels("px"), None);
    assert_eq!(parse_pixels("-4px"), None);
    assert_eq!(parse_pixels("99999999999px"), None);
}

#[test]
fn tokens_are_unioned_with_defaults() {
    let tokens = TokenSet::from_json(
        r##"{
            "modes": { "light": { "colors": { "brand": { "primary": "#0055AA" } } } },
            "spacing": { "odd": "10px" },
            "effects": { "radii": { "card": "6px" } }
        }"##,
    )
    .unwrap();
    let allowed = AllowedValues::with_tokens(&tokens, Some(ThemeMode::Light));

    assert!(allowed.is_allowed(Category::HardcodedColor, "#0055aa"));
    assert!(allowed.is_allowed(Category::HardcodedColor, "#ffffff"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "10px"));
    assert!(allowed.is_allowed(Category::NonStandardSpacing, "16px"));
    assert!(allowed.is_allowed(Category::NonStandardRadius, "6px"));
    assert!(allowed.is_allowed(Category::NonStandardRadius, "4px"));
}

#[test]
fn mode_restricts_loaded_colors() {
    let tokens = TokenSet::from_json(
        r##"{ "modes": {
            "light": { "colors": { "a": "#aaaaaa" } },
            "dark": { "colors": { "b": "#bbbbbb" } }
        } }"##,
    )
    .unwrap();

    let light = AllowedValues::with_tokens(&tokens, Some(ThemeMode::Light));
    assert!(light.is_allowed(Category::HardcodedColor, "#aaaaaa"));
    assert!(!light.is_allowed(Category::HardcodedColor, "#bbbbbb"));

    let all = AllowedValues::with_tokens(&tokens, None);
    assert!(all.is_allowed(Category::HardcodedColor, "#aaaaaa"));
    assert!(all.is_allowed(Category::HardcodedColor, "#bbbbbb"));
}

#[test]
fn load_or_default_degrades_on_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let (allowed, notice) =
        AllowedValues::load_or_default(&dir.path().join("missing.json"), None);
    assert_eq!(allowed, AllowedValues::default());
    assert!(notice.is_some());
}

#[test]
fn load_or_default_degrades_on_malformed_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, "{ broken").unwrap();

    let (allowed, notice) = AllowedValues::load_or_default(&path, Some(ThemeMode::Dark));
    assert_eq!(allowed, AllowedValues::default());
    assert!(matches!(notice, Some(crate::LiteralGuardError::Tokens { .. })));
}

#[test]
fn from_token_file_reads_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tokens.json");
    std::fs::write(&path, r##"{ "modes": { "dark": { "colors": { "x": "#ABCDEF" } } } }"##)
        .unwrap();

    let allowed = AllowedValues::from_token_file(&path, Some(ThemeMode::Dark)).unwrap();
    assert!(allowed.is_allowed(Category::HardcodedColor, "#abcdef"));
    assert!(allowed.colors().len() > DEFAULT_COLORS.len());
}
