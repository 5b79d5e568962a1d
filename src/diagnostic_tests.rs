use std::path::Path;

use super::*;

#[test]
fn category_order_matches_report_order() {
    let mut shuffled = vec![
        Category::NonStandardRadius,
        Category::HardcodedColor,
        Category::ParseError,
        Category::NonStandardSpacing,
        Category::LegacyPattern,
    ];
    shuffled.sort();
    assert_eq!(shuffled, Category::ALL.to_vec());
}

#[test]
fn category_serializes_kebab_case() {
    let json = serde_json::to_string(&Category::NonStandardSpacing).unwrap();
    assert_eq!(json, "\"non-standard-spacing\"");
    assert_eq!(Category::HardcodedColor.to_string(), "hardcoded-color");
}

#[test]
fn diagnostic_trims_source_line() {
    let diag = Diagnostic::new(
        Path::new("a.yaml"),
        3,
        Category::LegacyPattern,
        "yes",
        "    enabled: yes   ",
        "msg",
    );
    assert_eq!(diag.source_line, "enabled: yes");
    assert_eq!(diag.column, None);
}

#[test]
fn diagnostic_sort_key_orders_by_path_then_line() {
    let a = Diagnostic::new(Path::new("a.css"), 9, Category::HardcodedColor, "#123", "", "");
    let b = Diagnostic::new(Path::new("b.css"), 1, Category::HardcodedColor, "#123", "", "");
    let c = Diagnostic::new(Path::new("a.css"), 10, Category::HardcodedColor, "#123", "", "");
    let mut all = [b.clone(), c.clone(), a.clone()];
    all.sort_by(|x, y| x.sort_key().cmp(&y.sort_key()));
    assert_eq!(all, [a, c, b]);
}

#[test]
fn column_is_omitted_from_json_when_absent() {
    let diag = Diagnostic::new(Path::new("x.yml"), 1, Category::ParseError, "", "", "bad");
    let json = serde_json::to_string(&diag).unwrap();
    assert!(!json.contains("column"));

    let with_col = diag.with_column(Some(4));
    let json = serde_json::to_string(&with_col).unwrap();
    assert!(json.contains("\"column\":4"));
}
